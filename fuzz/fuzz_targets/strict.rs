#![no_main]

use json_strtod::{parse_lenient, parse_strict_json_number_with, Renormalize, Truncate, MAX_LITERAL_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let truncated = parse_strict_json_number_with(data, &Truncate);
    let retained = parse_strict_json_number_with(data, &Renormalize);
    match (truncated, retained) {
        (Ok((a, len)), Ok((b, len2))) => {
            assert_eq!(len, len2);
            assert!(len > 0 && len <= data.len() && len <= MAX_LITERAL_LEN);
            assert!(!a.is_nan() && !b.is_nan());
            assert_eq!(a.is_sign_negative(), b.is_sign_negative());

            // Every strict number is also a free-form one, spelled the same.
            assert_eq!(parse_lenient(data).1, len);
        }
        (Err(a), Err(b)) => assert_eq!(a.code(), b.code()),
        _ => panic!("accumulation strategy changed what was accepted"),
    }
});
