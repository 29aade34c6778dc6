#![no_main]

use json_strtod::parse_lenient_checked;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let number = parse_lenient_checked(data);
    assert!(number.len <= data.len());
    assert!(!number.value.is_nan());
    if number.len == 0 {
        assert_eq!(number.value, 0.0);
        assert!(!number.out_of_range);
    }
});
