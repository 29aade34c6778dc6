#![no_main]

use json_strtod::from_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    _ = from_slice::<f64>(data);
    _ = from_slice::<Option<i64>>(data);
    _ = from_slice::<u8>(data);
});
