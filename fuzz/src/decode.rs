#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = strata::decode(data) {
        // Decoding accepts any map order, encoding must then be stable.
        let bytes = strata::encode(&value);
        assert_eq!(strata::decode(&bytes).unwrap(), value);
        assert_eq!(strata::encode(&value), bytes);
    }
});
