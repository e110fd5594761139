#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(value) = strata::parse(data) {
        let bytes = strata::encode(&value);
        assert_eq!(strata::decode(&bytes).unwrap(), value);
    }
});
