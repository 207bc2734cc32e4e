#![no_main]
use libfuzzer_sys::fuzz_target;
use purl_canon::pct_enc::EStr;

fuzz_target!(|data: &str| {
    if let Some(s) = EStr::new(data) {
        let bytes = s.decode().to_bytes();
        assert!(bytes.len() <= data.len());
    }
});
