#![no_main]
use libfuzzer_sys::fuzz_target;
use purl_canon::pct_enc::{encode, encoder::*, EStr};

fn check<E: Encoder>(data: &str) {
    let encoded = encode::<E>(data);
    let decoded = EStr::new(&encoded).unwrap().decode().to_string().unwrap();
    assert_eq!(data, decoded);
}

fuzz_target!(|data: &str| {
    check::<Namespace>(data);
    check::<Name>(data);
    check::<Version>(data);
    check::<QualifierValue>(data);
    check::<Subpath>(data);
});
