#![no_main]
use libfuzzer_sys::fuzz_target;
use purl_canon::PackageUrl;

fuzz_target!(|data: &str| {
    let Ok(p) = PackageUrl::parse(data) else {
        return;
    };
    let canonical = p.to_string();
    let q = PackageUrl::parse(&canonical).unwrap();
    assert_eq!(p, q);
    assert_eq!(canonical, q.to_string());
});
