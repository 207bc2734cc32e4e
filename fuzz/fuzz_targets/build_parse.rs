#![no_main]
use libfuzzer_sys::{
    arbitrary::{self, Arbitrary},
    fuzz_target,
};
use purl_canon::{PackageUrl, Qualifiers};

#[derive(Arbitrary, Debug)]
struct Components<'a> {
    ty: &'a str,
    namespace: Option<&'a str>,
    name: &'a str,
    version: Option<&'a str>,
    qualifiers: Vec<(&'a str, &'a str)>,
    subpath: Option<&'a str>,
}

fuzz_target!(|c: Components<'_>| {
    let Ok(qualifiers) = Qualifiers::try_from_iter(c.qualifiers) else {
        return;
    };

    let mut builder = PackageUrl::builder(c.ty, c.name).qualifiers(qualifiers);
    if let Some(namespace) = c.namespace {
        builder = builder.namespace(namespace);
    }
    if let Some(version) = c.version {
        builder = builder.version(version);
    }
    if let Some(subpath) = c.subpath {
        builder = builder.subpath(subpath);
    }

    let Ok(p) = builder.build() else {
        return;
    };
    assert_eq!(p, PackageUrl::parse(&p.to_string()).unwrap());
});
