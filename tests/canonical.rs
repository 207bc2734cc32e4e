use purl_canon::*;

const CASES: &[&str] = &[
    "pkg:npm/foo@1.2.3",
    "pkg:NPM/%40Angular/Core@16.0.0?b=2&A=1#/lib//index.js",
    "pkg:pypi/Django_Rest@1.0?empty=&arch=i386",
    "pkg:github/ACME/Repo@main#src/",
    "pkg:maven/org.apache/commons-io@2.0?classifier=sources&repository_url=repo.spring.io/release",
    "pkg:docker/cassandra@sha256:244fd47e07d1004f0aed9c?repository_url=gcr.io",
    "pkg:generic/openssl@1.1.10g?download_url=https://openssl.org/source/openssl-1.1.0g.tar.gz&checksum=sha256:de4d501267da",
    "pkg:generic/a%20b/%C3%BC%2Fx@1%2B1?k=a%26b#%3Fq",
    "pkg://gem/jruby-launcher@1.1.2?Platform=java",
    "pkg:golang/google.golang.org/genproto#googleapis/api/annotations",
    "pkg:npm/foo?flag&os=linux",
];

#[test]
fn canonicalization_is_idempotent() {
    for s in CASES {
        let once = PackageUrl::parse(s).unwrap();
        let canonical = once.to_string();
        let twice = PackageUrl::parse(&canonical).unwrap();
        assert_eq!(once, twice, "{s}");
        assert_eq!(canonical, twice.to_string(), "{s}");
    }
}

#[test]
fn canonical_forms() {
    let expected = [
        "pkg:npm/foo@1.2.3",
        "pkg:npm/%40Angular/Core@16.0.0?a=1&b=2#lib/index.js",
        "pkg:pypi/django-rest@1.0?arch=i386",
        "pkg:github/acme/repo@main#src",
        "pkg:maven/org.apache/commons-io@2.0?classifier=sources&repository_url=repo.spring.io/release",
        "pkg:docker/cassandra@sha256:244fd47e07d1004f0aed9c?repository_url=gcr.io",
        "pkg:generic/openssl@1.1.10g?checksum=sha256%3Ade4d501267da&download_url=https%3A//openssl.org/source/openssl-1.1.0g.tar.gz",
        "pkg:generic/a%20b/%C3%BC%2Fx@1%2B1?k=a%26b#%3Fq",
        "pkg:gem/jruby-launcher@1.1.2?platform=java",
        "pkg:golang/google.golang.org/genproto#googleapis/api/annotations",
        "pkg:npm/foo?os=linux",
    ];

    for (s, expected) in CASES.iter().zip(expected) {
        assert_eq!(PackageUrl::parse(s).unwrap().to_string(), expected, "{s}");
    }
}

#[test]
fn qualifier_order_is_irrelevant() {
    let a = PackageUrl::parse("pkg:deb/curl?os=linux&arch=amd64&distro=jessie").unwrap();
    let b = PackageUrl::parse("pkg:deb/curl?distro=jessie&os=linux&arch=amd64").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
    assert_eq!(a.to_string(), "pkg:deb/curl?arch=amd64&distro=jessie&os=linux");

    let mut q1 = Qualifiers::new();
    q1.insert("z", "1").unwrap().insert("m", "2").unwrap().insert("a", "3").unwrap();
    let mut q2 = Qualifiers::new();
    q2.insert("a", "3").unwrap().insert("z", "1").unwrap().insert("m", "2").unwrap();

    let p1 = PackageUrl::builder("deb", "curl").qualifiers(q1).build().unwrap();
    let p2 = PackageUrl::builder("deb", "curl").qualifiers(q2).build().unwrap();
    assert_eq!(p1.to_string(), p2.to_string());
    assert_eq!(p1.to_string(), "pkg:deb/curl?a=3&m=2&z=1");
}

#[test]
fn type_folding_is_idempotent() {
    for ty in ["github", "gitlab", "bitbucket", "pypi", "npm"] {
        let once = PackageUrl::builder(ty, "Mixed_Name").namespace("Some_NS").build().unwrap();
        let twice = PackageUrl::builder(ty, once.name())
            .namespace(once.namespace().unwrap())
            .build()
            .unwrap();
        assert_eq!(once, twice, "{ty}");
    }
}

#[test]
fn entities_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PackageUrl>();
    assert_send_sync::<Qualifiers>();

    let p = std::sync::Arc::new(PackageUrl::parse("pkg:npm/foo@1.0").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = p.clone();
            std::thread::spawn(move || p.to_string())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "pkg:npm/foo@1.0");
    }
}
