use criterion::{black_box, criterion_group, criterion_main, Criterion};
use purl_canon::{
    pct_enc::{encode, encoder::QualifierValue, EStr},
    PackageUrl, Qualifiers,
};

criterion_group!(
    benches,
    bench_parse,
    bench_parse_noisy,
    bench_build,
    bench_to_string,
    bench_encode,
    bench_decode,
);
criterion_main!(benches);

const PARSE_CASE: &str =
    "pkg:maven/org.apache.commons/commons-io@2.11.0?classifier=sources&type=jar#src/main";
const NOISY_CASE: &str =
    "pkg://PyPI/Some_NS/Django_Rest@1.0?Os=Linux&arch=&B=%E6%B5%8B%E8%AF%95#/a//b/";
const ENCODE_CASE: &str = "https://example.com/测试 file.tar.gz?x=1";
const DECODE_CASE: &str = "https%3A//example.com/%E6%B5%8B%E8%AF%95%20file.tar.gz%3Fx%3D1";

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| PackageUrl::parse(black_box(PARSE_CASE)))
    });
}

fn bench_parse_noisy(c: &mut Criterion) {
    c.bench_function("parse_noisy", |b| {
        b.iter(|| PackageUrl::parse(black_box(NOISY_CASE)))
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build", |b| {
        b.iter(|| {
            let mut qualifiers = Qualifiers::new();
            qualifiers.insert("classifier", "sources").unwrap();
            PackageUrl::builder("maven", "commons-io")
                .namespace("org.apache.commons")
                .version("2.11.0")
                .qualifiers(qualifiers)
                .subpath("src/main")
                .build()
        })
    });
}

fn bench_to_string(c: &mut Criterion) {
    let p = PackageUrl::parse(NOISY_CASE).unwrap();
    c.bench_function("to_string", |b| b.iter(|| black_box(&p).to_string()));
}

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode", |b| {
        b.iter(|| encode::<QualifierValue>(black_box(ENCODE_CASE)))
    });
}

fn bench_decode(c: &mut Criterion) {
    let s = EStr::new(DECODE_CASE).unwrap();
    c.bench_function("decode", |b| b.iter(|| black_box(s).decode().to_string()));
}
