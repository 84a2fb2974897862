use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde::{Deserialize, Serialize};
use serde_application::{from_str, from_str_with_options, to_string, ApplicationOptions};

#[derive(Serialize, Deserialize, Clone)]
struct Endpoint {
    #[serde(rename = "Host")]
    host: String,
    #[serde(rename = "Port")]
    port: u16,
    #[serde(rename = "Secure")]
    secure: bool,
    #[serde(rename = "Weight")]
    weight: f64,
    #[serde(rename = "Region")]
    region: String,
}

const DOCUMENT: &str =
    "Host: cache-01.internal\r\nPort: 11211\r\nSecure: True\r\nWeight: 0.75\r\nRegion: eu-west-1\r\n";

fn benchmark_encode(c: &mut Criterion) {
    let endpoint = Endpoint {
        host: "cache-01.internal".to_string(),
        port: 11211,
        secure: true,
        weight: 0.75,
        region: "eu-west-1".to_string(),
    };

    c.bench_function("encode_record", |b| {
        b.iter(|| to_string(black_box(&endpoint)))
    });
}

fn benchmark_decode(c: &mut Criterion) {
    c.bench_function("decode_record", |b| {
        b.iter(|| from_str::<Endpoint>(black_box(DOCUMENT)))
    });
}

fn benchmark_decode_case_insensitive(c: &mut Criterion) {
    let document = DOCUMENT.to_ascii_lowercase();

    c.bench_function("decode_record_case_insensitive", |b| {
        b.iter(|| {
            let options = ApplicationOptions::new().with_case_insensitive_fields(true);
            from_str_with_options::<Endpoint>(black_box(&document), options)
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_decode_case_insensitive
);
criterion_main!(benches);
