//! Benchmark encoding, decoding, parsing and hashing time.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use benches::fixture;

criterion_main! { benches }
criterion_group! { benches, bench_encode, bench_decode, bench_parse, bench_hash }

const SIZES: [usize; 3] = [1, 50, 500];

/// Benchmarks the time taken to encode a value, compared to serializing the
/// same data as JSON.
fn bench_encode(c: &mut Criterion) {
    let mut g = c.benchmark_group("encode");
    for n in SIZES {
        let registry = fixture::random(n);
        let value = strata::to_value(&registry).unwrap();
        g.throughput(Throughput::Bytes(strata::encode(&value).len() as u64));
        g.bench_with_input(BenchmarkId::new("strata", n), &value, |b, value| {
            b.iter(|| strata::encode(value));
        });
        g.bench_with_input(BenchmarkId::new("serde_json", n), &registry, |b, registry| {
            b.iter(|| serde_json::to_vec(registry).unwrap());
        });
    }
}

/// Benchmarks the time taken to decode a value.
fn bench_decode(c: &mut Criterion) {
    let mut g = c.benchmark_group("decode");
    for n in SIZES {
        let bytes = strata::encode(&benches::value(n));
        g.throughput(Throughput::Bytes(bytes.len() as u64));
        g.bench_with_input(BenchmarkId::new("strata", n), &bytes, |b, bytes| {
            b.iter(|| strata::decode(bytes).unwrap());
        });
    }
}

/// Benchmarks the time taken to parse text notation.
fn bench_parse(c: &mut Criterion) {
    let mut g = c.benchmark_group("parse");
    for n in SIZES {
        let text = benches::text(n);
        g.throughput(Throughput::Bytes(text.len() as u64));
        g.bench_with_input(BenchmarkId::new("strata", n), &text, |b, text| {
            b.iter(|| strata::parse(text).unwrap());
        });
    }
}

/// Benchmarks the time taken to hash a value, including encoding it.
fn bench_hash(c: &mut Criterion) {
    let mut g = c.benchmark_group("hash");
    for n in SIZES {
        let value = benches::value(n);
        g.bench_with_input(BenchmarkId::new("strata", n), &value, |b, value| {
            b.iter(|| strata::hash_value(value));
        });
    }
}
