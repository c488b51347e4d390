//! Benchmarks for the environment layout codec

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uenv::integrity::checksum;
use uenv::layout::{decode, encode, EnvMap};

/// Typical U-Boot environment size
const ENV_SIZE: usize = 0x2_0000;
const HEADER_SIZE: usize = 5;

fn sample_env() -> EnvMap {
    (0..200)
        .map(|i| (format!("var_{:03}", i), format!("value for entry number {}", i)))
        .collect()
}

fn codec_benchmarks(c: &mut Criterion) {
    let map = sample_env();
    let capacity = ENV_SIZE - HEADER_SIZE;
    let region = encode(&map, capacity).unwrap();

    c.bench_function("encode_200_entries", |b| {
        b.iter(|| encode(black_box(&map), capacity).unwrap())
    });

    c.bench_function("decode_200_entries", |b| {
        b.iter(|| decode(black_box(&region)).unwrap())
    });

    c.bench_function("crc_128k_region", |b| b.iter(|| checksum(black_box(&region))));
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
