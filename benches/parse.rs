//! Benchmarks for MAR parsing.
//!
//! Run with: `cargo bench`
//! Compare with baseline: `cargo bench -- --save-baseline main`
//! Compare against baseline: `cargo bench -- --baseline main`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mar_stream::{parse, MarArchive};

/// Build an archive of `count` entries with `size`-byte payloads.
fn build_archive(count: usize, size: usize) -> Vec<u8> {
    let mut out = b"MAR1\0\0\0\0".to_vec();
    let mut index = Vec::new();
    for i in 0..count {
        let offset = out.len() as u32;
        out.extend((0..size).map(|b| (b + i) as u8));
        index.extend_from_slice(&offset.to_be_bytes());
        index.extend_from_slice(&(size as u32).to_be_bytes());
        index.extend_from_slice(&0u32.to_be_bytes());
        index.extend_from_slice(format!("entry-{i:05}.bin").as_bytes());
        index.push(0);
    }
    let index_offset = out.len() as u32;
    out[4..8].copy_from_slice(&index_offset.to_be_bytes());
    out.extend_from_slice(&(index.len() as u32).to_be_bytes());
    out.extend_from_slice(&index);
    out
}

/// Benchmark payload extraction across entry counts.
fn bench_parse_payloads(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for count in [1, 64, 4096] {
        let data = build_archive(count, 256);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| black_box(parse(black_box(data))));
        });
    }
    group.finish();
}

/// Benchmark named parsing plus lookup of the last entry.
fn bench_named_lookup(c: &mut Criterion) {
    let data = build_archive(1024, 64);

    c.bench_function("parse_and_get", |b| {
        b.iter(|| {
            let archive = MarArchive::parse(black_box(&data)).ok();
            black_box(archive.and_then(|a| a.get("entry-01023.bin").map(|e| e.length())))
        });
    });
}

criterion_group!(benches, bench_parse_payloads, bench_named_lookup);
criterion_main!(benches);
