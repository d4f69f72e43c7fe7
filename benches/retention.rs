//! Read cost of the two retention strategies
//!
//! Compressed stores pay a decompression per read, lazy stores a file read.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use digest_store::{util, CompressedDigestStore, DigestStore, LazyDigestStore};
use tempfile::tempdir;

fn payload(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 64) as u8 + b' ').collect()
}

fn bench_reads(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let mut group = c.benchmark_group("bytes");

    for size in [4 * 1024, 256 * 1024, 4 * 1024 * 1024] {
        let data = payload(size);
        let digest = util::digest(&data);
        let path = dir.path().join(format!("blob-{}", size));
        std::fs::write(&path, &data).unwrap();

        let compressed =
            CompressedDigestStore::new(&data, "application/octet-stream", &digest, size as u64)
                .unwrap();
        let lazy = LazyDigestStore::from_path(&path, "application/octet-stream", &digest);

        group.bench_with_input(BenchmarkId::new("compressed", size), &compressed, |b, s| {
            b.iter(|| black_box(s.bytes().unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("lazy", size), &lazy, |b, s| {
            b.iter(|| black_box(s.bytes().unwrap()))
        });
    }

    group.finish();
}

fn bench_digest(c: &mut Criterion) {
    let data = payload(1024 * 1024);
    c.bench_function("digest_1mib", |b| b.iter(|| util::digest(black_box(&data))));
}

criterion_group!(benches, bench_reads, bench_digest);
criterion_main!(benches);
