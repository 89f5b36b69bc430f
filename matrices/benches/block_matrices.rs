//! Block matrices benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wavecore_matrices::*;

fn block_matrices_benchmark(c: &mut Criterion) {
    c.bench_function("block_matrix_creation", |b| {
        b.iter(|| {
            // TODO: Implement block matrix creation benchmark
            black_box(());
        });
    });
}

criterion_group!(benches, block_matrices_benchmark);
criterion_main!(benches); 