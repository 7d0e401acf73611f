//! Performance measurement for complete maze generation at varying grid sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mazecarve::algorithm::generate_seeded;
use std::hint::black_box;

/// Measures full generation cost as the grid edge doubles
fn bench_generate_maze(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_maze");

    for size in &[21_usize, 41, 81, 161] {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let maze = generate_seeded(black_box(size), black_box(size), 12345);
                black_box(maze)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_maze);
criterion_main!(benches);
