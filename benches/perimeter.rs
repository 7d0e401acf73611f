//! Performance measurement for perimeter offset resolution

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use mazecarve::algorithm::perimeter::{cell_at_perimeter_offset, perimeter_len};
use std::hint::black_box;

/// Measures resolving every offset of the 41x41 boundary cycle
fn bench_full_cycle(c: &mut Criterion) {
    c.bench_function("perimeter_full_cycle_41x41", |b| {
        b.iter(|| {
            let perimeter = perimeter_len(41, 41);
            for offset in 0..perimeter {
                black_box(cell_at_perimeter_offset(41, 41, black_box(offset)));
            }
        });
    });
}

criterion_group!(benches, bench_full_cycle);
criterion_main!(benches);
