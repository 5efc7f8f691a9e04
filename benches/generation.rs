//! Performance measurement for complete spanning tree generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use gridloom::GridGraphGenerator;
use std::hint::black_box;

/// Measures time to grow a 32 by 32 tree from a fixed seed
fn bench_generate_32_by_32(c: &mut Criterion) {
    c.bench_function("generate_32_by_32", |b| {
        b.iter(|| {
            let Ok(mut generator) = GridGraphGenerator::seeded(32, 32, 0, 12345) else {
                return;
            };

            if generator.generate_grid().is_err() {
                return;
            }
            black_box(generator.visited_cells());
        });
    });
}

/// Measures generation with heavy loop injection over a 16 by 16 grid
fn bench_generate_with_loops(c: &mut Criterion) {
    c.bench_function("generate_16_by_16_with_loops", |b| {
        b.iter(|| {
            let Ok(mut generator) = GridGraphGenerator::seeded(16, 16, 64, 777) else {
                return;
            };

            if generator.generate_grid().is_err() {
                return;
            }
            black_box(generator.visited_cells());
        });
    });
}

criterion_group!(benches, bench_generate_32_by_32, bench_generate_with_loops);
criterion_main!(benches);
