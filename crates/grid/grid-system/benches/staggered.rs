//! Criterion benchmarks for staggered grid placement.
//!
//! Run: cargo bench -p grid-system --bench staggered
//!
//!   staggered_dashboard:  the 13-card, two-column dashboard
//!   staggered_full/<n>:   a full MAX_CHILDREN grid at n columns

#![allow(
    clippy::unwrap_used,             // benchmark helpers use unwrap for brevity
    clippy::arithmetic_side_effects, // small synthetic heights
    missing_docs,                    // criterion_group! macro generates undocumented items
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use embedded_graphics::prelude::Size;
use grid_system::layout::{Constraints, MAX_CHILDREN};
use grid_system::staggered::{staggered_layout, ColumnCount};

const DASHBOARD_HEIGHTS: [u32; 13] = [
    210, 240, 260, 210, 240, 260, 210, 240, 260, 240, 260, 260, 260,
];

fn bench_dashboard(c: &mut Criterion) {
    let children = DASHBOARD_HEIGHTS.map(|h| Size::new(360, h));
    let constraints = Constraints::scrollable(720);

    c.bench_function("staggered_dashboard", |b| {
        b.iter(|| {
            staggered_layout(black_box(&children), ColumnCount::TWO, constraints).unwrap()
        });
    });
}

fn bench_full_grid(c: &mut Criterion) {
    let children: Vec<Size> = (0..MAX_CHILDREN)
        .map(|i| Size::new(120, 150 + (u32::try_from(i).unwrap() % 7) * 20))
        .collect();
    let constraints = Constraints::scrollable(u32::MAX);

    let mut group = c.benchmark_group("staggered_full");
    for columns in [1usize, 2, 4, 8] {
        let cols = ColumnCount::new(columns).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(columns), &cols, |b, &cols| {
            b.iter(|| staggered_layout(black_box(&children), cols, constraints).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dashboard, bench_full_grid);
criterion_main!(benches);
