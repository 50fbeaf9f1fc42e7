//! Criterion micro-benchmarks for grid operations.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use turmite_core::{Color, Heading, Position};
use turmite_engine::GridFill;
use turmite_grid::Grid;

/// Benchmark: wrapped reads over every cell of a 60x40 grid, offset by
/// one full lap so every lookup goes through the modulo path.
fn bench_color_at_wrapped(c: &mut Criterion) {
    let grid = GridFill::Scattered { seed: 7 }.build(60, 40).unwrap();

    c.bench_function("color_at_wrapped_2400", |b| {
        b.iter(|| {
            let mut n = 0usize;
            for y in -40i64..0 {
                for x in 60i64..120 {
                    if grid.color_at(x, y) == Color::Yellow {
                        n += 1;
                    }
                }
            }
            black_box(n)
        });
    });
}

/// Benchmark: neighbours() on all cells of a 100x100 grid.
fn bench_neighbours_10k(c: &mut Criterion) {
    let grid = Grid::new(100, 100).unwrap();

    c.bench_function("neighbours_10k", |b| {
        b.iter(|| {
            for y in 0..100u32 {
                for x in 0..100u32 {
                    black_box(grid.neighbours(Position::new(x, y)));
                }
            }
        });
    });
}

/// Benchmark: offset() around the seam of a 60x40 grid.
fn bench_offset_seam(c: &mut Criterion) {
    let grid = Grid::new(60, 40).unwrap();

    c.bench_function("offset_seam_4x60", |b| {
        b.iter(|| {
            let mut pos = Position::new(0, 0);
            for h in Heading::ALL {
                for _ in 0..60 {
                    pos = grid.offset(pos, h);
                }
            }
            black_box(pos)
        });
    });
}

/// Benchmark: fingerprinting a 1M-cell grid.
fn bench_fingerprint_1m(c: &mut Criterion) {
    let grid = Grid::new(1000, 1000).unwrap();

    c.bench_function("fingerprint_1m", |b| {
        b.iter(|| black_box(grid.fingerprint()));
    });
}

criterion_group!(
    benches,
    bench_color_at_wrapped,
    bench_neighbours_10k,
    bench_offset_seam,
    bench_fingerprint_1m
);
criterion_main!(benches);
