//! Benchmarks for full-board minimisation and a single stepped pass.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench minimizer
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use knightcover_core::{BoardSize, Grid};
use knightcover_solver::{CancelToken, SteppedReducer, cover, greedy};

const SIZES: [(usize, usize); 4] = [(5, 5), (8, 8), (12, 12), (16, 20)];

fn board(rows: usize, cols: usize) -> Grid {
    Grid::filled(BoardSize::new(rows, cols).unwrap())
}

fn bench_is_full_cover(c: &mut Criterion) {
    for (rows, cols) in SIZES {
        let mut grid = board(rows, cols);
        greedy::minimize(&mut grid);
        c.bench_with_input(
            BenchmarkId::new("is_full_cover", format!("{rows}x{cols}")),
            &grid,
            |b, grid| b.iter(|| hint::black_box(cover::is_full_cover(hint::black_box(grid)))),
        );
    }
}

fn bench_minimize(c: &mut Criterion) {
    for (rows, cols) in SIZES {
        c.bench_with_input(
            BenchmarkId::new("minimize", format!("{rows}x{cols}")),
            &board(rows, cols),
            |b, grid| {
                b.iter_batched_ref(
                    || hint::black_box(grid.clone()),
                    |grid| hint::black_box(greedy::minimize(grid)),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_stepped_pass(c: &mut Criterion) {
    let cancel = CancelToken::new();
    for (rows, cols) in SIZES {
        c.bench_with_input(
            BenchmarkId::new("stepped_pass", format!("{rows}x{cols}")),
            &board(rows, cols),
            |b, grid| {
                b.iter_batched(
                    || SteppedReducer::new(grid.clone()),
                    |mut reducer| {
                        let mut events = 0usize;
                        reducer.run(&cancel, |_, _| events += 1);
                        hint::black_box(events)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_is_full_cover, bench_minimize, bench_stepped_pass);
criterion_main!(benches);
