//! End-to-end search benchmarks.
//!
//! Each benchmark runs a complete depth-first search on a fresh space, so
//! the numbers cover candidate generation, legality checks, and apply/undo
//! traffic together rather than any one of them in isolation.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench search
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use retrace_core::SudokuGrid;
use retrace_engine::{CountOnly, search};
use retrace_puzzles::{
    permutations::Permutations, queens::Queens, subsets::Subsets, sudoku::solve_sudoku,
};

const SUDOKU_PUZZLE: &str = "\
    53..7....\n\
    6..195...\n\
    .98....6.\n\
    8...6...3\n\
    4..8.3..1\n\
    7...2...6\n\
    .6....28.\n\
    ...419..5\n\
    ....8..79";

fn bench_queens_count(c: &mut Criterion) {
    for n in [6_usize, 8, 10] {
        c.bench_with_input(BenchmarkId::new("queens_count", n), &n, |b, &n| {
            b.iter_batched_ref(
                || Queens::new(n).unwrap(),
                |space| {
                    let mut count = CountOnly::new();
                    search(space, &mut count);
                    hint::black_box(count.count())
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_sudoku_solve(c: &mut Criterion) {
    let puzzles = [
        ("wikipedia", SUDOKU_PUZZLE.parse::<SudokuGrid>().unwrap()),
        ("empty", SudokuGrid::new()),
    ];

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("sudoku_solve", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(*grid),
                |grid| {
                    solve_sudoku(grid).unwrap();
                    hint::black_box(grid.filled_count())
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_enumeration_count(c: &mut Criterion) {
    let items: Vec<u32> = (0..14).collect();

    c.bench_function("subsets_count_14", |b| {
        b.iter_batched_ref(
            || Subsets::new(&items),
            |space| {
                let mut count = CountOnly::new();
                search(space, &mut count);
                hint::black_box(count.count())
            },
            BatchSize::SmallInput,
        );
    });

    c.bench_function("permutations_count_8", |b| {
        b.iter_batched_ref(
            || Permutations::new(&items[..8]),
            |space| {
                let mut count = CountOnly::new();
                search(space, &mut count);
                hint::black_box(count.count())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_queens_count,
    bench_sudoku_solve,
    bench_enumeration_count,
);
criterion_main!(benches);
