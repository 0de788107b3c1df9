//! Example splitting an N-queens count across CPU cores.
//!
//! The first-row column partitions the board into independent sub-boards,
//! one per column, each seeded with `Queens::with_first_queen`. Rayon
//! searches the sub-boards in parallel; the per-column counts, their
//! total, and the merged work counters are printed at the end.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example parallel_queens
//! ```
//!
//! Pick the board side (default: 12):
//!
//! ```sh
//! cargo run --release --example parallel_queens -- --size 14
//! ```

use std::{process, time::Instant};

use clap::Parser;
use rayon::prelude::*;
use retrace_engine::{CountOnly, SearchStats, search_with_stats};
use retrace_puzzles::queens::{MAX_BOARD_SIZE, Queens};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(short = 'n', long, value_name = "SIZE", default_value_t = 12)]
    size: usize,
}

fn main() {
    let args = Args::parse();
    if args.size == 0 || args.size > MAX_BOARD_SIZE {
        eprintln!("--size must be between 1 and {MAX_BOARD_SIZE}.");
        process::exit(2);
    }

    let started = Instant::now();
    let per_column: Vec<(usize, u64, SearchStats)> = (0..args.size)
        .into_par_iter()
        .map(|column| {
            let mut space = Queens::with_first_queen(args.size, column)
                .expect("size and column were validated above");
            let mut count = CountOnly::new();
            let mut stats = SearchStats::default();
            search_with_stats(&mut space, &mut count, &mut stats);
            (column, count.count(), stats)
        })
        .collect();
    let elapsed = started.elapsed();

    let mut total = 0_u64;
    let mut stats = SearchStats::default();
    println!("Solutions by first-row column:");
    for (column, count, worker) in &per_column {
        println!("  column {column}: {count}");
        total += count;
        stats.merge(worker);
    }
    println!();
    println!(
        "Total: {total} solutions on a {size}x{size} board",
        size = args.size
    );
    println!(
        "Work: {} nodes, {} applied, {} pruned",
        stats.nodes(),
        stats.applied(),
        stats.pruned(),
    );
    println!("Elapsed: {elapsed:.2?}");
}
