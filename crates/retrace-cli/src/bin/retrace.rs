//! Command-line puzzle solvers.
//!
//! # Usage
//!
//! Count or list N-queens placements:
//!
//! ```sh
//! retrace queens 8 --count
//! retrace queens 6 --boards
//! ```
//!
//! Solve a Sudoku grid from a file or standard input:
//!
//! ```sh
//! retrace sudoku puzzle.txt
//! retrace sudoku < puzzle.txt
//! ```
//!
//! Find a word in a rectangular letter grid:
//!
//! ```sh
//! retrace word ABCCED grid.txt
//! ```
//!
//! Exit code 0 means a solution was found (or an enumeration completed),
//! 1 means the search proved there is nothing to find, and 2 means the
//! input never described a searchable problem. Set `RUST_LOG=info` for
//! search statistics on standard error.

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, Subcommand};
use retrace_core::{LetterGrid, SudokuGrid};
use retrace_engine::{CollectAll, CountOnly, FirstOnly, SearchStats, search_with_stats};
use retrace_puzzles::{
    SolveError,
    queens::{Queens, queens_board_lines},
    sudoku::Sudoku,
    word_search::word_search_path,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List, draw, or count the ways to place N non-attacking queens.
    Queens {
        /// Board side length.
        #[arg(value_name = "SIZE")]
        size: usize,

        /// Print only the number of placements.
        #[arg(long, conflicts_with_all = ["boards", "first"])]
        count: bool,

        /// Draw each placement as a board instead of a column list.
        #[arg(long)]
        boards: bool,

        /// Stop at the first placement.
        #[arg(long)]
        first: bool,
    },
    /// Solve a Sudoku grid read from FILE or standard input.
    Sudoku {
        /// File containing 81 cells; `.`, `_`, and `0` mark empties and
        /// whitespace is ignored.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// Find a word in a letter grid read from FILE or standard input.
    ///
    /// The word may start anywhere and steps to horizontally or
    /// vertically adjacent cells, never revisiting one.
    Word {
        /// The word to look for (case-sensitive).
        #[arg(value_name = "WORD")]
        word: String,

        /// File containing the grid, one row per line.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

/// Failed outcomes, split by exit code.
enum Failure {
    /// The search finished and proved there is nothing to find (exit 1).
    NoSolution(String),
    /// The input never described a searchable problem (exit 2).
    BadInput(String),
}

fn solve_failure(error: SolveError) -> Failure {
    match error {
        SolveError::InvalidInput { .. } => Failure::BadInput(error.to_string()),
        SolveError::Unsolvable => Failure::NoSolution(error.to_string()),
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    match run(Args::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::NoSolution(message)) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
        Err(Failure::BadInput(message)) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> Result<(), Failure> {
    match command {
        Command::Queens {
            size,
            count,
            boards,
            first,
        } => run_queens(size, count, boards, first),
        Command::Sudoku { file } => run_sudoku(file.as_deref()),
        Command::Word { word, file } => run_word(&word, file.as_deref()),
    }
}

fn run_queens(size: usize, count: bool, boards: bool, first: bool) -> Result<(), Failure> {
    let mut space = Queens::new(size).map_err(solve_failure)?;
    let started = Instant::now();
    let mut stats = SearchStats::default();

    if count {
        let mut counter = CountOnly::new();
        search_with_stats(&mut space, &mut counter, &mut stats);
        log_stats("queens", started, &stats);
        println!("{}", counter.count());
        return Ok(());
    }

    if first {
        let mut collector = FirstOnly::new();
        search_with_stats(&mut space, &mut collector, &mut stats);
        log_stats("queens", started, &stats);
        let Some(placement) = collector.into_solution() else {
            return Err(no_queens_placement(size));
        };
        print_placement(&placement, boards);
        return Ok(());
    }

    let mut all = CollectAll::new();
    search_with_stats(&mut space, &mut all, &mut stats);
    log_stats("queens", started, &stats);
    let placements = all.into_solutions();
    if placements.is_empty() {
        return Err(no_queens_placement(size));
    }
    for (index, placement) in placements.iter().enumerate() {
        if boards && index > 0 {
            println!();
        }
        print_placement(placement, boards);
    }
    match placements.len() {
        1 => println!("1 solution"),
        count => println!("{count} solutions"),
    }
    Ok(())
}

fn no_queens_placement(size: usize) -> Failure {
    Failure::NoSolution(format!(
        "no placement of {size} non-attacking queens exists"
    ))
}

fn print_placement(placement: &[usize], boards: bool) {
    if boards {
        for line in queens_board_lines(placement) {
            println!("{line}");
        }
    } else {
        println!("{placement:?}");
    }
}

fn run_sudoku(file: Option<&Path>) -> Result<(), Failure> {
    let text = read_input(file)?;
    let grid: SudokuGrid = text
        .parse()
        .map_err(|error| Failure::BadInput(format!("cannot read the grid: {error}")))?;

    let started = Instant::now();
    let mut space = Sudoku::new(&grid).map_err(solve_failure)?;
    let mut first = FirstOnly::new();
    let mut stats = SearchStats::default();
    search_with_stats(&mut space, &mut first, &mut stats);
    log_stats("sudoku", started, &stats);

    let Some(solved) = first.into_solution() else {
        return Err(Failure::NoSolution("the grid has no completion".to_owned()));
    };
    println!("{solved}");
    Ok(())
}

fn run_word(word: &str, file: Option<&Path>) -> Result<(), Failure> {
    let text = read_input(file)?;
    let grid: LetterGrid = text
        .parse()
        .map_err(|error| Failure::BadInput(format!("cannot read the grid: {error}")))?;

    let started = Instant::now();
    let path = word_search_path(&grid, word).map_err(solve_failure)?;
    log::info!("word: searched in {:.2?}", started.elapsed());

    let Some(path) = path else {
        return Err(Failure::NoSolution(format!(
            "{word:?} does not occur in the grid"
        )));
    };
    let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
    if steps.is_empty() {
        println!("found {word:?}");
    } else {
        println!("found {word:?} at {}", steps.join(" -> "));
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String, Failure> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|error| {
            Failure::BadInput(format!("cannot read {}: {error}", path.display()))
        }),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(|error| {
                Failure::BadInput(format!("cannot read standard input: {error}"))
            })?;
            Ok(text)
        }
    }
}

fn log_stats(label: &str, started: Instant, stats: &SearchStats) {
    log::info!(
        "{label}: {} nodes, {} applied, {} pruned, {} solutions in {:.2?}",
        stats.nodes(),
        stats.applied(),
        stats.pruned(),
        stats.solutions(),
        started.elapsed(),
    );
}
