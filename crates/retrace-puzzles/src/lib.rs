//! Backtracking solvers for classic search puzzles.
//!
//! Every solver describes its problem as a
//! [`SearchSpace`](retrace_engine::SearchSpace) and hands it to the shared
//! engine. Each module pairs the space type with plain entry points; the
//! spaces stay public for callers who want work counters, cancellation,
//! or streamed solutions instead.
//!
//! # Overview
//!
//! 1. **Board puzzles** - [`queens`], [`sudoku`], [`word_search`]
//!    - [`solve_n_queens`], [`count_n_queens`], [`queens_board_lines`]
//!    - [`solve_sudoku`], [`sudoku_solution_count`],
//!      [`sudoku_has_unique_solution`]
//!    - [`word_search_exists`], [`word_search_path`]
//! 2. **Selection enumeration** - [`subsets`], [`permutations`],
//!    [`combinations`]
//!    - [`enumerate_subsets`], [`enumerate_permutations`],
//!      [`enumerate_combinations`], each visiting duplicate-bearing
//!      inputs without repeating a result
//! 3. **Composition searches** - [`mod@letter_combinations`],
//!    [`mod@combination_sum`], [`mod@palindrome_partitions`]
//! 4. **Failure reporting** - [`error`]
//!    - [`SolveError`]: bad input versus exhausted search
//!
//! Solutions always arrive in depth-first order, so every entry point is
//! deterministic.
//!
//! # Examples
//!
//! ```
//! use retrace_puzzles::{count_n_queens, enumerate_subsets};
//!
//! assert_eq!(count_n_queens(8)?, 92);
//! assert_eq!(enumerate_subsets(&[1, 2, 3]).len(), 8);
//! # Ok::<(), retrace_puzzles::SolveError>(())
//! ```

pub mod combination_sum;
pub mod combinations;
pub mod error;
pub mod letter_combinations;
pub mod palindrome_partitions;
pub mod permutations;
pub mod queens;
pub mod subsets;
pub mod sudoku;
pub mod word_search;

// Re-export commonly used types
pub use self::{
    combination_sum::combination_sum,
    combinations::enumerate_combinations,
    error::SolveError,
    letter_combinations::letter_combinations,
    palindrome_partitions::palindrome_partitions,
    permutations::enumerate_permutations,
    queens::{count_n_queens, queens_board_lines, solve_n_queens},
    subsets::enumerate_subsets,
    sudoku::{solve_sudoku, sudoku_has_unique_solution, sudoku_solution_count},
    word_search::{word_search_exists, word_search_path},
};
