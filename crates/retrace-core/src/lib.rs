//! Core value types for backtracking search problems.
//!
//! This crate provides the board, coordinate, and occupancy-index types
//! shared by the search engine and the puzzle solvers. Everything here is
//! a plain value: cheap to copy or clone, free of search logic, and
//! validated at construction so the solvers never re-check shape.
//!
//! # Overview
//!
//! 1. **Coordinates** - where things are on a board
//!    - [`position`]: `(x, y)` cell coordinates with row-major ordering
//!    - [`direction`]: the four orthogonal step directions in their fixed
//!      candidate order
//! 2. **Occupancy indexes** - O(1) membership tracking for search
//!    - [`bit_set`]: single-word index sets ([`BitSet<u32>`],
//!      [`BitSet<u64>`]) for columns and diagonals
//!    - [`cell_set`]: runtime-sized bitmap for visited grid cells
//!    - [`digit_set`]: 9-bit presence mask for Sudoku digits
//! 3. **Boards** - validated puzzle input
//!    - [`digit`]: type-safe Sudoku digit 1-9
//!    - [`sudoku_grid`]: 9x9 board with text parsing and display
//!    - [`letter_grid`]: rectangular character grid for word search
//!
//! [`BitSet<u32>`]: bit_set::BitSet
//! [`BitSet<u64>`]: bit_set::BitSet
//!
//! # Examples
//!
//! ```
//! use retrace_core::{Digit, DigitSet, Position, SudokuGrid};
//!
//! let mut grid = SudokuGrid::new();
//! grid.set(Position::new(0, 0), Digit::D5);
//!
//! let mut row = DigitSet::new();
//! for x in 0..SudokuGrid::SIZE {
//!     if let Some(digit) = grid.get(Position::new(x, 0)) {
//!         row.insert(digit);
//!     }
//! }
//! assert!(row.contains(Digit::D5));
//! ```

pub mod bit_set;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod direction;
pub mod letter_grid;
pub mod position;
pub mod sudoku_grid;

// Re-export commonly used types
pub use self::{
    bit_set::{BitSet, Bits},
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    direction::Direction,
    letter_grid::{LetterGrid, LetterGridError},
    position::Position,
    sudoku_grid::{ParseGridError, SudokuGrid},
};
