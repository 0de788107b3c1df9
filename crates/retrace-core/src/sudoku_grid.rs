//! 9x9 Sudoku board.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Digit, Position};

/// Error produced when parsing a [`SudokuGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character that is neither a digit, an empty-cell marker, nor
    /// whitespace.
    #[display("invalid grid character: {character:?}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
    },
    /// The text does not contain exactly 81 cells.
    #[display("expected 81 cells, found {found}")]
    WrongCellCount {
        /// Number of cell characters found.
        found: usize,
    },
}

/// A 9x9 Sudoku board where each cell is either a [`Digit`] or empty.
///
/// The grid stores values only; it does not enforce Sudoku rules itself.
/// Rule checking belongs to the search that fills it, which keeps this
/// type usable for representing intermediate and even contradictory
/// boards (e.g. freshly parsed user input).
///
/// # Examples
///
/// ```
/// use retrace_core::{Digit, Position, SudokuGrid};
///
/// let mut grid = SudokuGrid::new();
/// assert!(grid.get(Position::new(0, 0)).is_none());
///
/// grid.set(Position::new(0, 0), Digit::D5);
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// ```
///
/// Grids parse from 81 cell characters; `.`, `_`, and `0` mark empty
/// cells and whitespace is ignored:
///
/// ```
/// use retrace_core::SudokuGrid;
///
/// let grid: SudokuGrid = "
///     53..7....
///     6..195...
///     .98....6.
///     8...6...3
///     4..8.3..1
///     7...2...6
///     .6....28.
///     ...419..5
///     ....8..79
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.filled_count(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SudokuGrid {
    cells: [[Option<Digit>; 9]; 9],
}

impl SudokuGrid {
    /// Board side length.
    pub const SIZE: u8 = 9;

    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Returns the digit at `pos`, or `None` for an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the 9x9 board.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }

    /// Places a digit at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the 9x9 board.
    #[inline]
    pub fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[usize::from(pos.y())][usize::from(pos.x())] = Some(digit);
    }

    /// Empties the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the 9x9 board.
    #[inline]
    pub fn clear(&mut self, pos: Position) {
        self.cells[usize::from(pos.y())][usize::from(pos.x())] = None;
    }

    /// Returns the index (0-8) of the 3x3 box containing `pos`.
    ///
    /// Boxes are numbered row-major: the top-left box is 0, the
    /// bottom-right box is 8.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the 9x9 board.
    #[must_use]
    pub fn box_index(pos: Position) -> usize {
        assert!(pos.x() < Self::SIZE && pos.y() < Self::SIZE, "position off board: {pos}");
        usize::from(pos.y() / 3 * 3 + pos.x() / 3)
    }

    /// Iterates all board positions in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..Self::SIZE).flat_map(|y| (0..Self::SIZE).map(move |x| Position::new(x, y)))
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some())
            .count()
    }
}

impl Default for SudokuGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SudokuGrid {
    type Err = ParseGridError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut filled = 0_usize;
        for character in text.chars() {
            if character.is_whitespace() {
                continue;
            }
            if filled >= 81 {
                // Count the rest so the error reports the real total.
                filled += 1;
                continue;
            }
            #[expect(clippy::cast_possible_truncation)]
            let pos = Position::new((filled % 9) as u8, (filled / 9) as u8);
            match character {
                '.' | '_' | '0' => {}
                '1'..='9' => {
                    // to_digit cannot fail inside this arm
                    if let Some(value) = character.to_digit(10) {
                        #[expect(clippy::cast_possible_truncation)]
                        grid.set(pos, Digit::from_value(value as u8));
                    }
                }
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            }
            filled += 1;
        }
        if filled != 81 {
            return Err(ParseGridError::WrongCellCount { found: filled });
        }
        Ok(grid)
    }
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
