//! Rectangular character grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Position;

/// Error produced when building a [`LetterGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LetterGridError {
    /// The input contains no rows or an empty first row.
    #[display("grid has no cells")]
    Empty,
    /// A row's length differs from the first row's.
    #[display("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Zero-based row index.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of the offending row.
        found: usize,
    },
    /// A side exceeds the 255-cell coordinate range.
    #[display("grid side of {side} exceeds the supported 255")]
    TooLarge {
        /// The oversized dimension.
        side: usize,
    },
}

/// A rectangular grid of characters, as searched by word search.
///
/// Construction validates shape once (non-empty, rectangular, sides within
/// the `u8` coordinate range), so every later position computed from a
/// [`Direction`](crate::Direction) step only needs a bounds check.
///
/// # Examples
///
/// ```
/// use retrace_core::{LetterGrid, Position};
///
/// let grid: LetterGrid = "ABCE\nSFCS\nADEE".parse().unwrap();
/// assert_eq!(grid.width(), 4);
/// assert_eq!(grid.height(), 3);
/// assert_eq!(grid.get(Position::new(2, 1)), Some('C'));
/// assert_eq!(grid.get(Position::new(4, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: Vec<char>,
    width: u8,
    height: u8,
}

impl LetterGrid {
    /// Builds a grid from rows of characters.
    ///
    /// # Errors
    ///
    /// Returns [`LetterGridError`] if the rows are empty, ragged, or
    /// larger than 255 cells per side.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, LetterGridError> {
        let first = rows.first().ok_or(LetterGridError::Empty)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(LetterGridError::Empty);
        }
        if width > usize::from(u8::MAX) {
            return Err(LetterGridError::TooLarge { side: width });
        }
        if rows.len() > usize::from(u8::MAX) {
            return Err(LetterGridError::TooLarge { side: rows.len() });
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, text) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(text.as_ref().chars());
            let found = cells.len() - before;
            if found != width {
                return Err(LetterGridError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }
        }

        #[expect(clippy::cast_possible_truncation)]
        let (width, height) = (width as u8, rows.len() as u8);
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Returns the number of columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Returns the total cell count.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns the character at `pos`, or `None` if `pos` is off the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.x() >= self.width || pos.y() >= self.height {
            return None;
        }
        Some(self.cells[self.index_of(pos)])
    }

    /// Returns the row-major cell index of an on-grid position.
    #[inline]
    #[must_use]
    pub fn index_of(&self, pos: Position) -> usize {
        usize::from(pos.y()) * usize::from(self.width) + usize::from(pos.x())
    }

    /// Returns the position of a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.cell_count()`.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Position {
        assert!(index < self.cell_count(), "cell index out of range: {index}");
        #[expect(clippy::cast_possible_truncation)]
        let (x, y) = (
            (index % usize::from(self.width)) as u8,
            (index / usize::from(self.width)) as u8,
        );
        Position::new(x, y)
    }

    /// Returns `true` if `character` occurs anywhere in the grid.
    #[must_use]
    pub fn contains_char(&self, character: char) -> bool {
        self.cells.contains(&character)
    }
}

impl FromStr for LetterGrid {
    type Err = LetterGridError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..usize::from(self.height) {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..usize::from(self.width) {
                write!(f, "{}", self.cells[y * usize::from(self.width) + x])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let grid = LetterGrid::from_rows(&["AB", "CD", "EF"]).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cell_count(), 6);
        assert_eq!(grid.get(Position::new(1, 2)), Some('F'));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            LetterGrid::from_rows::<&str>(&[]),
            Err(LetterGridError::Empty)
        );
        assert_eq!(LetterGrid::from_rows(&[""]), Err(LetterGridError::Empty));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        assert_eq!(
            LetterGrid::from_rows(&["ABC", "AB"]),
            Err(LetterGridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_rejects_oversized() {
        let wide = "A".repeat(256);
        assert_eq!(
            LetterGrid::from_rows(&[wide.as_str()]),
            Err(LetterGridError::TooLarge { side: 256 })
        );
    }

    #[test]
    fn test_get_off_grid() {
        let grid = LetterGrid::from_rows(&["AB"]).unwrap();
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(0, 1)), None);
    }

    #[test]
    fn test_index_position_round_trip() {
        let grid = LetterGrid::from_rows(&["ABC", "DEF"]).unwrap();
        for index in 0..grid.cell_count() {
            assert_eq!(grid.index_of(grid.position_at(index)), index);
        }
        assert_eq!(grid.position_at(4), Position::new(1, 1));
    }

    #[test]
    fn test_contains_char() {
        let grid = LetterGrid::from_rows(&["ABC"]).unwrap();
        assert!(grid.contains_char('B'));
        assert!(!grid.contains_char('Z'));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let grid: LetterGrid = "\n  AB  \n\n  CD  \n".parse().unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
    }
}
