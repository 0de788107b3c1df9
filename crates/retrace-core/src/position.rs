//! Grid position coordinate type.

use std::fmt::{self, Display};

/// A position on a rectangular grid, identified by `(x, y)` coordinates.
///
/// `x` is the column (0-based, left to right) and `y` is the row (0-based,
/// top to bottom). The derived ordering is row-major: positions compare by
/// `y` first, then `x`, which matches the order in which board-shaped
/// searches visit cells.
///
/// # Examples
///
/// ```
/// use retrace_core::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 5);
///
/// // Row-major ordering
/// assert!(Position::new(8, 0) < Position::new(0, 1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    // Field order makes the derived ordering row-major (y first).
    y: u8,
    x: u8,
}

impl Position {
    /// Creates a position from `(x, y)` coordinates.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { y, x }
    }

    /// Returns the x coordinate (column).
    #[inline]
    #[must_use]
    pub const fn x(&self) -> u8 {
        self.x
    }

    /// Returns the y coordinate (row).
    #[inline]
    #[must_use]
    pub const fn y(&self) -> u8 {
        self.y
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
