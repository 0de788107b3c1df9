//! Orthogonal step directions on a grid.

use crate::Position;

/// One of the four orthogonal directions a grid path may step in.
///
/// Searches that branch on direction iterate [`Direction::ALL`], so the
/// order of that array (up, down, left, right) is part of the observable
/// candidate order and must not change.
///
/// # Examples
///
/// ```
/// use retrace_core::{Direction, Position};
///
/// let from = Position::new(1, 1);
/// assert_eq!(Direction::Up.step(from), Some(Position::new(1, 0)));
/// assert_eq!(Direction::Left.step(Position::new(0, 1)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Decreasing y.
    Up,
    /// Increasing y.
    Down,
    /// Decreasing x.
    Left,
    /// Increasing x.
    Right,
}

impl Direction {
    /// All four directions in candidate order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the position one step in this direction, or `None` if the
    /// step would leave the `u8` coordinate range.
    ///
    /// Callers still have to check the far grid edges; only the zero edges
    /// are caught here because coordinates are unsigned.
    #[must_use]
    pub fn step(self, from: Position) -> Option<Position> {
        let (x, y) = (from.x(), from.y());
        let stepped = match self {
            Self::Up => Position::new(x, y.checked_sub(1)?),
            Self::Down => Position::new(x, y.checked_add(1)?),
            Self::Left => Position::new(x.checked_sub(1)?, y),
            Self::Right => Position::new(x.checked_add(1)?, y),
        };
        Some(stepped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_interior() {
        let from = Position::new(2, 2);
        assert_eq!(Direction::Up.step(from), Some(Position::new(2, 1)));
        assert_eq!(Direction::Down.step(from), Some(Position::new(2, 3)));
        assert_eq!(Direction::Left.step(from), Some(Position::new(1, 2)));
        assert_eq!(Direction::Right.step(from), Some(Position::new(3, 2)));
    }

    #[test]
    fn test_step_zero_edges() {
        assert_eq!(Direction::Up.step(Position::new(5, 0)), None);
        assert_eq!(Direction::Left.step(Position::new(0, 5)), None);
    }

    #[test]
    fn test_step_max_edges() {
        assert_eq!(Direction::Down.step(Position::new(0, u8::MAX)), None);
        assert_eq!(Direction::Right.step(Position::new(u8::MAX, 0)), None);
    }

    #[test]
    fn test_all_order_is_stable() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
            ]
        );
    }
}
