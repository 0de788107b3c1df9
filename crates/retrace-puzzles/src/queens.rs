//! N-queens placement.

use retrace_core::BitSet;
use retrace_engine::{CollectAll, CountOnly, SearchSpace, search};
use tinyvec::ArrayVec;

use crate::SolveError;

/// Largest supported board side.
///
/// Column occupancy lives in a `u32` mask and the two diagonal families in
/// `u64` masks (a board of side `n` has `2n - 1` diagonals per family), so
/// 32 is where the O(1) occupancy index runs out of bits.
pub const MAX_BOARD_SIZE: usize = 32;

/// Search space for placing `n` non-attacking queens on an `n`x`n` board.
///
/// One queen per row, placed top to bottom; the decision at level `r` is
/// the column of the queen in row `r`, tried in ascending column order. A
/// candidate column is legal when its column, its down diagonal
/// (`row + column`), and its up diagonal (`row - column + n - 1`) are all
/// unoccupied, which three bitmask lookups answer without scanning placed
/// queens.
///
/// Most callers want [`solve_n_queens`] or [`count_n_queens`]; the space
/// itself is public so the engine's drivers (and sub-board splits via
/// [`with_first_queen`](Self::with_first_queen)) can be used directly.
///
/// # Examples
///
/// ```
/// use retrace_engine::Solutions;
/// use retrace_puzzles::queens::Queens;
///
/// let mut space = Queens::new(6)?;
/// let first = Solutions::new(&mut space).next();
/// assert_eq!(first, Some(vec![1, 3, 5, 0, 2, 4]));
/// # Ok::<(), retrace_puzzles::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Queens {
    size: usize,
    /// Rows filled before the search starts; excluded from the depth.
    seeded: usize,
    columns: ArrayVec<[u8; MAX_BOARD_SIZE]>,
    occupied_columns: BitSet<u32>,
    down_diagonals: BitSet<u64>,
    up_diagonals: BitSet<u64>,
}

impl Queens {
    /// Creates the search space for an `n`x`n` board.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidInput`] if `size` exceeds
    /// [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, SolveError> {
        if size > MAX_BOARD_SIZE {
            return Err(SolveError::InvalidInput {
                reason: "board side exceeds the 32 supported by the occupancy masks",
            });
        }
        Ok(Self {
            size,
            seeded: 0,
            columns: ArrayVec::new(),
            occupied_columns: BitSet::new(),
            down_diagonals: BitSet::new(),
            up_diagonals: BitSet::new(),
        })
    }

    /// Creates the sub-board space whose row 0 queen is fixed at `column`.
    ///
    /// The remaining search covers rows `1..size`, which is how a caller
    /// splits one board across independent workers: one seeded space per
    /// first-row column, searched separately, solutions concatenated.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidInput`] if `size` exceeds
    /// [`MAX_BOARD_SIZE`], is zero, or `column` is off the board.
    pub fn with_first_queen(size: usize, column: usize) -> Result<Self, SolveError> {
        let mut space = Self::new(size)?;
        if column >= size {
            return Err(SolveError::InvalidInput {
                reason: "first-queen column is off the board",
            });
        }
        space.place(0, column);
        space.seeded = 1;
        Ok(space)
    }

    /// Board side this space was built for.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    fn row(&self, level: usize) -> usize {
        level + self.seeded
    }

    fn up_diagonal(&self, row: usize, column: usize) -> u32 {
        mask_index(row + self.size - 1 - column)
    }

    fn place(&mut self, row: usize, column: usize) {
        self.columns.push(column_u8(column));
        self.occupied_columns.insert(mask_index(column));
        self.down_diagonals.insert(down_diagonal(row, column));
        self.up_diagonals.insert(self.up_diagonal(row, column));
    }

    fn unplace(&mut self, row: usize, column: usize) {
        let popped = self.columns.pop();
        debug_assert_eq!(popped, Some(column_u8(column)));
        self.occupied_columns.remove(mask_index(column));
        self.down_diagonals.remove(down_diagonal(row, column));
        self.up_diagonals.remove(self.up_diagonal(row, column));
    }
}

impl SearchSpace for Queens {
    type Solution = Vec<usize>;

    fn depth(&self) -> usize {
        self.size - self.seeded
    }

    fn candidate_count(&self, _level: usize) -> usize {
        self.size
    }

    fn is_legal(&self, level: usize, choice: usize) -> bool {
        let row = self.row(level);
        !self.occupied_columns.contains(mask_index(choice))
            && !self.down_diagonals.contains(down_diagonal(row, choice))
            && !self.up_diagonals.contains(self.up_diagonal(row, choice))
    }

    fn apply(&mut self, level: usize, choice: usize) {
        self.place(self.row(level), choice);
    }

    fn undo(&mut self, level: usize, choice: usize) {
        self.unplace(self.row(level), choice);
    }

    fn snapshot(&self) -> Self::Solution {
        self.columns.iter().map(|&column| usize::from(column)).collect()
    }
}

fn down_diagonal(row: usize, column: usize) -> u32 {
    mask_index(row + column)
}

#[expect(clippy::cast_possible_truncation)]
fn mask_index(value: usize) -> u32 {
    value as u32
}

#[expect(clippy::cast_possible_truncation)]
fn column_u8(column: usize) -> u8 {
    column as u8
}

/// Returns every way to place `n` non-attacking queens on an `n`x`n`
/// board.
///
/// Each solution lists one column index per row, top row first. Solutions
/// come out in the deterministic order induced by ascending-column
/// candidate order. The 0x0 board has exactly one solution, the empty
/// placement.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] if `n` exceeds [`MAX_BOARD_SIZE`].
///
/// # Examples
///
/// ```
/// use retrace_puzzles::queens::solve_n_queens;
///
/// let solutions = solve_n_queens(4)?;
/// assert_eq!(solutions, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
///
/// assert!(solve_n_queens(3)?.is_empty());
/// # Ok::<(), retrace_puzzles::SolveError>(())
/// ```
pub fn solve_n_queens(n: usize) -> Result<Vec<Vec<usize>>, SolveError> {
    let mut space = Queens::new(n)?;
    let mut all = CollectAll::new();
    search(&mut space, &mut all);
    Ok(all.into_solutions())
}

/// Counts the `n`-queens solutions without materializing any of them.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] if `n` exceeds [`MAX_BOARD_SIZE`].
///
/// # Examples
///
/// ```
/// use retrace_puzzles::queens::count_n_queens;
///
/// assert_eq!(count_n_queens(8)?, 92);
/// # Ok::<(), retrace_puzzles::SolveError>(())
/// ```
pub fn count_n_queens(n: usize) -> Result<u64, SolveError> {
    let mut space = Queens::new(n)?;
    let mut count = CountOnly::new();
    search(&mut space, &mut count);
    Ok(count.count())
}

/// Renders a solution as board rows of `Q` and `.`.
///
/// # Panics
///
/// Panics if any column index is outside the board implied by the
/// solution's length.
///
/// # Examples
///
/// ```
/// use retrace_puzzles::queens::queens_board_lines;
///
/// assert_eq!(
///     queens_board_lines(&[1, 3, 0, 2]),
///     vec![".Q..", "...Q", "Q...", "..Q."],
/// );
/// ```
#[must_use]
pub fn queens_board_lines(solution: &[usize]) -> Vec<String> {
    let n = solution.len();
    solution
        .iter()
        .map(|&column| {
            assert!(column < n, "column {column} outside the {n}x{n} board");
            let mut line = ".".repeat(n);
            line.replace_range(column..=column, "Q");
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use retrace_engine::Solutions;

    use super::*;

    #[test]
    fn test_known_solution_counts() {
        for (n, expected) in [(0, 1), (1, 1), (2, 0), (3, 0), (4, 2), (8, 92)] {
            assert_eq!(count_n_queens(n).unwrap(), expected, "n = {n}");
            assert_eq!(
                solve_n_queens(n).unwrap().len() as u64,
                expected,
                "n = {n}"
            );
        }
    }

    #[test]
    fn test_four_queens_exact_solutions_in_order() {
        assert_eq!(
            solve_n_queens(4).unwrap(),
            vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]
        );
    }

    #[test]
    fn test_zero_board_has_the_empty_placement() {
        assert_eq!(solve_n_queens(0).unwrap(), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_oversized_board_is_rejected_before_search() {
        assert_eq!(
            solve_n_queens(MAX_BOARD_SIZE + 1),
            Err(SolveError::InvalidInput {
                reason: "board side exceeds the 32 supported by the occupancy masks",
            })
        );
        // The limit itself is constructible.
        assert!(Queens::new(MAX_BOARD_SIZE).is_ok());
    }

    #[test]
    fn test_solutions_are_non_attacking() {
        for solution in solve_n_queens(6).unwrap() {
            assert_eq!(solution.len(), 6);
            for (row_a, &col_a) in solution.iter().enumerate() {
                for (row_b, &col_b) in solution.iter().enumerate().skip(row_a + 1) {
                    assert_ne!(col_a, col_b, "column clash in {solution:?}");
                    assert_ne!(
                        row_b - row_a,
                        col_a.abs_diff(col_b),
                        "diagonal clash in {solution:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_streamed_solutions_match_collected() {
        let collected = solve_n_queens(6).unwrap();
        let mut space = Queens::new(6).unwrap();
        let streamed: Vec<_> = Solutions::new(&mut space).collect();
        assert_eq!(streamed, collected);
    }

    #[test]
    fn test_first_queen_split_covers_the_board() {
        let whole = count_n_queens(6).unwrap();
        let mut split = 0;
        for column in 0..6 {
            let mut space = Queens::with_first_queen(6, column).unwrap();
            let mut count = CountOnly::new();
            search(&mut space, &mut count);
            split += count.count();
        }
        assert_eq!(split, whole);
    }

    #[test]
    fn test_first_queen_column_is_validated() {
        assert!(matches!(
            Queens::with_first_queen(4, 4),
            Err(SolveError::InvalidInput { .. })
        ));
        assert!(matches!(
            Queens::with_first_queen(0, 0),
            Err(SolveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_seeded_solutions_carry_the_fixed_queen() {
        let mut space = Queens::with_first_queen(5, 2).unwrap();
        let mut all = CollectAll::new();
        search(&mut space, &mut all);
        for solution in all.solutions() {
            assert_eq!(solution.len(), 5);
            assert_eq!(solution[0], 2);
        }
    }

    #[test]
    fn test_board_lines() {
        assert_eq!(
            queens_board_lines(&[2, 0, 3, 1]),
            vec!["..Q.", "Q...", "...Q", ".Q.."]
        );
        assert_eq!(queens_board_lines(&[]), Vec::<String>::new());
    }
}
