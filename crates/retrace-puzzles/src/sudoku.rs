//! Sudoku solving.

use retrace_core::{Digit, DigitSet, Position, SudokuGrid};
use retrace_engine::{CountOnly, FirstOnly, SearchSpace, search};
use tinyvec::ArrayVec;

use crate::SolveError;

/// Search space over the completions of a [`SudokuGrid`].
///
/// The space owns a working copy of the grid, so the caller's grid is
/// never touched by a search. The decision at level `r` is the digit for
/// the `r`-th empty cell (empty cells in row-major order, digits 1-9
/// ascending). Occupancy is one [`DigitSet`] per row, column, and box,
/// kept in lockstep with the working grid, so a legality check is three
/// mask lookups.
///
/// The first solution found under this candidate order is the
/// lexicographically smallest completion of the grid read row by row.
///
/// # Examples
///
/// ```
/// use retrace_core::SudokuGrid;
/// use retrace_engine::{CountOnly, search};
/// use retrace_puzzles::sudoku::Sudoku;
///
/// // The empty grid has more completions than anyone cares to count.
/// let mut space = Sudoku::new(&SudokuGrid::new())?;
/// let mut count = CountOnly::with_limit(3);
/// search(&mut space, &mut count);
/// assert_eq!(count.count(), 3);
/// # Ok::<(), retrace_puzzles::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sudoku {
    grid: SudokuGrid,
    empties: ArrayVec<[Position; 81]>,
    rows: [DigitSet; 9],
    columns: [DigitSet; 9],
    boxes: [DigitSet; 9],
}

impl Sudoku {
    /// Creates the search space for completing `grid`.
    ///
    /// Builds the occupancy index from the givens and records the empty
    /// cells in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Unsolvable`] if two givens already share a
    /// digit within a row, column, or box; such a grid has no completion
    /// and the search never starts.
    pub fn new(grid: &SudokuGrid) -> Result<Self, SolveError> {
        let mut space = Self {
            grid: *grid,
            empties: ArrayVec::new(),
            rows: [DigitSet::EMPTY; 9],
            columns: [DigitSet::EMPTY; 9],
            boxes: [DigitSet::EMPTY; 9],
        };
        for pos in SudokuGrid::positions() {
            match grid.get(pos) {
                Some(digit) => {
                    if !space.occupy(pos, digit) {
                        return Err(SolveError::Unsolvable);
                    }
                }
                None => space.empties.push(pos),
            }
        }
        Ok(space)
    }

    /// Marks `digit` present in the three houses of `pos`, returning
    /// `true` if it was fresh in all of them.
    fn occupy(&mut self, pos: Position, digit: Digit) -> bool {
        let row_fresh = self.rows[usize::from(pos.y())].insert(digit);
        let column_fresh = self.columns[usize::from(pos.x())].insert(digit);
        let box_fresh = self.boxes[SudokuGrid::box_index(pos)].insert(digit);
        row_fresh && column_fresh && box_fresh
    }

    fn vacate(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.y())].remove(digit);
        self.columns[usize::from(pos.x())].remove(digit);
        self.boxes[SudokuGrid::box_index(pos)].remove(digit);
    }
}

impl SearchSpace for Sudoku {
    type Solution = SudokuGrid;

    fn depth(&self) -> usize {
        self.empties.len()
    }

    fn candidate_count(&self, _level: usize) -> usize {
        Digit::ALL.len()
    }

    fn is_legal(&self, level: usize, choice: usize) -> bool {
        let pos = self.empties[level];
        let digit = Digit::ALL[choice];
        !self.rows[usize::from(pos.y())].contains(digit)
            && !self.columns[usize::from(pos.x())].contains(digit)
            && !self.boxes[SudokuGrid::box_index(pos)].contains(digit)
    }

    fn apply(&mut self, level: usize, choice: usize) {
        let pos = self.empties[level];
        let digit = Digit::ALL[choice];
        self.grid.set(pos, digit);
        self.occupy(pos, digit);
    }

    fn undo(&mut self, level: usize, choice: usize) {
        let pos = self.empties[level];
        let digit = Digit::ALL[choice];
        debug_assert_eq!(self.grid.get(pos), Some(digit));
        self.grid.clear(pos);
        self.vacate(pos, digit);
    }

    fn snapshot(&self) -> Self::Solution {
        self.grid
    }
}

/// Fills `grid` in place with its first completion.
///
/// "First" means the lexicographically smallest completion (row-major
/// cells, digits ascending), so a grid with a unique solution gets that
/// solution and an already-complete grid comes back unchanged. On any
/// failure the caller's grid is untouched; the search runs on a private
/// copy and is only written back on success.
///
/// # Errors
///
/// Returns [`SolveError::Unsolvable`] when no completion exists, whether
/// because two givens conflict outright or because the search space is
/// exhausted.
///
/// # Examples
///
/// ```
/// use retrace_core::SudokuGrid;
/// use retrace_puzzles::sudoku::solve_sudoku;
///
/// let mut grid: SudokuGrid = "
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
/// .parse()?;
/// solve_sudoku(&mut grid)?;
/// assert!(grid.to_string().starts_with("534678912"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn solve_sudoku(grid: &mut SudokuGrid) -> Result<(), SolveError> {
    let mut space = Sudoku::new(grid)?;
    let mut first = FirstOnly::new();
    search(&mut space, &mut first);
    match first.into_solution() {
        Some(solved) => {
            *grid = solved;
            Ok(())
        }
        None => Err(SolveError::Unsolvable),
    }
}

/// Counts the completions of `grid`, stopping once `limit` is reached.
///
/// Counting never materializes a completion, so probing a wide-open grid
/// with a small limit stays cheap. A grid whose givens conflict has zero
/// completions.
#[must_use]
pub fn sudoku_solution_count(grid: &SudokuGrid, limit: u64) -> u64 {
    let Ok(mut space) = Sudoku::new(grid) else {
        return 0;
    };
    let mut count = CountOnly::with_limit(limit);
    search(&mut space, &mut count);
    count.count()
}

/// Returns `true` if `grid` has exactly one completion.
///
/// This is the probe puzzle publishers run before shipping a grid: a
/// proper puzzle has one solution, not merely at least one. The search
/// stops as soon as a second completion turns up.
///
/// # Examples
///
/// ```
/// use retrace_core::SudokuGrid;
/// use retrace_puzzles::sudoku::sudoku_has_unique_solution;
///
/// // The empty grid completes in a great many ways.
/// assert!(!sudoku_has_unique_solution(&SudokuGrid::new()));
/// ```
#[must_use]
pub fn sudoku_has_unique_solution(grid: &SudokuGrid) -> bool {
    sudoku_solution_count(grid, 2) == 1
}
