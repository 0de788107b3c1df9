//! Word search on a letter grid.

use retrace_core::{CellSet, Direction, LetterGrid, Position};
use retrace_engine::{CountOnly, FirstOnly, SearchSpace, search};

use crate::SolveError;

/// Search space over the paths spelling a word on a [`LetterGrid`].
///
/// A path starts on any cell and extends one orthogonal step at a time,
/// never revisiting a cell. The decision at level 0 is the starting cell
/// (all cells, row-major); the decision at every later level is the step
/// direction, in [`Direction::ALL`] order. A candidate is legal when the
/// target cell is on the grid, unvisited in the current path, and holds
/// the word's next character; the visited index is a per-cell bitmap, so
/// the check never scans the path.
///
/// The space finds every path when driven with
/// [`CollectAll`](retrace_engine::CollectAll); the entry points below stop
/// at the first.
///
/// # Examples
///
/// ```
/// use retrace_core::LetterGrid;
/// use retrace_engine::Solutions;
/// use retrace_puzzles::word_search::WordSearch;
///
/// let grid: LetterGrid = "AA".parse().unwrap();
/// let mut space = WordSearch::new(&grid, "AA");
/// // Left-to-right and right-to-left.
/// assert_eq!(Solutions::new(&mut space).count(), 2);
/// ```
#[derive(Debug)]
pub struct WordSearch<'a> {
    grid: &'a LetterGrid,
    word: Vec<char>,
    path: Vec<Position>,
    visited: CellSet,
}

impl<'a> WordSearch<'a> {
    /// Creates the space for finding `word` on `grid`.
    ///
    /// The space itself accepts any word; a word using characters the grid
    /// never contains simply has no paths. The stricter argument checking
    /// lives in [`word_search_exists`] and [`word_search_path`].
    #[must_use]
    pub fn new(grid: &'a LetterGrid, word: &str) -> Self {
        let word: Vec<char> = word.chars().collect();
        Self {
            grid,
            path: Vec::with_capacity(word.len()),
            visited: CellSet::new(grid.cell_count()),
            word,
        }
    }

    /// Cell a candidate refers to, or `None` when the step leaves the
    /// coordinate range.
    fn candidate_cell(&self, level: usize, choice: usize) -> Option<Position> {
        if level == 0 {
            (choice < self.grid.cell_count()).then(|| self.grid.position_at(choice))
        } else {
            Direction::ALL[choice].step(*self.path.last()?)
        }
    }
}

impl SearchSpace for WordSearch<'_> {
    type Solution = Vec<Position>;

    fn depth(&self) -> usize {
        self.word.len()
    }

    fn candidate_count(&self, level: usize) -> usize {
        if level == 0 {
            self.grid.cell_count()
        } else {
            Direction::ALL.len()
        }
    }

    fn is_legal(&self, level: usize, choice: usize) -> bool {
        // The far grid edges are caught by `get` returning `None`, so the
        // visited lookup only ever sees on-grid cells.
        self.candidate_cell(level, choice).is_some_and(|cell| {
            self.grid.get(cell) == Some(self.word[level])
                && !self.visited.contains(self.grid.index_of(cell))
        })
    }

    fn apply(&mut self, level: usize, choice: usize) {
        let Some(cell) = self.candidate_cell(level, choice) else {
            panic!("apply called with an off-grid candidate");
        };
        debug_assert_eq!(level, self.path.len());
        self.path.push(cell);
        self.visited.insert(self.grid.index_of(cell));
    }

    fn undo(&mut self, level: usize, choice: usize) {
        let popped = self.path.pop();
        debug_assert_eq!(popped, self.candidate_cell(level, choice));
        if let Some(cell) = popped {
            self.visited.remove(self.grid.index_of(cell));
        }
    }

    fn snapshot(&self) -> Self::Solution {
        self.path.clone()
    }
}

/// Returns `true` if `word` can be spelled by a non-revisiting orthogonal
/// path on `grid`.
///
/// The search stops at the first occurrence and never materializes the
/// path. The empty word is found on every grid. A word longer than the
/// grid's cell count is `false` without searching, and the grid model is
/// left untouched either way, so repeated calls always agree.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] if the word uses a character that
/// occurs nowhere on the grid.
///
/// # Examples
///
/// ```
/// use retrace_core::LetterGrid;
/// use retrace_puzzles::word_search::word_search_exists;
///
/// let grid: LetterGrid = "ABCE\nSFCS\nADEE".parse()?;
/// assert!(word_search_exists(&grid, "ABCCED")?);
/// assert!(word_search_exists(&grid, "SEE")?);
/// assert!(!word_search_exists(&grid, "ABCB")?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn word_search_exists(grid: &LetterGrid, word: &str) -> Result<bool, SolveError> {
    check_alphabet(grid, word)?;
    if word.chars().count() > grid.cell_count() {
        return Ok(false);
    }
    let mut space = WordSearch::new(grid, word);
    let mut probe = CountOnly::with_limit(1);
    search(&mut space, &mut probe);
    Ok(probe.count() > 0)
}

/// Returns the first path spelling `word` on `grid`, if any.
///
/// "First" follows candidate order: starting cells row-major, then steps
/// in up/down/left/right order, which makes the returned path
/// deterministic. The empty word yields an empty path.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] if the word uses a character that
/// occurs nowhere on the grid.
///
/// # Examples
///
/// ```
/// use retrace_core::{LetterGrid, Position};
/// use retrace_puzzles::word_search::word_search_path;
///
/// let grid: LetterGrid = "ABCE\nSFCS\nADEE".parse()?;
/// let path = word_search_path(&grid, "SEE")?;
/// assert_eq!(
///     path,
///     Some(vec![
///         Position::new(3, 1),
///         Position::new(3, 2),
///         Position::new(2, 2),
///     ]),
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn word_search_path(
    grid: &LetterGrid,
    word: &str,
) -> Result<Option<Vec<Position>>, SolveError> {
    check_alphabet(grid, word)?;
    if word.chars().count() > grid.cell_count() {
        return Ok(None);
    }
    let mut space = WordSearch::new(grid, word);
    let mut first = FirstOnly::new();
    search(&mut space, &mut first);
    Ok(first.into_solution())
}

fn check_alphabet(grid: &LetterGrid, word: &str) -> Result<(), SolveError> {
    if word.chars().all(|character| grid.contains_char(character)) {
        Ok(())
    } else {
        Err(SolveError::InvalidInput {
            reason: "word uses a character that never occurs in the grid",
        })
    }
}

#[cfg(test)]
mod tests {
    use retrace_engine::{CollectAll, Solutions};

    use super::*;

    fn board() -> LetterGrid {
        "ABCE\nSFCS\nADEE".parse().unwrap()
    }

    #[test]
    fn test_classic_board_words() {
        let grid = board();
        assert_eq!(word_search_exists(&grid, "ABCCED"), Ok(true));
        assert_eq!(word_search_exists(&grid, "SEE"), Ok(true));
        assert_eq!(word_search_exists(&grid, "ABCB"), Ok(false));
    }

    #[test]
    fn test_first_path_follows_candidate_order() {
        // The first 'S' (0, 1) dead-ends. From the second one the up
        // branch is tried first and dead-ends too, so the path goes down.
        let path = word_search_path(&board(), "SEE").unwrap().unwrap();
        assert_eq!(
            path,
            vec![
                Position::new(3, 1),
                Position::new(3, 2),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_path_spells_the_word() {
        let grid = board();
        let path = word_search_path(&grid, "ABCCED").unwrap().unwrap();
        let spelled: String = path.iter().filter_map(|&cell| grid.get(cell)).collect();
        assert_eq!(spelled, "ABCCED");
        for pair in path.windows(2) {
            let stepped = Direction::ALL
                .iter()
                .any(|direction| direction.step(pair[0]) == Some(pair[1]));
            assert!(stepped, "{} -> {} is not one orthogonal step", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_unknown_character_is_invalid_input() {
        assert_eq!(
            word_search_exists(&board(), "SEZ"),
            Err(SolveError::InvalidInput {
                reason: "word uses a character that never occurs in the grid",
            })
        );
    }

    #[test]
    fn test_word_longer_than_grid_is_false() {
        let grid = board();
        let word = "A".repeat(grid.cell_count() + 1);
        assert_eq!(word_search_exists(&grid, &word), Ok(false));
        assert_eq!(word_search_path(&grid, &word), Ok(None));
    }

    #[test]
    fn test_empty_word_is_found_with_empty_path() {
        let grid = board();
        assert_eq!(word_search_exists(&grid, ""), Ok(true));
        assert_eq!(word_search_path(&grid, ""), Ok(Some(Vec::new())));
    }

    #[test]
    fn test_visited_cells_block_reuse() {
        // The only 'B' sits between the two 'A's; spelling BAB would
        // have to visit it twice.
        let grid: LetterGrid = "ABA".parse().unwrap();
        assert_eq!(word_search_exists(&grid, "BAB"), Ok(false));
        assert_eq!(word_search_exists(&grid, "ABA"), Ok(true));
    }

    #[test]
    fn test_single_cell_grid() {
        let grid: LetterGrid = "Q".parse().unwrap();
        assert_eq!(word_search_exists(&grid, "Q"), Ok(true));
        assert_eq!(
            word_search_path(&grid, "Q"),
            Ok(Some(vec![Position::new(0, 0)]))
        );
        assert_eq!(word_search_exists(&grid, "QQ"), Ok(false));
    }

    #[test]
    fn test_repeated_calls_agree() {
        let grid = board();
        for _ in 0..3 {
            assert_eq!(word_search_exists(&grid, "ADEE"), Ok(true));
            assert_eq!(word_search_exists(&grid, "FSEE"), Ok(false));
        }
    }

    #[test]
    fn test_all_paths_of_a_word() {
        // Each cell of the 2x2 board starts two one-step paths.
        let grid: LetterGrid = "AA\nAA".parse().unwrap();
        let mut space = WordSearch::new(&grid, "AA");
        let mut all = CollectAll::new();
        search(&mut space, &mut all);
        assert_eq!(all.len(), 8);

        let mut space = WordSearch::new(&grid, "AA");
        let streamed: Vec<_> = Solutions::new(&mut space).collect();
        assert_eq!(streamed, all.into_solutions());
    }
}
