//! Subset enumeration.

use retrace_engine::{CollectAll, SearchSpace, search};

/// Search space over the subsets of an input slice.
///
/// The decision at each level is which item index to take next, restricted
/// to indices after the previously taken one, so every subset is visited
/// exactly once and keeps the input's relative order. Every node is a goal
/// node: the empty subset is emitted at the root and each further choice
/// emits the grown subset.
///
/// When the input holds equal values in adjacent positions, a candidate
/// equal to the immediately preceding sibling candidate is skipped, which
/// suppresses duplicate subsets at the model level (no post-hoc
/// deduplication happens anywhere).
#[derive(Debug)]
pub struct Subsets<'a, T> {
    items: &'a [T],
    picked: Vec<usize>,
}

impl<'a, T> Subsets<'a, T> {
    /// Creates the space over `items`.
    #[must_use]
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            picked: Vec::new(),
        }
    }

    /// First item index the current level may take.
    fn start(&self) -> usize {
        self.picked.last().map_or(0, |&index| index + 1)
    }
}

impl<T: Clone + PartialEq> SearchSpace for Subsets<'_, T> {
    type Solution = Vec<T>;

    fn depth(&self) -> usize {
        self.items.len()
    }

    fn candidate_count(&self, _level: usize) -> usize {
        self.items.len()
    }

    fn is_legal(&self, _level: usize, choice: usize) -> bool {
        let start = self.start();
        choice >= start
            && !(choice > start && self.items[choice] == self.items[choice - 1])
    }

    fn apply(&mut self, level: usize, choice: usize) {
        debug_assert_eq!(level, self.picked.len());
        self.picked.push(choice);
    }

    fn undo(&mut self, _level: usize, choice: usize) {
        let popped = self.picked.pop();
        debug_assert_eq!(popped, Some(choice));
    }

    fn is_goal(&self, _level: usize) -> bool {
        true
    }

    fn snapshot(&self) -> Self::Solution {
        self.picked
            .iter()
            .map(|&index| self.items[index].clone())
            .collect()
    }
}

/// Returns every subset of `items`, the power set.
///
/// Subsets preserve the input's relative order and arrive in depth-first
/// order: the empty subset first, then all subsets starting with the first
/// item, and so on. For an input of `k` distinct items the result has
/// exactly `2^k` entries.
///
/// Equal values in adjacent input positions produce each distinct subset
/// once (sort the input first to get full multiset semantics).
///
/// # Examples
///
/// ```
/// use retrace_puzzles::subsets::enumerate_subsets;
///
/// let subsets = enumerate_subsets(&[1, 2, 3]);
/// assert_eq!(subsets.len(), 8);
/// assert_eq!(subsets[0], Vec::<i32>::new());
/// assert!(subsets.contains(&vec![1, 3]));
///
/// assert_eq!(enumerate_subsets(&[1, 2, 2]).len(), 6);
/// ```
#[must_use]
pub fn enumerate_subsets<T: Clone + PartialEq>(items: &[T]) -> Vec<Vec<T>> {
    let mut space = Subsets::new(items);
    let mut all = CollectAll::new();
    search(&mut space, &mut all);
    all.into_solutions()
}
