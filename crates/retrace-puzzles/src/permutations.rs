//! Permutation enumeration.

use retrace_engine::{CollectAll, SearchSpace, search};

/// Search space over the orderings of an input slice.
///
/// The decision at level `r` is which item index goes in output position
/// `r`; the occupancy index is a used-flag per item. Candidates ascend by
/// index, so output order is lexicographic in input positions.
///
/// With equal values in adjacent input positions, a candidate whose equal
/// twin at the previous index is still unused is skipped: that twin was
/// the sibling tried first, and taking this one too would rebuild the same
/// ordering.
#[derive(Debug)]
pub struct Permutations<'a, T> {
    items: &'a [T],
    picked: Vec<usize>,
    used: Vec<bool>,
}

impl<'a, T> Permutations<'a, T> {
    /// Creates the space over `items`.
    #[must_use]
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            picked: Vec::with_capacity(items.len()),
            used: vec![false; items.len()],
        }
    }
}

impl<T: Clone + PartialEq> SearchSpace for Permutations<'_, T> {
    type Solution = Vec<T>;

    fn depth(&self) -> usize {
        self.items.len()
    }

    fn candidate_count(&self, _level: usize) -> usize {
        self.items.len()
    }

    fn is_legal(&self, _level: usize, choice: usize) -> bool {
        !self.used[choice]
            && !(choice > 0
                && self.items[choice] == self.items[choice - 1]
                && !self.used[choice - 1])
    }

    fn apply(&mut self, level: usize, choice: usize) {
        debug_assert_eq!(level, self.picked.len());
        self.picked.push(choice);
        self.used[choice] = true;
    }

    fn undo(&mut self, _level: usize, choice: usize) {
        let popped = self.picked.pop();
        debug_assert_eq!(popped, Some(choice));
        self.used[choice] = false;
    }

    fn snapshot(&self) -> Self::Solution {
        self.picked
            .iter()
            .map(|&index| self.items[index].clone())
            .collect()
    }
}

/// Returns every ordering of `items`.
///
/// For `k` distinct items the result has exactly `k!` entries, in
/// lexicographic order of input positions. Equal values in adjacent input
/// positions produce each distinct ordering once (sort the input first to
/// get full multiset semantics).
///
/// # Examples
///
/// ```
/// use retrace_puzzles::permutations::enumerate_permutations;
///
/// let orderings = enumerate_permutations(&['a', 'b', 'c']);
/// assert_eq!(orderings.len(), 6);
/// assert_eq!(orderings[0], vec!['a', 'b', 'c']);
/// assert_eq!(orderings[5], vec!['c', 'b', 'a']);
///
/// assert_eq!(enumerate_permutations(&[1, 1, 2]).len(), 3);
/// ```
#[must_use]
pub fn enumerate_permutations<T: Clone + PartialEq>(items: &[T]) -> Vec<Vec<T>> {
    let mut space = Permutations::new(items);
    let mut all = CollectAll::new();
    search(&mut space, &mut all);
    all.into_solutions()
}
