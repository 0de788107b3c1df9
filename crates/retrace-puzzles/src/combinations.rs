//! Fixed-size selection enumeration.

use retrace_engine::{CollectAll, SearchSpace, search};

/// Search space over the size-`take` selections from an input slice.
///
/// Works like [`Subsets`](crate::subsets::Subsets) (ascending item
/// indices, duplicate-sibling skip), but only full-length selections are
/// goals, and a branch is cut as soon as the items remaining after the
/// candidate cannot fill the open slots.
#[derive(Debug)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    take: usize,
    picked: Vec<usize>,
}

impl<'a, T> Combinations<'a, T> {
    /// Creates the space selecting `take` of `items`.
    #[must_use]
    pub fn new(items: &'a [T], take: usize) -> Self {
        Self {
            items,
            take,
            picked: Vec::with_capacity(take),
        }
    }

    fn start(&self) -> usize {
        self.picked.last().map_or(0, |&index| index + 1)
    }
}

impl<T: Clone + PartialEq> SearchSpace for Combinations<'_, T> {
    type Solution = Vec<T>;

    fn depth(&self) -> usize {
        self.take
    }

    fn candidate_count(&self, _level: usize) -> usize {
        self.items.len()
    }

    fn is_legal(&self, _level: usize, choice: usize) -> bool {
        let start = self.start();
        choice >= start
            && !(choice > start && self.items[choice] == self.items[choice - 1])
            && self.items.len() - choice >= self.take - self.picked.len()
    }

    fn apply(&mut self, level: usize, choice: usize) {
        debug_assert_eq!(level, self.picked.len());
        self.picked.push(choice);
    }

    fn undo(&mut self, _level: usize, choice: usize) {
        let popped = self.picked.pop();
        debug_assert_eq!(popped, Some(choice));
    }

    fn snapshot(&self) -> Self::Solution {
        self.picked
            .iter()
            .map(|&index| self.items[index].clone())
            .collect()
    }
}

/// Returns every size-`take` selection from `items`.
///
/// Selections preserve the input's relative order and arrive in
/// depth-first order. `take == 0` yields exactly the empty selection;
/// `take` beyond the input length yields nothing. Equal values in
/// adjacent input positions produce each distinct selection once.
///
/// # Examples
///
/// ```
/// use retrace_puzzles::combinations::enumerate_combinations;
///
/// assert_eq!(
///     enumerate_combinations(&[1, 2, 3, 4], 2),
///     vec![
///         vec![1, 2],
///         vec![1, 3],
///         vec![1, 4],
///         vec![2, 3],
///         vec![2, 4],
///         vec![3, 4],
///     ],
/// );
/// ```
#[must_use]
pub fn enumerate_combinations<T: Clone + PartialEq>(items: &[T], take: usize) -> Vec<Vec<T>> {
    let mut space = Combinations::new(items, take);
    let mut all = CollectAll::new();
    search(&mut space, &mut all);
    all.into_solutions()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn binomial(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn test_take_zero_yields_empty_selection() {
        assert_eq!(enumerate_combinations(&[1, 2, 3], 0), vec![Vec::<i32>::new()]);
    }

    #[test]
    fn test_take_beyond_input_yields_nothing() {
        assert!(enumerate_combinations(&[1, 2], 3).is_empty());
        assert!(enumerate_combinations::<i32>(&[], 1).is_empty());
    }

    #[test]
    fn test_take_all_is_the_input_itself() {
        assert_eq!(enumerate_combinations(&[1, 2, 3], 3), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_adjacent_duplicates_are_suppressed() {
        assert_eq!(
            enumerate_combinations(&[1, 2, 2], 2),
            vec![vec![1, 2], vec![2, 2]]
        );
    }

    proptest! {
        /// Distinct inputs obey the binomial coefficient.
        #[test]
        fn prop_binomial_count(n in 0usize..=9, k in 0usize..=9) {
            let items: Vec<usize> = (0..n).collect();
            let selections = enumerate_combinations(&items, k);
            prop_assert_eq!(selections.len(), binomial(n, k));
            for selection in &selections {
                prop_assert!(selection.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }
}
