//! Ready-made search spaces for tests, examples, and benchmarks.

use crate::space::SearchSpace;

/// A search space over fixed-length sequences of small integers.
///
/// Enumerates every sequence of `length` values drawn from `0..radix`, in
/// lexicographic order. Two opt-in twists exercise the driver paths real
/// problems use:
///
/// - [`distinct_adjacent`](Self::distinct_adjacent) forbids equal
///   neighboring values, giving the legality check something to prune
///   (`radix * (radix - 1)^(length - 1)` solutions).
/// - [`emit_prefixes`](Self::emit_prefixes) makes every node a goal, the
///   shape subset-style enumerations have.
///
/// The solution counts are easy to compute by hand, which is the point:
/// driver behavior can be asserted against closed-form numbers.
///
/// # Examples
///
/// ```
/// use retrace_engine::{CollectAll, search, testing::Sequences};
///
/// let mut all = CollectAll::new();
/// search(&mut Sequences::new(2, 2), &mut all);
/// assert_eq!(
///     all.into_solutions(),
///     vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Sequences {
    radix: usize,
    length: usize,
    distinct_adjacent: bool,
    emit_prefixes: bool,
    path: Vec<usize>,
}

impl Sequences {
    /// Creates a space over all `radix^length` sequences.
    #[must_use]
    pub fn new(radix: usize, length: usize) -> Self {
        Self {
            radix,
            length,
            distinct_adjacent: false,
            emit_prefixes: false,
            path: Vec::with_capacity(length),
        }
    }

    /// Forbids two equal values in a row.
    #[must_use]
    pub fn distinct_adjacent(mut self) -> Self {
        self.distinct_adjacent = true;
        self
    }

    /// Treats every prefix (including the empty one) as a solution.
    #[must_use]
    pub fn emit_prefixes(mut self) -> Self {
        self.emit_prefixes = true;
        self
    }

    /// Returns the currently applied choices.
    ///
    /// Outside a running search this is empty; tests use it to check that
    /// drivers hand the space back restored.
    #[must_use]
    pub fn path(&self) -> &[usize] {
        &self.path
    }
}

impl SearchSpace for Sequences {
    type Solution = Vec<usize>;

    fn depth(&self) -> usize {
        self.length
    }

    fn candidate_count(&self, _level: usize) -> usize {
        self.radix
    }

    fn is_legal(&self, _level: usize, choice: usize) -> bool {
        !self.distinct_adjacent || self.path.last() != Some(&choice)
    }

    fn apply(&mut self, level: usize, choice: usize) {
        debug_assert_eq!(level, self.path.len());
        self.path.push(choice);
    }

    fn undo(&mut self, level: usize, choice: usize) {
        let popped = self.path.pop();
        debug_assert_eq!(popped, Some(choice));
        debug_assert_eq!(level, self.path.len());
    }

    fn is_goal(&self, level: usize) -> bool {
        self.emit_prefixes || level == self.length
    }

    fn snapshot(&self) -> Self::Solution {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collect::CountOnly, driver::search};

    #[test]
    fn test_plain_count() {
        let mut count = CountOnly::new();
        search(&mut Sequences::new(3, 4), &mut count);
        assert_eq!(count.count(), 81);
    }

    #[test]
    fn test_distinct_adjacent_count() {
        let mut count = CountOnly::new();
        search(&mut Sequences::new(4, 3).distinct_adjacent(), &mut count);
        assert_eq!(count.count(), 4 * 3 * 3);
    }

    #[test]
    fn test_prefix_count() {
        let mut count = CountOnly::new();
        search(&mut Sequences::new(3, 2).emit_prefixes(), &mut count);
        assert_eq!(count.count(), 1 + 3 + 9);
    }
}
