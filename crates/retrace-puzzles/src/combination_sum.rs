//! Unlimited-reuse sum composition.

use retrace_engine::{CollectAll, SearchSpace, search};

use crate::SolveError;

/// Search space over the multisets of candidate values summing to a
/// target.
///
/// Candidates are sorted and deduplicated up front; each level picks a
/// candidate index no smaller than the previous pick, so every multiset
/// is visited exactly once, in non-decreasing value order. A branch is
/// cut as soon as a value would overshoot the remaining budget, and a
/// node is a goal when the running sum hits the target exactly.
///
/// The level cap is `target / smallest`, the length of the longest
/// possible chain; with zero-valued candidates rejected the cap is
/// finite.
#[derive(Debug)]
pub struct CombinationSum {
    values: Vec<u32>,
    target: u32,
    picked: Vec<usize>,
    sum: u32,
}

impl CombinationSum {
    /// Creates the space composing `target` from `candidates`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidInput`] if any candidate is zero.
    pub fn new(candidates: &[u32], target: u32) -> Result<Self, SolveError> {
        if candidates.contains(&0) {
            return Err(SolveError::InvalidInput {
                reason: "zero-valued candidates can repeat forever without changing the sum",
            });
        }
        let mut values = candidates.to_vec();
        values.sort_unstable();
        values.dedup();
        Ok(Self {
            values,
            target,
            picked: Vec::new(),
            sum: 0,
        })
    }

    fn start(&self) -> usize {
        self.picked.last().map_or(0, |&index| index)
    }
}

impl SearchSpace for CombinationSum {
    type Solution = Vec<u32>;

    fn depth(&self) -> usize {
        self.values
            .first()
            .map_or(0, |&smallest| (self.target / smallest) as usize)
    }

    fn candidate_count(&self, _level: usize) -> usize {
        self.values.len()
    }

    fn is_legal(&self, _level: usize, choice: usize) -> bool {
        // sum never exceeds target, so the subtraction cannot wrap.
        choice >= self.start() && self.values[choice] <= self.target - self.sum
    }

    fn apply(&mut self, level: usize, choice: usize) {
        debug_assert_eq!(level, self.picked.len());
        self.sum += self.values[choice];
        self.picked.push(choice);
    }

    fn undo(&mut self, _level: usize, choice: usize) {
        let popped = self.picked.pop();
        debug_assert_eq!(popped, Some(choice));
        self.sum -= self.values[choice];
    }

    fn is_goal(&self, _level: usize) -> bool {
        self.sum == self.target
    }

    fn snapshot(&self) -> Self::Solution {
        self.picked.iter().map(|&index| self.values[index]).collect()
    }
}

/// Returns every multiset of `candidates` values that sums to `target`,
/// reusing values as often as needed.
///
/// Each selection comes back in non-decreasing value order, and each
/// distinct multiset appears once even when `candidates` repeats a
/// value. A target of zero yields exactly the empty selection; an
/// unreachable target yields nothing.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] if any candidate is zero, since
/// a zero could repeat without bound.
///
/// # Examples
///
/// ```
/// use retrace_puzzles::combination_sum::combination_sum;
///
/// assert_eq!(combination_sum(&[2, 3, 6, 7], 7)?, vec![vec![2, 2, 3], vec![7]]);
/// # Ok::<(), retrace_puzzles::SolveError>(())
/// ```
pub fn combination_sum(candidates: &[u32], target: u32) -> Result<Vec<Vec<u32>>, SolveError> {
    let mut space = CombinationSum::new(candidates, target)?;
    let mut all = CollectAll::new();
    search(&mut space, &mut all);
    Ok(all.into_solutions())
}
