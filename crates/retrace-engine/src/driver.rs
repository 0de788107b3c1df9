//! Recursive depth-first search driver.

use crate::{
    cancel::{Cancel, Never},
    collect::Collector,
    space::SearchSpace,
};

/// Why a search returned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant,
)]
pub enum Termination {
    /// Every reachable node was visited.
    #[display("exhausted")]
    Exhausted,
    /// The collector asked to stop.
    #[display("satisfied")]
    Satisfied,
    /// The cancellation source fired.
    #[display("cancelled")]
    Cancelled,
}

/// Counters describing how much work a search did.
///
/// # Examples
///
/// ```
/// use retrace_engine::{CountOnly, SearchStats, search_with_stats, testing::Sequences};
///
/// let mut stats = SearchStats::default();
/// search_with_stats(
///     &mut Sequences::new(2, 2).distinct_adjacent(),
///     &mut CountOnly::new(),
///     &mut stats,
/// );
/// assert_eq!(stats.solutions(), 2);
/// assert_eq!(stats.pruned(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes: u64,
    applied: u64,
    pruned: u64,
    solutions: u64,
}

impl SearchStats {
    /// Returns the number of nodes entered, including the root.
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Returns how many candidates were applied (and later undone).
    #[must_use]
    pub const fn applied(&self) -> u64 {
        self.applied
    }

    /// Returns how many candidates the legality check rejected.
    #[must_use]
    pub const fn pruned(&self) -> u64 {
        self.pruned
    }

    /// Returns how many goal nodes were reached.
    #[must_use]
    pub const fn solutions(&self) -> u64 {
        self.solutions
    }

    /// Adds another run's counters into this one.
    ///
    /// Useful when a caller splits one problem across several independent
    /// searches and wants aggregate numbers.
    pub fn merge(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.applied += other.applied;
        self.pruned += other.pruned;
        self.solutions += other.solutions;
    }
}

/// Runs a depth-first search over `space`, feeding solutions to
/// `collector`.
///
/// Candidates are tried in ascending index order at every level, so the
/// traversal (and therefore the first solution, the full solution order,
/// and any count) is deterministic for a deterministic space.
///
/// The space is handed back restored: every applied choice is undone
/// before this returns, whatever the termination cause. Results live in
/// the collector, which copied them out at the moment of discovery.
///
/// # Examples
///
/// ```
/// use retrace_engine::{CollectAll, Termination, search, testing::Sequences};
///
/// let mut all = CollectAll::new();
/// let termination = search(&mut Sequences::new(2, 2), &mut all);
/// assert_eq!(termination, Termination::Exhausted);
/// assert_eq!(
///     all.into_solutions(),
///     vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]],
/// );
/// ```
pub fn search<S, C>(space: &mut S, collector: &mut C) -> Termination
where
    S: SearchSpace,
    C: Collector<S::Solution>,
{
    let mut stats = SearchStats::default();
    search_with_stats(space, collector, &mut stats)
}

/// Like [`search`], recording work counters into `stats`.
///
/// Counters accumulate, so one `stats` value can total several runs.
pub fn search_with_stats<S, C>(
    space: &mut S,
    collector: &mut C,
    stats: &mut SearchStats,
) -> Termination
where
    S: SearchSpace,
    C: Collector<S::Solution>,
{
    search_with_cancel(space, collector, &Never, stats)
}

/// Like [`search_with_stats`], polling `cancel` once per node entry.
///
/// When the source fires, the search unwinds (undoing all applied
/// choices) and returns [`Termination::Cancelled`]; solutions already
/// handed to the collector are kept.
pub fn search_with_cancel<S, C, K>(
    space: &mut S,
    collector: &mut C,
    cancel: &K,
    stats: &mut SearchStats,
) -> Termination
where
    S: SearchSpace,
    C: Collector<S::Solution>,
    K: Cancel,
{
    explore(space, collector, cancel, stats, 0).unwrap_or(Termination::Exhausted)
}

/// One node of the depth-first traversal.
///
/// Returns `Some(termination)` to unwind the whole search, `None` to keep
/// exploring siblings.
fn explore<S, C, K>(
    space: &mut S,
    collector: &mut C,
    cancel: &K,
    stats: &mut SearchStats,
    level: usize,
) -> Option<Termination>
where
    S: SearchSpace,
    C: Collector<S::Solution>,
    K: Cancel,
{
    stats.nodes += 1;
    if cancel.is_cancelled() {
        return Some(Termination::Cancelled);
    }

    if space.is_goal(level) {
        stats.solutions += 1;
        if collector.on_solution(|| space.snapshot()).is_stop() {
            return Some(Termination::Satisfied);
        }
    }
    if level == space.depth() {
        return None;
    }

    for choice in 0..space.candidate_count(level) {
        if !space.is_legal(level, choice) {
            stats.pruned += 1;
            continue;
        }
        stats.applied += 1;
        space.apply(level, choice);
        let outcome = explore(space, collector, cancel, stats, level + 1);
        space.undo(level, choice);
        if outcome.is_some() {
            return outcome;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cancel::StopFlag,
        collect::{CollectAll, CountOnly, FirstOnly},
        testing::Sequences,
    };

    #[test]
    fn test_exhaustive_enumeration_order() {
        let mut all = CollectAll::new();
        let termination = search(&mut Sequences::new(3, 1), &mut all);
        assert_eq!(termination, Termination::Exhausted);
        assert_eq!(all.into_solutions(), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_constraint_prunes_branches() {
        let mut count = CountOnly::new();
        search(&mut Sequences::new(2, 4).distinct_adjacent(), &mut count);
        // 2 * 1 * 1 * 1 alternating sequences
        assert_eq!(count.count(), 2);
    }

    #[test]
    fn test_first_only_stops_early() {
        let mut stats = SearchStats::default();
        let mut first = FirstOnly::new();
        let termination =
            search_with_stats(&mut Sequences::new(4, 4), &mut first, &mut stats);
        assert_eq!(termination, Termination::Satisfied);
        assert_eq!(first.into_solution(), Some(vec![0, 0, 0, 0]));
        // Straight descent: root plus one node per level.
        assert_eq!(stats.nodes(), 5);
        assert_eq!(stats.applied(), 4);
    }

    #[test]
    fn test_zero_depth_space_has_one_empty_solution() {
        let mut all = CollectAll::new();
        let termination = search(&mut Sequences::new(5, 0), &mut all);
        assert_eq!(termination, Termination::Exhausted);
        assert_eq!(all.into_solutions(), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_goal_at_every_node_counts_prefixes() {
        let mut count = CountOnly::new();
        search(&mut Sequences::new(2, 2).emit_prefixes(), &mut count);
        // 1 empty + 2 singles + 4 pairs
        assert_eq!(count.count(), 7);
    }

    #[test]
    fn test_space_restored_after_search() {
        let mut space = Sequences::new(3, 3);
        let mut all = CollectAll::new();
        search(&mut space, &mut all);
        assert_eq!(all.len(), 27);
        assert!(space.path().is_empty());

        // The restored space yields identical results when reused.
        let mut again = CollectAll::new();
        search(&mut space, &mut again);
        assert_eq!(again.len(), 27);
    }

    #[test]
    fn test_space_restored_after_early_stop() {
        let mut space = Sequences::new(3, 3);
        let mut first = FirstOnly::new();
        search(&mut space, &mut first);
        assert!(space.path().is_empty());
    }

    #[test]
    fn test_cancel_before_start() {
        let flag = StopFlag::new();
        flag.trigger();
        let mut stats = SearchStats::default();
        let mut all = CollectAll::new();
        let termination = search_with_cancel(
            &mut Sequences::new(2, 8),
            &mut all,
            &flag,
            &mut stats,
        );
        assert_eq!(termination, Termination::Cancelled);
        assert!(all.is_empty());
        assert_eq!(stats.nodes(), 1);
    }

    #[test]
    fn test_cancel_mid_search_restores_space() {
        let mut space = Sequences::new(2, 6);
        let mut count = CountOnly::new();
        let mut stats = SearchStats::default();

        // Fires on the 21st poll; the closure only gets `&self`, so the
        // poll counter lives in a Cell.
        let polls = std::cell::Cell::new(0_u64);
        let cancel = || {
            polls.set(polls.get() + 1);
            polls.get() > 20
        };
        let termination = search_with_cancel(&mut space, &mut count, &cancel, &mut stats);
        assert_eq!(termination, Termination::Cancelled);
        assert!(space.path().is_empty());
        assert_eq!(stats.nodes(), 21);
        assert!(stats.nodes() < 127);
    }

    #[test]
    fn test_stats_accumulate_across_runs() {
        let mut stats = SearchStats::default();
        let mut count = CountOnly::new();
        search_with_stats(&mut Sequences::new(2, 2), &mut count, &mut stats);
        let after_one = stats.nodes();
        search_with_stats(&mut Sequences::new(2, 2), &mut count, &mut stats);
        assert_eq!(stats.nodes(), after_one * 2);
        assert_eq!(count.count(), 8);
    }

    #[test]
    fn test_stats_merge() {
        let mut left = SearchStats::default();
        let mut right = SearchStats::default();
        search_with_stats(&mut Sequences::new(2, 3), &mut CountOnly::new(), &mut left);
        search_with_stats(&mut Sequences::new(3, 2), &mut CountOnly::new(), &mut right);
        let (nodes, solutions) = (left.nodes() + right.nodes(), 8 + 9);
        left.merge(&right);
        assert_eq!(left.nodes(), nodes);
        assert_eq!(left.solutions(), solutions);
    }
}
