//! The search space abstraction.

/// A problem expressed as a tree of indexed decisions.
///
/// A search space answers five questions about one mutable partial
/// solution: how deep the decision tree is, what the candidates at a level
/// are, which of them are legal right now, how applying or undoing a
/// candidate mutates the state, and when the current state counts as a
/// solution.
///
/// # Contract with the drivers
///
/// The drivers in [`driver`](crate::driver) and [`stream`](crate::stream)
/// call these methods under a fixed discipline, which implementations may
/// rely on:
///
/// - `level` starts at 0 and equals the number of currently applied
///   choices.
/// - Candidates at a level are the indices `0..candidate_count(level)`,
///   tried in ascending order. That order is the problem's total candidate
///   order, so it decides which solution is found first and must be
///   deterministic.
/// - [`apply`](Self::apply) is only called with a `choice` for which
///   [`is_legal`](Self::is_legal) just returned `true`, and every `apply`
///   is paired with exactly one later [`undo`](Self::undo) carrying the
///   same `level` and `choice`, in stack (last-applied, first-undone)
///   order. After the pair runs, the state must be bit-for-bit what it was
///   before `apply`.
/// - [`is_legal`](Self::is_legal) takes `&self` and must not need interior
///   mutation; legality checks are expected to be O(1) against whatever
///   occupancy index the state maintains.
/// - No method is called with `level > depth()`, and candidates are never
///   iterated at `level == depth()`.
///
/// # Goal nodes
///
/// The default [`is_goal`](Self::is_goal) treats exactly the full-depth
/// nodes as solutions. Problems whose every partial state is a solution
/// (subset enumeration) or whose goal is a state property (a target sum
/// reached) override it; the drivers re-check it at every node entry.
pub trait SearchSpace {
    /// The materialized form of a found solution, copied out of the state
    /// by [`snapshot`](Self::snapshot).
    type Solution;

    /// Maximum number of decision levels.
    ///
    /// This is an upper bound on path length, not necessarily the length
    /// of every solution.
    fn depth(&self) -> usize;

    /// Number of candidates at `level`.
    fn candidate_count(&self, level: usize) -> usize;

    /// Returns `true` if `choice` may be applied at `level` given the
    /// current state.
    fn is_legal(&self, level: usize, choice: usize) -> bool;

    /// Applies `choice` at `level`, mutating the state and its occupancy
    /// index.
    fn apply(&mut self, level: usize, choice: usize);

    /// Reverts the matching [`apply`](Self::apply), restoring the state
    /// exactly.
    fn undo(&mut self, level: usize, choice: usize);

    /// Returns `true` if the current state is a complete solution.
    fn is_goal(&self, level: usize) -> bool {
        level == self.depth()
    }

    /// Copies the current state out as an owned [`Solution`](Self::Solution).
    ///
    /// Only called at nodes where [`is_goal`](Self::is_goal) returned
    /// `true`, and never called at all under a counting-only policy.
    fn snapshot(&self) -> Self::Solution;
}
