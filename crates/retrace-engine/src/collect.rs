//! Solution collection policies.

/// What the search should do after a solution has been handed to the
/// collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SearchFlow {
    /// Keep exploring sibling candidates.
    Continue,
    /// Unwind and terminate the search.
    Stop,
}

/// Receives solutions as the driver finds them and decides whether the
/// search goes on.
///
/// The solution is passed as a closure rather than a value so that
/// policies which do not keep solutions ([`CountOnly`]) never pay for
/// materializing the copy.
pub trait Collector<T> {
    /// Called once per goal node, in discovery order.
    fn on_solution(&mut self, snapshot: impl FnOnce() -> T) -> SearchFlow;
}

/// Collects every solution in discovery order.
///
/// # Examples
///
/// ```
/// use retrace_engine::{CollectAll, search, testing::Sequences};
///
/// let mut all = CollectAll::new();
/// search(&mut Sequences::new(2, 3), &mut all);
/// assert_eq!(all.len(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CollectAll<T> {
    solutions: Vec<T>,
}

impl<T> CollectAll<T> {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            solutions: Vec::new(),
        }
    }

    /// Returns the solutions collected so far.
    #[must_use]
    pub fn solutions(&self) -> &[T] {
        &self.solutions
    }

    /// Consumes the collector, returning the solutions.
    #[must_use]
    pub fn into_solutions(self) -> Vec<T> {
        self.solutions
    }

    /// Returns the number of collected solutions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Returns `true` if nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }
}

impl<T> Collector<T> for CollectAll<T> {
    fn on_solution(&mut self, snapshot: impl FnOnce() -> T) -> SearchFlow {
        self.solutions.push(snapshot());
        SearchFlow::Continue
    }
}

/// Keeps the first solution and stops the search.
///
/// # Examples
///
/// ```
/// use retrace_engine::{FirstOnly, Termination, search, testing::Sequences};
///
/// let mut first = FirstOnly::new();
/// let termination = search(&mut Sequences::new(3, 2), &mut first);
/// assert_eq!(termination, Termination::Satisfied);
/// assert_eq!(first.into_solution(), Some(vec![0, 0]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FirstOnly<T> {
    solution: Option<T>,
}

impl<T> FirstOnly<T> {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { solution: None }
    }

    /// Returns the found solution, if any.
    #[must_use]
    pub fn solution(&self) -> Option<&T> {
        self.solution.as_ref()
    }

    /// Consumes the collector, returning the found solution.
    #[must_use]
    pub fn into_solution(self) -> Option<T> {
        self.solution
    }
}

impl<T> Collector<T> for FirstOnly<T> {
    fn on_solution(&mut self, snapshot: impl FnOnce() -> T) -> SearchFlow {
        if self.solution.is_none() {
            self.solution = Some(snapshot());
        }
        SearchFlow::Stop
    }
}

/// Counts solutions without materializing them.
///
/// With a limit, the search stops as soon as the count reaches it. A limit
/// of 2 is the usual "is the solution unique?" probe.
///
/// # Examples
///
/// ```
/// use retrace_engine::{CountOnly, search, testing::Sequences};
///
/// let mut count = CountOnly::new();
/// search(&mut Sequences::new(3, 3).distinct_adjacent(), &mut count);
/// assert_eq!(count.count(), 12);
///
/// let mut probe = CountOnly::with_limit(2);
/// search(&mut Sequences::new(3, 3), &mut probe);
/// assert_eq!(probe.count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CountOnly {
    count: u64,
    limit: Option<u64>,
}

impl CountOnly {
    /// Creates an unlimited counter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            limit: None,
        }
    }

    /// Creates a counter that stops the search once `limit` solutions have
    /// been counted.
    #[must_use]
    pub const fn with_limit(limit: u64) -> Self {
        Self {
            count: 0,
            limit: Some(limit),
        }
    }

    /// Returns the number of solutions counted; never exceeds the limit.
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.count
    }
}

impl<T> Collector<T> for CountOnly {
    fn on_solution(&mut self, _snapshot: impl FnOnce() -> T) -> SearchFlow {
        match self.limit {
            Some(limit) => {
                if self.count < limit {
                    self.count += 1;
                }
                if self.count >= limit {
                    SearchFlow::Stop
                } else {
                    SearchFlow::Continue
                }
            }
            None => {
                self.count += 1;
                SearchFlow::Continue
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_all_keeps_order() {
        let mut all = CollectAll::new();
        for value in 0..3 {
            assert_eq!(all.on_solution(|| value), SearchFlow::Continue);
        }
        assert_eq!(all.solutions(), &[0, 1, 2]);
        assert_eq!(all.into_solutions(), vec![0, 1, 2]);
    }

    #[test]
    fn test_first_only_stops_and_keeps_first() {
        let mut first = FirstOnly::new();
        assert_eq!(first.on_solution(|| 7), SearchFlow::Stop);
        assert_eq!(first.on_solution(|| 8), SearchFlow::Stop);
        assert_eq!(first.into_solution(), Some(7));
    }

    #[test]
    fn test_count_only_never_snapshots() {
        let mut count = CountOnly::new();
        for _ in 0..5 {
            let flow = Collector::<u32>::on_solution(&mut count, || {
                panic!("counting must not materialize solutions")
            });
            assert_eq!(flow, SearchFlow::Continue);
        }
        assert_eq!(count.count(), 5);
    }

    #[test]
    fn test_count_only_limit() {
        let mut probe = CountOnly::with_limit(2);
        assert_eq!(Collector::<u32>::on_solution(&mut probe, || 0), SearchFlow::Continue);
        assert_eq!(Collector::<u32>::on_solution(&mut probe, || 0), SearchFlow::Stop);
        assert_eq!(probe.count(), 2);

        let mut zero = CountOnly::with_limit(0);
        assert_eq!(Collector::<u32>::on_solution(&mut zero, || 0), SearchFlow::Stop);
        assert_eq!(zero.count(), 0);
    }
}
