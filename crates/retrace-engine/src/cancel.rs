//! Cooperative cancellation.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// A cancellation source polled by the driver once per node entry.
///
/// Cancellation is cooperative: the search only notices it between nodes,
/// never mid-candidate, and unwinds cleanly (restoring the space) when it
/// does. Any `Fn() -> bool` closure works as a source.
pub trait Cancel {
    /// Returns `true` once the search should stop.
    fn is_cancelled(&self) -> bool;
}

/// The cancellation source that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl Cancel for Never {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F: Fn() -> bool> Cancel for F {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// A clonable cancellation flag that can be raised from another thread.
///
/// # Examples
///
/// ```
/// use retrace_engine::{Cancel, StopFlag};
///
/// let flag = StopFlag::new();
/// let handle = flag.clone();
/// assert!(!flag.is_cancelled());
///
/// handle.trigger();
/// assert!(flag.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    flag: Arc<AtomicBool>,
}

impl StopFlag {
    /// Creates a new, unraised flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag; every clone observes it.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl Cancel for StopFlag {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never() {
        assert!(!Never.is_cancelled());
    }

    #[test]
    fn test_closure_source() {
        let source = || true;
        assert!(source.is_cancelled());
    }

    #[test]
    fn test_stop_flag_shared_across_clones() {
        let flag = StopFlag::new();
        let clone = flag.clone();
        assert!(!clone.is_cancelled());
        flag.trigger();
        assert!(clone.is_cancelled());
    }
}
