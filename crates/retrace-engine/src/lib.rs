//! Problem-independent depth-first backtracking machinery.
//!
//! This crate contains the search engine shared by every solver in the
//! workspace: a trait describing a problem as a tree of indexed decisions,
//! two drivers that walk that tree with exact undo, and the collection
//! policies that decide what happens when a solution turns up.
//!
//! # Overview
//!
//! 1. **Describing a problem** - [`space`]
//!    - [`SearchSpace`]: candidate model, legality check, apply/undo pair,
//!      goal test, and solution snapshot behind one trait
//! 2. **Running a search** - [`driver`] and [`stream`]
//!    - [`search`], [`search_with_stats`], [`search_with_cancel`]: the
//!      recursive driver, returning a [`Termination`] and filling a
//!      [`SearchStats`]
//!    - [`Solutions`]: the same traversal as a lazy iterator over an
//!      explicit frame stack, restoring the space on drop
//! 3. **Handling solutions** - [`collect`]
//!    - [`CollectAll`], [`FirstOnly`], [`CountOnly`] behind the
//!      [`Collector`] trait; counting never copies a solution
//! 4. **Stopping early** - [`cancel`]
//!    - [`Cancel`] sources ([`Never`], [`StopFlag`], any `Fn() -> bool`),
//!      polled once per node entry
//!
//! The engine owns no domain types and does no I/O; solvers supply both.
//!
//! # Examples
//!
//! ```
//! use retrace_engine::{CollectAll, Termination, search, testing::Sequences};
//!
//! let mut space = Sequences::new(2, 3).distinct_adjacent();
//! let mut all = CollectAll::new();
//! let termination = search(&mut space, &mut all);
//!
//! assert_eq!(termination, Termination::Exhausted);
//! assert_eq!(all.len(), 2);
//! assert!(space.path().is_empty());
//! ```

pub mod cancel;
pub mod collect;
pub mod driver;
pub mod space;
pub mod stream;
pub mod testing;

// Re-export commonly used types
pub use self::{
    cancel::{Cancel, Never, StopFlag},
    collect::{CollectAll, Collector, CountOnly, FirstOnly, SearchFlow},
    driver::{SearchStats, Termination, search, search_with_cancel, search_with_stats},
    space::SearchSpace,
    stream::Solutions,
};
