//! Lazy, pausable search as an iterator.

use std::iter::FusedIterator;

use crate::space::SearchSpace;

/// One suspended node of the traversal.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Next candidate index to try at this node.
    cursor: usize,
    /// The parent-level choice applied to enter this node; `None` for the
    /// root.
    entry_choice: Option<usize>,
}

/// An iterator that drives a [`SearchSpace`] with an explicit frame stack,
/// yielding solutions one at a time.
///
/// Produces exactly the sequence [`search`](crate::search) would hand to a
/// [`CollectAll`](crate::CollectAll), but lazily: work happens inside
/// `next`, and a caller that stops consuming stops the search. Dropping
/// the iterator undoes every still-applied choice, so the borrowed space
/// comes back restored no matter how much of the stream was consumed.
///
/// # Examples
///
/// ```
/// use retrace_engine::{Solutions, testing::Sequences};
///
/// let mut space = Sequences::new(2, 2);
/// let first_two: Vec<_> = Solutions::new(&mut space).take(2).collect();
/// assert_eq!(first_two, vec![vec![0, 0], vec![0, 1]]);
///
/// // The space is handed back restored once the iterator is gone.
/// assert!(space.path().is_empty());
/// ```
#[derive(Debug)]
pub struct Solutions<'a, S: SearchSpace> {
    space: &'a mut S,
    stack: Vec<Frame>,
    started: bool,
}

impl<'a, S: SearchSpace> Solutions<'a, S> {
    /// Creates a lazy search over `space`.
    ///
    /// Nothing runs until the first `next` call.
    #[must_use]
    pub fn new(space: &'a mut S) -> Self {
        Self {
            space,
            stack: Vec::new(),
            started: false,
        }
    }

    /// Pops the top frame, undoing the choice that entered it.
    fn retreat(&mut self) {
        if let Some(frame) = self.stack.pop()
            && let Some(choice) = frame.entry_choice
        {
            // The new top of the stack is the parent this choice was
            // applied at.
            self.space.undo(self.stack.len() - 1, choice);
        }
    }
}

impl<S: SearchSpace> Iterator for Solutions<'_, S> {
    type Item = S::Solution;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            self.stack.push(Frame {
                cursor: 0,
                entry_choice: None,
            });
            if self.space.is_goal(0) {
                return Some(self.space.snapshot());
            }
        }

        while let Some(level) = self.stack.len().checked_sub(1) {
            let frame = &mut self.stack[level];
            if level >= self.space.depth() || frame.cursor >= self.space.candidate_count(level)
            {
                self.retreat();
                continue;
            }

            let choice = frame.cursor;
            frame.cursor += 1;
            if !self.space.is_legal(level, choice) {
                continue;
            }

            self.space.apply(level, choice);
            self.stack.push(Frame {
                cursor: 0,
                entry_choice: Some(choice),
            });
            if self.space.is_goal(level + 1) {
                return Some(self.space.snapshot());
            }
        }
        None
    }
}

impl<S: SearchSpace> FusedIterator for Solutions<'_, S> {}

impl<S: SearchSpace> Drop for Solutions<'_, S> {
    fn drop(&mut self) {
        while !self.stack.is_empty() {
            self.retreat();
        }
    }
}
