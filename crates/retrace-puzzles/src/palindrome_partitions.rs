//! Palindromic string partitioning.

use retrace_engine::{CollectAll, SearchSpace, search};

/// Search space over the partitions of a string into palindromic
/// segments.
///
/// The state is the list of cut points taken so far; level `r` chooses
/// how long the `r`-th segment is (choice `c` covers `c + 1` characters
/// from the first uncut position). A node is a goal once the cuts reach
/// the end of the string, so shorter segments enumerate before longer
/// ones. Segments are sequences of `char`s, not bytes, so multi-byte
/// characters mirror correctly.
#[derive(Debug)]
pub struct PalindromePartitions {
    chars: Vec<char>,
    cuts: Vec<usize>,
}

impl PalindromePartitions {
    /// Creates the space partitioning `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            cuts: Vec::new(),
        }
    }

    /// First position not covered by a cut yet.
    fn start(&self) -> usize {
        self.cuts.last().copied().unwrap_or(0)
    }

    fn is_palindrome(&self, start: usize, end: usize) -> bool {
        let segment = &self.chars[start..end];
        segment.iter().eq(segment.iter().rev())
    }
}

impl SearchSpace for PalindromePartitions {
    type Solution = Vec<String>;

    fn depth(&self) -> usize {
        // At most one segment per character.
        self.chars.len()
    }

    fn candidate_count(&self, _level: usize) -> usize {
        self.chars.len() - self.start()
    }

    fn is_legal(&self, _level: usize, choice: usize) -> bool {
        let start = self.start();
        self.is_palindrome(start, start + choice + 1)
    }

    fn apply(&mut self, level: usize, choice: usize) {
        debug_assert_eq!(level, self.cuts.len());
        self.cuts.push(self.start() + choice + 1);
    }

    fn undo(&mut self, _level: usize, choice: usize) {
        let popped = self.cuts.pop();
        debug_assert_eq!(popped, Some(self.start() + choice + 1));
    }

    fn is_goal(&self, _level: usize) -> bool {
        self.start() == self.chars.len()
    }

    fn snapshot(&self) -> Self::Solution {
        let mut segments = Vec::with_capacity(self.cuts.len());
        let mut previous = 0;
        for &cut in &self.cuts {
            segments.push(self.chars[previous..cut].iter().collect());
            previous = cut;
        }
        segments
    }
}

/// Returns every way to split `text` into palindromic segments.
///
/// Partitions arrive with earlier segments shortest first, so the
/// all-singletons partition comes first and the whole-string partition
/// (when `text` itself is a palindrome) comes last. The empty string has
/// exactly one partition, the empty one.
///
/// # Examples
///
/// ```
/// use retrace_puzzles::palindrome_partitions::palindrome_partitions;
///
/// assert_eq!(
///     palindrome_partitions("aab"),
///     vec![vec!["a", "a", "b"], vec!["aa", "b"]],
/// );
/// ```
#[must_use]
pub fn palindrome_partitions(text: &str) -> Vec<Vec<String>> {
    let mut space = PalindromePartitions::new(text);
    let mut all = CollectAll::new();
    search(&mut space, &mut all);
    all.into_solutions()
}
