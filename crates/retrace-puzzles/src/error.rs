//! The shared solver error type.

/// Error returned by the puzzle entry points.
///
/// There are exactly two kinds. Malformed arguments are rejected up front,
/// before any search runs; an exhausted search on an entry point that
/// promises a solution is [`Unsolvable`](Self::Unsolvable). Enumeration
/// entry points express "nothing found" as an empty collection instead,
/// and constraint rejections during the search are ordinary control flow,
/// never errors.
///
/// # Examples
///
/// ```
/// use retrace_puzzles::{SolveError, queens::solve_n_queens};
///
/// let error = solve_n_queens(33).unwrap_err();
/// assert!(matches!(error, SolveError::InvalidInput { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The arguments cannot describe a searchable problem.
    #[display("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: &'static str,
    },
    /// The search space was exhausted without finding a solution.
    #[display("no solution exists")]
    Unsolvable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let invalid = SolveError::InvalidInput {
            reason: "board too large",
        };
        assert_eq!(invalid.to_string(), "invalid input: board too large");
        assert_eq!(SolveError::Unsolvable.to_string(), "no solution exists");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<SolveError>();
    }
}
