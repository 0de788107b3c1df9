//! Phone-keypad spelling enumeration.

use retrace_engine::{CollectAll, SearchSpace, search};

use crate::SolveError;

/// Search space over the spellings of a phone-keypad digit string.
///
/// Level `r` picks one letter from the key pressed at position `r`, so
/// every leaf is a full-length spelling and no candidate is ever
/// illegal: the space is a plain product of the key alphabets, visited
/// in letter order (`"abc"` before `"abd"`).
#[derive(Debug)]
pub struct PhoneLetters {
    keys: Vec<&'static str>,
    spelling: String,
}

impl PhoneLetters {
    /// Creates the space for `digits`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidInput`] if `digits` contains anything
    /// other than the letter-bearing keys `2`-`9` (`0`, `1`, and
    /// non-digits carry no letters).
    pub fn new(digits: &str) -> Result<Self, SolveError> {
        let keys = digits
            .chars()
            .map(|digit| match digit {
                '2' => Ok("abc"),
                '3' => Ok("def"),
                '4' => Ok("ghi"),
                '5' => Ok("jkl"),
                '6' => Ok("mno"),
                '7' => Ok("pqrs"),
                '8' => Ok("tuv"),
                '9' => Ok("wxyz"),
                _ => Err(SolveError::InvalidInput {
                    reason: "keypad digits must be 2-9",
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        let length = keys.len();
        Ok(Self {
            keys,
            spelling: String::with_capacity(length),
        })
    }
}

impl SearchSpace for PhoneLetters {
    type Solution = String;

    fn depth(&self) -> usize {
        self.keys.len()
    }

    fn candidate_count(&self, level: usize) -> usize {
        self.keys[level].len()
    }

    fn is_legal(&self, _level: usize, _choice: usize) -> bool {
        true
    }

    fn apply(&mut self, level: usize, choice: usize) {
        debug_assert_eq!(level, self.spelling.len());
        self.spelling.push(char::from(self.keys[level].as_bytes()[choice]));
    }

    fn undo(&mut self, level: usize, choice: usize) {
        let popped = self.spelling.pop();
        debug_assert_eq!(popped, Some(char::from(self.keys[level].as_bytes()[choice])));
    }

    fn snapshot(&self) -> Self::Solution {
        self.spelling.clone()
    }
}

/// Returns every word the keypad digits `digits` could be spelling.
///
/// Each digit 2-9 contributes one of its key's letters; results arrive
/// with earlier digits varying slowest, letters in key order. An empty
/// digit string spells nothing and yields an empty list, not the empty
/// word.
///
/// # Errors
///
/// Returns [`SolveError::InvalidInput`] if `digits` contains a character
/// other than `2`-`9`.
///
/// # Examples
///
/// ```
/// use retrace_puzzles::letter_combinations::letter_combinations;
///
/// assert_eq!(
///     letter_combinations("23")?,
///     vec!["ad", "ae", "af", "bd", "be", "bf", "cd", "ce", "cf"],
/// );
/// # Ok::<(), retrace_puzzles::SolveError>(())
/// ```
pub fn letter_combinations(digits: &str) -> Result<Vec<String>, SolveError> {
    if digits.is_empty() {
        return Ok(Vec::new());
    }
    let mut space = PhoneLetters::new(digits)?;
    let mut all = CollectAll::new();
    search(&mut space, &mut all);
    Ok(all.into_solutions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_keys_in_exact_order() {
        assert_eq!(
            letter_combinations("23").unwrap(),
            vec!["ad", "ae", "af", "bd", "be", "bf", "cd", "ce", "cf"]
        );
    }

    #[test]
    fn test_empty_digits_spell_nothing() {
        assert_eq!(letter_combinations("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_single_key() {
        assert_eq!(letter_combinations("2").unwrap(), vec!["a", "b", "c"]);
        assert_eq!(letter_combinations("9").unwrap(), vec!["w", "x", "y", "z"]);
    }

    #[test]
    fn test_four_letter_keys() {
        let spellings = letter_combinations("79").unwrap();
        assert_eq!(spellings.len(), 16);
        assert_eq!(spellings.first().map(String::as_str), Some("pw"));
        assert_eq!(spellings.last().map(String::as_str), Some("sz"));
    }

    #[test]
    fn test_count_is_product_of_key_sizes() {
        assert_eq!(letter_combinations("234").unwrap().len(), 27);
    }

    #[test]
    fn test_letterless_keys_are_invalid() {
        for digits in ["1", "0", "2a3", "2 3"] {
            assert!(matches!(
                letter_combinations(digits),
                Err(SolveError::InvalidInput { .. })
            ));
        }
    }
}
