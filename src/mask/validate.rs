//! Character and candidate-text predicates.

use std::fmt;

use super::error::MaskError;

/// Characters ignored by [`is_numeric_candidate`]
const FORMATTING_CHARS: [char; 3] = [' ', '-', '_'];

/// True iff `ch` is one of `0`-`9`.
pub fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// True iff `text` contains only digits once spaces, hyphens and
/// underscores are removed. The empty string is a valid candidate.
pub fn is_numeric_candidate(text: &str) -> bool {
    text.chars()
        .filter(|ch| !FORMATTING_CHARS.contains(ch))
        .all(is_digit)
}

/// A single decimal digit.
///
/// `EnterDigit` carries this instead of a bare `char`, so a non-digit
/// payload cannot reach the edit policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    /// `Some` iff `ch` is an ASCII digit
    pub fn new(ch: char) -> Option<Self> {
        is_digit(ch).then_some(Self(ch))
    }

    /// Digit from its numeric value, `None` above 9
    pub fn from_value(value: u8) -> Option<Self> {
        (value < 10).then(|| Self(char::from(b'0' + value)))
    }

    pub const fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = MaskError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch).ok_or(MaskError::NotADigit(ch))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_digit() {
        for ch in '0'..='9' {
            assert!(is_digit(ch));
        }
        assert!(!is_digit('a'));
        assert!(!is_digit('-'));
        assert!(!is_digit('_'));
        assert!(!is_digit('٣')); // non-ASCII digit
    }

    #[test]
    fn test_numeric_candidate_accepts_formatting() {
        assert!(is_numeric_candidate(""));
        assert!(is_numeric_candidate("___-___-____"));
        assert!(is_numeric_candidate("555-123-4567"));
        assert!(is_numeric_candidate("555 123 4567"));
        assert!(is_numeric_candidate("5551234567"));
    }

    #[test]
    fn test_numeric_candidate_rejects_symbols() {
        assert!(!is_numeric_candidate("12a-345"));
        assert!(!is_numeric_candidate("+1 555"));
        assert!(!is_numeric_candidate("(555) 123"));
        assert!(!is_numeric_candidate("555.123"));
    }

    #[test]
    fn test_digit_construction() {
        assert_eq!(Digit::new('7').map(Digit::as_char), Some('7'));
        assert_eq!(Digit::new('x'), None);
        assert_eq!(Digit::from_value(0), Digit::new('0'));
        assert_eq!(Digit::from_value(9), Digit::new('9'));
        assert_eq!(Digit::from_value(10), None);
        assert_eq!(Digit::try_from('q'), Err(MaskError::NotADigit('q')));
    }
}
