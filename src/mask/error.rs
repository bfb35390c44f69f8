//! Errors surfaced at the mask boundary.
//!
//! Invariant violations inside the policies are not represented here: they
//! are defects and panic instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("input {0:?} is not a numeric candidate")]
    NotNumeric(String),

    #[error("{0} digit(s) do not fit in the mask")]
    Overflow(usize),

    #[error("masked text must be 12 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid character {ch:?} at position {index}")]
    InvalidChar { index: usize, ch: char },

    #[error("position {0} is not a digit slot")]
    NotASlot(usize),

    #[error("{0:?} is not a digit")]
    NotADigit(char),
}
