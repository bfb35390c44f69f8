//! Fixed-layout buffer for the `___-___-____` phone mask.
//!
//! The buffer is a plain `Copy` value. Every edit produces a new buffer;
//! nothing outside this module can write a separator position.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use super::error::MaskError;
use super::validate::is_digit;

/// Total number of characters in the mask, separators included
pub const MASK_LEN: usize = 12;

/// Index of the last character
pub const LAST_INDEX: usize = MASK_LEN - 1;

/// Literal separator between digit groups
pub const SEPARATOR: char = '-';

/// Marker for an unfilled digit slot
pub const PLACEHOLDER: char = '_';

/// Positions that always hold [`SEPARATOR`]
pub const SEPARATOR_POSITIONS: [usize; 2] = [3, 7];

/// Half-open index ranges of the three digit groups
pub const GROUP_BOUNDS: [Range<usize>; 3] = [0..3, 4..7, 8..12];

/// Check whether `index` is one of the fixed separator positions.
pub const fn is_separator(index: usize) -> bool {
    index == SEPARATOR_POSITIONS[0] || index == SEPARATOR_POSITIONS[1]
}

/// Check whether `index` is a digit slot (inside the mask, not a separator).
pub const fn is_slot(index: usize) -> bool {
    index < MASK_LEN && !is_separator(index)
}

/// Index of the group containing `index`, `None` for separators and out-of-range indices.
pub fn group_of(index: usize) -> Option<usize> {
    GROUP_BOUNDS.iter().position(|range| range.contains(&index))
}

/// The masked phone number: 12 characters, separators at 3 and 7.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskBuffer {
    chars: [char; MASK_LEN],
}

#[allow(clippy::len_without_is_empty)]
impl MaskBuffer {
    /// All placeholders: `___-___-____`
    pub const fn empty() -> Self {
        let mut chars = [PLACEHOLDER; MASK_LEN];
        chars[SEPARATOR_POSITIONS[0]] = SEPARATOR;
        chars[SEPARATOR_POSITIONS[1]] = SEPARATOR;
        Self { chars }
    }

    /// Build a buffer from three fixed-width groups.
    ///
    /// Any character that is not a digit is stored as a placeholder, so the
    /// result always satisfies the slot invariant.
    pub fn from_groups(groups: [&[char]; 3]) -> Self {
        let mut buffer = Self::empty();
        for (range, group) in GROUP_BOUNDS.iter().zip(groups) {
            for (offset, index) in range.clone().enumerate() {
                buffer.chars[index] = match group.get(offset) {
                    Some(&ch) if is_digit(ch) => ch,
                    _ => PLACEHOLDER,
                };
            }
        }
        buffer
    }

    /// Always [`MASK_LEN`]
    pub const fn len(&self) -> usize {
        MASK_LEN
    }

    /// The three digit groups as index ranges
    pub fn group_bounds(&self) -> [Range<usize>; 3] {
        GROUP_BOUNDS
    }

    /// Character at `index`, `None` past the end
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// True if the buffer holds a separator at `index`
    pub fn is_separator_at(&self, index: usize) -> bool {
        self.char_at(index) == Some(SEPARATOR)
    }

    /// Return a copy with the slot at `index` replaced by `ch`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is a separator or out of range, or if `ch` is neither
    /// a digit nor the placeholder. Callers reach this only through a
    /// [`Cursor`](super::Cursor), which cannot hold such an index.
    #[must_use]
    pub(crate) fn with_slot(self, index: usize, ch: char) -> Self {
        assert!(
            is_slot(index),
            "mask invariant violated: write to non-slot index {index}"
        );
        assert!(
            is_digit(ch) || ch == PLACEHOLDER,
            "mask invariant violated: {ch:?} is not a slot character"
        );
        let mut next = self;
        next.chars[index] = ch;
        next
    }

    /// Digits entered so far, separators and placeholders removed
    pub fn digits(&self) -> String {
        self.chars.iter().filter(|ch| is_digit(**ch)).collect()
    }

    /// Every slot holds a digit
    pub fn is_complete(&self) -> bool {
        slot_indices().all(|index| is_digit(self.chars[index]))
    }

    /// First slot still holding a placeholder
    pub fn first_placeholder(&self) -> Option<usize> {
        slot_indices().find(|&index| self.chars[index] == PLACEHOLDER)
    }
}

/// All digit-slot indices in ascending order
pub fn slot_indices() -> impl Iterator<Item = usize> {
    (0..MASK_LEN).filter(|&index| !is_separator(index))
}

impl Default for MaskBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for MaskBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for MaskBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MaskBuffer(\"{self}\")")
    }
}

/// Parses an already-masked string such as `555-12_-____`.
///
/// Use [`reformat`](super::reformat) for free-form numeric text.
impl FromStr for MaskBuffer {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != MASK_LEN {
            return Err(MaskError::InvalidLength(chars.len()));
        }

        let mut buffer = Self::empty();
        for (index, ch) in chars.into_iter().enumerate() {
            let valid = if is_separator(index) {
                ch == SEPARATOR
            } else {
                is_digit(ch) || ch == PLACEHOLDER
            };
            if !valid {
                return Err(MaskError::InvalidChar { index, ch });
            }
            buffer.chars[index] = ch;
        }
        Ok(buffer)
    }
}
