//! The `(buffer, cursor)` pair threaded through every transition.

use std::ops::Range;

use super::buffer::{MaskBuffer, LAST_INDEX};
use super::cursor::Cursor;
use super::edit::apply_edit_intent;
use super::error::MaskError;
use super::intent::Intent;
use super::reformat::{reformat_with, OverflowPolicy};

/// Complete state of one masked field.
///
/// Transitions consume the old value and return a new one; buffer and
/// cursor are always replaced together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaskState {
    pub buffer: MaskBuffer,
    pub cursor: Cursor,
}

impl MaskState {
    /// Freshly mounted field: all placeholders, cursor on the first slot
    pub const fn new() -> Self {
        Self {
            buffer: MaskBuffer::empty(),
            cursor: Cursor::start(),
        }
    }

    /// Parse a masked string and a cursor index, e.g. `("555-___-____", 4)`
    pub fn parse(masked: &str, cursor: usize) -> Result<Self, MaskError> {
        Ok(Self {
            buffer: masked.parse()?,
            cursor: Cursor::new(cursor)?,
        })
    }

    /// Apply one intent
    #[must_use]
    pub fn apply(self, intent: Intent) -> Self {
        let (buffer, cursor) = apply_edit_intent(&self.buffer, self.cursor, intent);
        Self { buffer, cursor }
    }

    /// Build a state from free-form text (paste, programmatic fill).
    ///
    /// The cursor lands on the first empty slot, or on the last slot when
    /// every slot is filled.
    pub fn from_text(raw: &str, policy: OverflowPolicy) -> Result<Self, MaskError> {
        let buffer = reformat_with(raw, policy)?;
        let index = buffer.first_placeholder().unwrap_or(LAST_INDEX);
        Ok(Self {
            buffer,
            cursor: Cursor::new(index)?,
        })
    }

    /// Half-open selection to display
    pub fn selection(&self) -> Range<usize> {
        self.cursor.selection()
    }

    /// Verify the state invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        use super::buffer::{is_slot, SEPARATOR, SEPARATOR_POSITIONS};

        for index in SEPARATOR_POSITIONS {
            debug_assert_eq!(
                self.buffer.char_at(index),
                Some(SEPARATOR),
                "separator at {index} was overwritten"
            );
        }
        debug_assert!(
            is_slot(self.cursor.index()),
            "cursor {} is not on a slot",
            self.cursor.index()
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
