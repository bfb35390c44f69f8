//! Edit policy: single-slot replacement plus the follow-up cursor move.

use super::buffer::{MaskBuffer, PLACEHOLDER};
use super::cursor::{apply_cursor_intent, Cursor};
use super::intent::Intent;

/// Apply `intent` to `(buffer, cursor)`.
///
/// `EnterDigit` writes the digit under the cursor and advances one slot.
/// `Delete` writes the placeholder under the cursor and retreats one slot.
/// Navigation intents leave the buffer untouched.
pub fn apply_edit_intent(buffer: &MaskBuffer, cursor: Cursor, intent: Intent) -> (MaskBuffer, Cursor) {
    let next_buffer = match intent {
        Intent::EnterDigit(digit) => buffer.with_slot(cursor.index(), digit.as_char()),
        Intent::Delete => buffer.with_slot(cursor.index(), PLACEHOLDER),
        Intent::MoveTo(_) | Intent::StepLeft | Intent::StepRight => *buffer,
    };
    let next_cursor = apply_cursor_intent(buffer, cursor, intent);
    (next_buffer, next_cursor)
}
