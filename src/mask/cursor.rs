//! Cursor type and the cursor policy.
//!
//! Arrow keys move through logical digit slots and hop the separator.
//! Clicks place the selection where requested, except that re-clicking the
//! current slot lands one position earlier and a click on a separator
//! resolves to the slot after it.

use std::ops::Range;

use super::buffer::{is_slot, MaskBuffer, LAST_INDEX, MASK_LEN};
use super::error::MaskError;
use super::intent::Intent;

/// Index of the selected slot.
///
/// Always a digit slot in `[0, 11]`. The host displays the one-character
/// selection `[index, index + 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor(usize);

impl Cursor {
    /// The first slot
    pub const fn start() -> Self {
        Self(0)
    }

    /// Cursor at `index`, rejecting separators and out-of-range indices
    pub fn new(index: usize) -> Result<Self, MaskError> {
        if is_slot(index) {
            Ok(Self(index))
        } else {
            Err(MaskError::NotASlot(index))
        }
    }

    /// Terminal check of every policy result.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a slot; the policy must never produce one.
    fn settled(index: usize) -> Self {
        assert!(
            is_slot(index),
            "cursor invariant violated: resolved to index {index}"
        );
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    /// The half-open selection shown by the host
    pub fn selection(self) -> Range<usize> {
        self.0..self.0 + 1
    }
}

impl TryFrom<usize> for Cursor {
    type Error = MaskError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

/// Compute the cursor that follows `intent`.
///
/// Edit intents move the cursor the way the edit policy does: `EnterDigit`
/// advances like `StepRight` and `Delete` retreats like `StepLeft`.
pub fn apply_cursor_intent(buffer: &MaskBuffer, cursor: Cursor, intent: Intent) -> Cursor {
    let current = cursor.index();
    let candidate = match intent {
        Intent::StepRight | Intent::EnterDigit(_) => step_right(buffer, current),
        Intent::StepLeft | Intent::Delete => step_left(buffer, current),
        Intent::MoveTo(requested) => {
            let landing = click_target(requested, current);
            resolve_separator(buffer, landing)
        }
    };
    settle(buffer, candidate)
}

fn step_right(buffer: &MaskBuffer, current: usize) -> usize {
    let mut candidate = current + 1;
    if buffer.is_separator_at(candidate) {
        candidate += 1;
    }
    candidate.min(LAST_INDEX)
}

fn step_left(buffer: &MaskBuffer, current: usize) -> usize {
    let mut candidate = current.saturating_sub(1);
    if buffer.is_separator_at(candidate) {
        candidate = candidate.saturating_sub(1);
    }
    candidate
}

/// Where a click lands before separator resolution.
fn click_target(requested: usize, current: usize) -> usize {
    if requested >= MASK_LEN {
        // End key or a click past the last character
        LAST_INDEX
    } else if requested == current && current != 0 {
        requested - 1
    } else {
        requested
    }
}

/// A separator at `s` resolves forward to `s + 1`, or back to `s - 1` when
/// there is no slot after it.
fn resolve_separator(buffer: &MaskBuffer, candidate: usize) -> usize {
    if !buffer.is_separator_at(candidate) {
        return candidate;
    }
    if candidate < LAST_INDEX {
        candidate + 1
    } else {
        candidate - 1
    }
}

fn settle(buffer: &MaskBuffer, candidate: usize) -> Cursor {
    let clamped = candidate.min(LAST_INDEX);
    let index = if is_slot(clamped) {
        clamped
    } else {
        tracing::warn!(
            target: "cursor",
            candidate,
            "policy produced a separator, re-resolving"
        );
        resolve_separator(buffer, clamped)
    };
    Cursor::settled(index)
}
