//! Masked-input engine for the `___-___-____` phone field.
//!
//! Everything in this module is a pure, synchronous computation over
//! `(buffer, cursor, intent)`. The host turns platform events into
//! [`Intent`]s and displays the resulting buffer with the one-character
//! selection `[cursor, cursor + 1)`.
//!
//! # Architecture
//!
//! - [`MaskBuffer`]: fixed 12-character layout with separators at 3 and 7
//! - [`is_digit`] / [`is_numeric_candidate`]: input validators
//! - [`apply_cursor_intent`]: cursor policy, never lands on a separator
//! - [`apply_edit_intent`]: single-slot replacement plus the cursor move
//! - [`reformat`]: whole-string input back to the canonical mask
//! - [`MaskState`]: the `(buffer, cursor)` pair with `apply(intent)`
//! - [`MaskHistory`]: bounded undo/redo of states
//!
//! # Example
//!
//! ```
//! use phone_mask::mask::{Digit, Intent, MaskState};
//!
//! let five = Intent::EnterDigit(Digit::new('5').unwrap());
//! let state = MaskState::new().apply(five).apply(five).apply(five);
//!
//! assert_eq!(state.buffer.to_string(), "555-___-____");
//! assert_eq!(state.cursor.index(), 4);
//! ```

mod buffer;
mod cursor;
mod edit;
mod error;
mod history;
mod intent;
mod reformat;
mod state;
mod validate;

pub use buffer::{
    group_of, is_separator, is_slot, slot_indices, MaskBuffer, GROUP_BOUNDS, LAST_INDEX,
    MASK_LEN, PLACEHOLDER, SEPARATOR, SEPARATOR_POSITIONS,
};
pub use cursor::{apply_cursor_intent, Cursor};
pub use edit::apply_edit_intent;
pub use error::MaskError;
pub use history::{MaskHistory, DEFAULT_HISTORY_LIMIT};
pub use intent::Intent;
pub use reformat::{reformat, reformat_with, OverflowPolicy};
pub use state::MaskState;
pub use validate::{is_digit, is_numeric_candidate, Digit};
