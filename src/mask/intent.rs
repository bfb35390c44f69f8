//! Intents raised by the host widget.

use super::validate::Digit;

/// A request to move the cursor or change the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Click or selection change landing on `index`. Home, End and
    /// Ctrl+Arrow are expressed as jumps through this variant.
    MoveTo(usize),
    /// Left arrow: one logical slot back
    StepLeft,
    /// Right arrow: one logical slot forward
    StepRight,
    /// A digit typed at the cursor
    EnterDigit(Digit),
    /// Backspace or Delete at the cursor
    Delete,
}
