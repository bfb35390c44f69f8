//! Message types for the Elm-style architecture
//!
//! Every change to a masked field flows through [`MaskMsg`].

use crate::mask::Intent;

/// Messages accepted by [`update`](crate::update::update)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskMsg {
    /// Cursor movement or single-slot edit
    Intent(Intent),
    /// Whole-text replacement (clipboard paste, programmatic fill)
    Paste(String),
    /// Reset to all placeholders, cursor on the first slot
    Clear,
    /// Restore the state before the last edit
    Undo,
    /// Re-apply the last undone edit
    Redo,
}

impl MaskMsg {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            MaskMsg::Intent(Intent::MoveTo(_)) => "MoveTo",
            MaskMsg::Intent(Intent::StepLeft) => "StepLeft",
            MaskMsg::Intent(Intent::StepRight) => "StepRight",
            MaskMsg::Intent(Intent::EnterDigit(_)) => "EnterDigit",
            MaskMsg::Intent(Intent::Delete) => "Delete",
            MaskMsg::Paste(_) => "Paste",
            MaskMsg::Clear => "Clear",
            MaskMsg::Undo => "Undo",
            MaskMsg::Redo => "Redo",
        }
    }
}

impl From<Intent> for MaskMsg {
    fn from(intent: Intent) -> Self {
        MaskMsg::Intent(intent)
    }
}
