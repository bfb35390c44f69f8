//! Command enum representing every action a key can trigger in a masked field
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command resolves to at most one `MaskMsg` against the current state.

use crate::mask::{group_of, Intent, MaskState, GROUP_BOUNDS, MASK_LEN};
use crate::messages::MaskMsg;

/// All field commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Cursor Movement
    // ========================================================================
    /// One slot left, hopping the separator
    StepLeft,
    /// One slot right, hopping the separator
    StepRight,
    /// First slot
    MoveHome,
    /// Last slot
    MoveEnd,
    /// Start of the current group, or of the previous one when already there
    PrevGroup,
    /// Start of the next group, or the last slot from the final group
    NextGroup,

    // ========================================================================
    // Editing
    // ========================================================================
    /// Clear the slot under the cursor and retreat (Backspace)
    DeleteBackward,
    /// Clear the slot under the cursor (Delete)
    DeleteForward,
    /// Reset the whole field
    Clear,

    // ========================================================================
    // Undo/Redo
    // ========================================================================
    Undo,
    Redo,

    /// Placeholder used in user keymaps to remove a default binding
    Unbound,
}

impl Command {
    /// Convert this command to a message for the update loop
    ///
    /// Returns `None` when the command has nothing to do from `state`, such
    /// as jumping to the group the cursor already starts.
    pub fn to_msg(self, state: &MaskState) -> Option<MaskMsg> {
        use Command::*;

        let current = state.cursor.index();
        match self {
            StepLeft => Some(Intent::StepLeft.into()),
            StepRight => Some(Intent::StepRight.into()),
            MoveHome => jump(current, 0),
            MoveEnd => jump(current, MASK_LEN),
            PrevGroup => jump(current, prev_group_start(current)),
            NextGroup => jump(current, next_group_start(current)),
            // Both delete keys clear the slot under the cursor
            DeleteBackward | DeleteForward => Some(Intent::Delete.into()),
            Clear => Some(MaskMsg::Clear),
            Undo => Some(MaskMsg::Undo),
            Redo => Some(MaskMsg::Redo),
            Unbound => None,
        }
    }
}

/// `MoveTo(target)`, unless the cursor is already there.
///
/// Re-requesting the current slot would step one slot back, so a jump to
/// where the cursor sits is dropped instead.
fn jump(current: usize, target: usize) -> Option<MaskMsg> {
    if target == current {
        None
    } else {
        Some(Intent::MoveTo(target).into())
    }
}

fn prev_group_start(current: usize) -> usize {
    let group = group_of(current).unwrap_or(0);
    let start = GROUP_BOUNDS[group].start;
    if current > start || group == 0 {
        start
    } else {
        GROUP_BOUNDS[group - 1].start
    }
}

fn next_group_start(current: usize) -> usize {
    let group = group_of(current).unwrap_or(0);
    GROUP_BOUNDS
        .get(group + 1)
        .map_or(MASK_LEN, |range| range.start)
}
