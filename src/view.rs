//! Text rendering of a masked field
//!
//! The field is drawn as its 12 characters with the one-character
//! selection bracketed, e.g. `555-[_]__-____`.

use serde::Serialize;

use crate::commands::Cmd;
use crate::mask::MaskState;

/// Render the buffer with the selection in brackets
pub fn render(state: &MaskState) -> String {
    let selection = state.selection();
    let mut out = String::with_capacity(state.buffer.len() + 2);
    for (index, ch) in state.buffer.to_string().chars().enumerate() {
        if index == selection.start {
            out.push('[');
        }
        out.push(ch);
        if index + 1 == selection.end {
            out.push(']');
        }
    }
    out
}

/// One line of replay output: event label, frame, and a marker for rejections
pub fn render_step(label: &str, cmd: Option<Cmd>, state: &MaskState) -> String {
    let marker = match cmd {
        Some(Cmd::Bell) => "  (rejected)",
        Some(Cmd::Redraw) | None => "",
    };
    format!("{:>16}  {}{}", label, render(state), marker)
}

/// Serializable snapshot of a field for `--json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub text: String,
    pub cursor: usize,
    pub selection: [usize; 2],
    pub digits: String,
    pub complete: bool,
}

impl Frame {
    pub fn from_state(state: &MaskState) -> Self {
        let selection = state.selection();
        Self {
            text: state.buffer.to_string(),
            cursor: state.cursor.index(),
            selection: [selection.start, selection.end],
            digits: state.buffer.digits(),
            complete: state.buffer.is_complete(),
        }
    }
}
