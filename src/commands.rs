//! Command types for the Elm-style architecture
//!
//! Commands tell the host what to do after an update.

/// Follow-up for the host widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// State changed; re-render buffer and selection
    Redraw,
    /// Input was rejected and nothing changed; the host may beep or flash
    Bell,
}
