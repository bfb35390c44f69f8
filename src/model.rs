//! Host-side owner of a masked field.

use crate::config::MaskConfig;
use crate::mask::{MaskHistory, MaskState};

/// One mounted phone field: current state, undo history and settings.
///
/// Created on mount, fed messages through [`update`](crate::update::update),
/// dropped on unmount.
#[derive(Debug, Clone)]
pub struct MaskSession {
    pub state: MaskState,
    pub history: MaskHistory,
    pub config: MaskConfig,
}

impl MaskSession {
    pub fn new(config: MaskConfig) -> Self {
        Self {
            state: MaskState::new(),
            history: MaskHistory::with_max_size(config.history_limit),
            config,
        }
    }

    /// Session starting from an existing state (no history)
    pub fn with_state(state: MaskState, config: MaskConfig) -> Self {
        Self {
            state,
            ..Self::new(config)
        }
    }

    /// Masked text as displayed
    pub fn text(&self) -> String {
        self.state.buffer.to_string()
    }

    /// Cursor index
    pub fn cursor(&self) -> usize {
        self.state.cursor.index()
    }
}

impl Default for MaskSession {
    fn default() -> Self {
        Self::new(MaskConfig::default())
    }
}
