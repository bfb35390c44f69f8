//! Undo/redo stacks of whole-state snapshots.
//!
//! The state is a small `Copy` value, so snapshots are stored directly
//! instead of as reversible operations.

use std::collections::VecDeque;

use super::state::MaskState;

/// Default number of undo steps kept
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct MaskHistory {
    undo_stack: VecDeque<MaskState>,
    redo_stack: Vec<MaskState>,
    max_size: usize,
}

impl MaskHistory {
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Record the state an edit is about to replace (clears redo)
    pub fn record(&mut self, before: MaskState) {
        self.redo_stack.clear();
        self.undo_stack.push_back(before);

        while self.undo_stack.len() > self.max_size {
            self.undo_stack.pop_front();
        }
    }

    /// Step back from `current`, returning the state to restore
    pub fn undo(&mut self, current: MaskState) -> Option<MaskState> {
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward from `current`, returning the state to restore
    pub fn redo(&mut self, current: MaskState) -> Option<MaskState> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push_back(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

impl Default for MaskHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(masked: &str, cursor: usize) -> MaskState {
        MaskState::parse(masked, cursor).unwrap()
    }

    #[test]
    fn test_undo_redo_roundtrip() {
        let mut history = MaskHistory::new();
        let a = state("___-___-____", 0);
        let b = state("5__-___-____", 1);
        let c = state("55_-___-____", 2);

        history.record(a);
        history.record(b);
        assert!(history.can_undo());
        assert!(!history.can_redo());

        assert_eq!(history.undo(c), Some(b));
        assert_eq!(history.undo(b), Some(a));
        assert_eq!(history.undo(a), None);
        assert!(!history.can_undo());

        assert_eq!(history.redo(a), Some(b));
        assert_eq!(history.redo(b), Some(c));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = MaskHistory::new();
        let a = state("___-___-____", 0);
        let b = state("5__-___-____", 1);

        history.record(a);
        history.undo(b);
        assert!(history.can_redo());

        history.record(a);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_size() {
        let mut history = MaskHistory::with_max_size(3);
        for index in [0, 1, 2, 4, 5] {
            history.record(state("___-___-____", index));
        }
        let mut current = MaskState::new();
        let mut restored = Vec::new();
        while let Some(previous) = history.undo(current) {
            restored.push(previous.cursor.index());
            current = previous;
        }
        assert_eq!(restored, vec![5, 4, 2]);
    }
}
