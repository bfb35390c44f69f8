//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Fast lookup (indices into bindings); the first binding for a keystroke wins
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    pub fn add_binding(&mut self, binding: Keybinding) {
        if binding.command == Command::Unbound {
            return;
        }
        let idx = self.bindings.len();
        self.lookup.entry(binding.keystroke).or_insert(idx);
        self.bindings.push(binding);
    }

    /// Look up the command bound to a keystroke
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup
            .get(keystroke)
            .map(|&idx| self.bindings[idx].command)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::types::KeyCode;

    #[test]
    fn test_first_binding_wins() {
        let stroke = Keystroke::key(KeyCode::Escape);
        let keymap = Keymap::with_bindings(vec![
            Keybinding::new(stroke, Command::Clear),
            Keybinding::new(stroke, Command::Undo),
        ]);
        assert_eq!(keymap.lookup(&stroke), Some(Command::Clear));
    }

    #[test]
    fn test_unbound_is_not_registered() {
        let stroke = Keystroke::key(KeyCode::Escape);
        let keymap = Keymap::with_bindings(vec![Keybinding::new(stroke, Command::Unbound)]);
        assert_eq!(keymap.lookup(&stroke), None);
        assert!(keymap.bindings().is_empty());
    }
}
