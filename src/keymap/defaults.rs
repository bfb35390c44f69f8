//! Default keybindings for the phone field
//!
//! The embedded `keymap.yaml` is the source of truth; the hardcoded table
//! below is the fallback if it ever fails to parse.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// Bindings from the embedded keymap, or the hardcoded table on failure
pub fn embedded_bindings() -> Vec<Keybinding> {
    match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::debug!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    }
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User config at ~/.config/phone-mask/keymap.yaml
///
/// A broken user keymap is logged and skipped.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let bindings = embedded_bindings();

    let Some(user_path) = crate::config_paths::keymap_file() else {
        return bindings;
    };
    if !user_path.exists() {
        return bindings;
    }

    match load_keymap_file(&user_path) {
        Ok(user_bindings) => {
            tracing::info!(
                "Merging user keymap from {} ({} bindings)",
                user_path.display(),
                user_bindings.len()
            );
            merge_bindings(bindings, user_bindings)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load user keymap from {}: {}",
                user_path.display(),
                e
            );
            bindings
        }
    }
}

/// Embedded defaults merged with an explicitly requested keymap file
///
/// Unlike [`load_default_keymap`], errors in the file are returned.
pub fn load_keymap_with(path: &Path) -> Result<Vec<Keybinding>, super::KeymapError> {
    let user_bindings = load_keymap_file(path)?;
    tracing::info!(
        "Merging keymap from {} ({} bindings)",
        path.display(),
        user_bindings.len()
    );
    Ok(merge_bindings(embedded_bindings(), user_bindings))
}

/// Merge user bindings into base bindings
///
/// - If user binding has the same keystroke → replaces base
/// - If user binding command is `Unbound` → removes matching base bindings
/// - Otherwise → user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded default keybindings for the current platform
///
/// Uses Cmd on macOS, Ctrl on Windows/Linux for the "command" modifier.
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;
    let ctrl = Modifiers::CTRL;
    let none = Modifiers::NONE;

    let mut bindings = vec![
        // Cursor movement
        bind(KeyCode::Left, none, Command::StepLeft),
        bind(KeyCode::Right, none, Command::StepRight),
        bind(KeyCode::Home, none, Command::MoveHome),
        bind(KeyCode::End, none, Command::MoveEnd),
        bind(KeyCode::Left, ctrl, Command::PrevGroup),
        bind(KeyCode::Right, ctrl, Command::NextGroup),
        // Editing
        bind(KeyCode::Backspace, none, Command::DeleteBackward),
        bind(KeyCode::Delete, none, Command::DeleteForward),
        bind(KeyCode::Escape, none, Command::Clear),
        // Undo/Redo
        bind(KeyCode::Char('z'), cmd, Command::Undo),
        bind(KeyCode::Char('z'), cmd_shift, Command::Redo),
        bind(KeyCode::Char('y'), cmd, Command::Redo),
    ];

    if cfg!(target_os = "macos") {
        let meta = Modifiers::META;
        let alt = Modifiers::ALT;
        bindings.extend([
            bind(KeyCode::Left, meta, Command::MoveHome),
            bind(KeyCode::Right, meta, Command::MoveEnd),
            bind(KeyCode::Left, alt, Command::PrevGroup),
            bind(KeyCode::Right, alt, Command::NextGroup),
        ]);
    }

    bindings
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
