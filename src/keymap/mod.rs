//! Configurable keyboard mapping for the phone field
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to field commands
//! - Supports platform-specific modifier handling (Cmd on macOS, Ctrl elsewhere)
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! host key event → Keystroke → Keymap::lookup() → Command → MaskMsg
//! ```
//!
//! Printable keys that are not bound fall through to the host, which types
//! digits and rejects everything else.

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{
    default_bindings, embedded_bindings, load_default_keymap, load_keymap_with, merge_bindings,
};
pub use keymap::Keymap;
pub use types::{KeyCode, Keystroke, Modifiers};
