//! Phone mask - Elm-style masked input for `___-___-____` phone fields
//!
//! This crate provides the pure cursor/edit engine for a fixed-layout phone
//! field plus a framework-independent host session around it: messages,
//! update loop, undo history, keymap and configuration.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod keymap;
pub mod mask;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::MaskConfig;
pub use mask::{Intent, MaskState};
pub use messages::MaskMsg;
pub use model::MaskSession;
pub use update::update;
