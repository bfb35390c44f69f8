//! Tracing setup and state-transition diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=intent=debug,cursor=trace` - scoped filtering
//! - `RUST_LOG=phone_mask::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/phone-mask/logs/phone-mask.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::mask::MaskState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// `quiet` raises the console default to `error`.
pub fn init(quiet: bool) {
    let default_level = if quiet { "error" } else { "warn" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "phone-mask.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A subscriber may already be installed (tests, embedding hosts)
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Describe what changed between two states, or `None` if nothing did
pub fn describe_transition(before: &MaskState, after: &MaskState) -> Option<String> {
    let mut changes = Vec::new();

    if before.cursor != after.cursor {
        changes.push(format!(
            "cursor: {} → {}",
            before.cursor.index(),
            after.cursor.index()
        ));
    }

    let edited: Vec<String> = before
        .buffer
        .to_string()
        .chars()
        .zip(after.buffer.to_string().chars())
        .enumerate()
        .filter(|(_, (old, new))| old != new)
        .map(|(index, (old, new))| format!("[{}] {} → {}", index, old, new))
        .collect();
    if !edited.is_empty() {
        changes.push(edited.join(", "));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join("; "))
    }
}
