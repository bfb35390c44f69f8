//! Command-line argument parsing for the replay host
//!
//! Supports:
//! - Events as positional tokens or from a script file
//! - Explicit config and keymap paths
//! - Writing a default config
//! - Frame-by-frame, final-frame-only, or JSON output

use clap::Parser;
use std::path::PathBuf;

/// Replay host events against a masked `___-___-____` phone field
#[derive(Parser, Debug)]
#[command(name = "phone-mask", version, about = "Replay host events against a masked phone field")]
pub struct CliArgs {
    /// Event tokens: a digit or key (`5`, `left`, `ctrl+z`), `click:N`, `select:S..E` or `paste:TEXT`
    ///
    /// Put `--` before tokens that start with a hyphen.
    #[arg(value_name = "EVENTS")]
    pub events: Vec<String>,

    /// Read event tokens from a file (whitespace separated, `#` comments)
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Config file to use instead of ~/.config/phone-mask/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keymap file merged over the built-in bindings
    #[arg(long, value_name = "PATH")]
    pub keymap: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the final frame
    #[arg(short, long)]
    pub quiet: bool,
}

/// Where event tokens come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    Args(Vec<String>),
    Script(PathBuf),
}

/// How the run is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One line per event
    Frames,
    /// Final frame only
    Quiet,
    /// Final state as JSON
    Json,
}

/// What to do, derived from CLI arguments
#[derive(Debug, Clone)]
pub enum StartupMode {
    /// Write the default config and exit
    InitConfig,
    /// Replay events
    Replay(EventSource),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: StartupMode,
    pub config_path: Option<PathBuf>,
    pub keymap_path: Option<PathBuf>,
    pub output: OutputMode,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let mode = if self.init_config {
            StartupMode::InitConfig
        } else {
            match self.script {
                Some(_) if !self.events.is_empty() => {
                    return Err("Cannot combine --script with event arguments".to_string());
                }
                Some(path) => StartupMode::Replay(EventSource::Script(path)),
                None => StartupMode::Replay(EventSource::Args(self.events)),
            }
        };

        // JSON wins over quiet; both suppress per-event frames
        let output = if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Frames
        };

        Ok(StartupConfig {
            mode,
            config_path: self.config,
            keymap_path: self.keymap,
            output,
        })
    }
}
