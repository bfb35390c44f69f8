//! `phone-mask`: replay host events against a masked phone field

use anyhow::{bail, Context, Result};
use clap::Parser;

use phone_mask::cli::{CliArgs, EventSource, OutputMode, StartupConfig, StartupMode};
use phone_mask::config::MaskConfig;
use phone_mask::host::{parse_event, parse_script, HostEvent, MaskHost};
use phone_mask::keymap::{load_default_keymap, load_keymap_with, Keymap};
use phone_mask::model::MaskSession;
use phone_mask::view::{render, render_step, Frame};

fn main() -> Result<()> {
    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    phone_mask::tracing::init(startup.output != OutputMode::Frames);

    match &startup.mode {
        StartupMode::InitConfig => init_config(&startup),
        StartupMode::Replay(source) => replay(&startup, source),
    }
}

fn init_config(startup: &StartupConfig) -> Result<()> {
    let config = MaskConfig::default();
    let path = match &startup.config_path {
        Some(path) => {
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            config.save_to(path)?;
            path.clone()
        }
        None => {
            if let Some(path) = phone_mask::config_paths::config_file() {
                if path.exists() {
                    bail!("{} already exists", path.display());
                }
            }
            config.save()?
        }
    };
    println!("Wrote default config to {}", path.display());
    Ok(())
}

fn replay(startup: &StartupConfig, source: &EventSource) -> Result<()> {
    let config = match &startup.config_path {
        Some(path) => MaskConfig::load_from(path)?,
        None => MaskConfig::load(),
    };

    let bindings = match &startup.keymap_path {
        Some(path) => load_keymap_with(path)
            .with_context(|| format!("Failed to load keymap {}", path.display()))?,
        None => load_default_keymap(),
    };

    let events = load_events(source)?;
    tracing::info!(events = events.len(), "replaying");

    let mut host = MaskHost::new(MaskSession::new(config), Keymap::with_bindings(bindings));

    if startup.output == OutputMode::Frames {
        println!("{}", render_step("start", None, host.state()));
    }

    for event in &events {
        let cmd = host.handle(event);
        if startup.output == OutputMode::Frames {
            println!("{}", render_step(&event.to_string(), cmd, host.state()));
        }
    }

    match startup.output {
        OutputMode::Frames => {}
        OutputMode::Quiet => println!("{}", render(host.state())),
        OutputMode::Json => {
            let frame = Frame::from_state(host.state());
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
    }

    Ok(())
}

fn load_events(source: &EventSource) -> Result<Vec<HostEvent>> {
    match source {
        EventSource::Args(tokens) => tokens
            .iter()
            .map(|token| parse_event(token).map_err(anyhow::Error::from))
            .collect(),
        EventSource::Script(path) => {
            let script = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            parse_script(&script)
                .with_context(|| format!("Failed to parse script {}", path.display()))
        }
    }
}
