//! Host side of a masked field: raw events in, messages out.
//!
//! A host sees keystrokes, clicks at a character index, selection changes
//! and clipboard pastes. [`translate`] turns each into the
//! message the session should receive, or says the event is ignored or
//! rejected. [`MaskHost`] ties a session and a keymap together.

use std::fmt;

use thiserror::Error;

use crate::commands::Cmd;
use crate::keymap::{parse_key_string, KeymapError, Keymap, Keystroke};
use crate::mask::{Digit, Intent, MaskState};
use crate::messages::MaskMsg;
use crate::model::MaskSession;
use crate::update::update;

/// A raw event as delivered by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Key(Keystroke),
    /// Click or selection change at a character index; may be negative
    Click(i64),
    /// Selection change from `start` to `end`; a collapsed range is a caret
    Select(i64, i64),
    Paste(String),
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostEvent::Key(keystroke) => write!(f, "{}", keystroke),
            HostEvent::Click(index) => write!(f, "click:{}", index),
            HostEvent::Select(start, end) => write!(f, "select:{}..{}", start, end),
            HostEvent::Paste(text) => write!(f, "paste:{}", text),
        }
    }
}

#[derive(Debug, Error)]
pub enum EventParseError {
    #[error("invalid click position {0:?}")]
    InvalidClick(String),

    #[error("invalid selection {0:?}, expected START..END")]
    InvalidSelect(String),

    #[error("invalid keystroke {token:?}: {source}")]
    Key {
        token: String,
        #[source]
        source: KeymapError,
    },
}

/// Parse one event token: `click:N`, `select:S..E`, `paste:TEXT`, or a
/// keystroke like `ctrl+z`
pub fn parse_event(token: &str) -> Result<HostEvent, EventParseError> {
    if let Some(index) = token.strip_prefix("click:") {
        return index
            .parse()
            .map(HostEvent::Click)
            .map_err(|_| EventParseError::InvalidClick(index.to_string()));
    }
    if let Some(range) = token.strip_prefix("select:") {
        return parse_range(range)
            .map(|(start, end)| HostEvent::Select(start, end))
            .ok_or_else(|| EventParseError::InvalidSelect(range.to_string()));
    }
    if let Some(text) = token.strip_prefix("paste:") {
        return Ok(HostEvent::Paste(text.to_string()));
    }
    parse_key_string(token)
        .map(HostEvent::Key)
        .map_err(|source| EventParseError::Key {
            token: token.to_string(),
            source,
        })
}

fn parse_range(range: &str) -> Option<(i64, i64)> {
    let (start, end) = range.split_once("..")?;
    Some((start.parse().ok()?, end.parse().ok()?))
}

/// Parse a script of whitespace-separated event tokens; `#` starts a comment
pub fn parse_script(script: &str) -> Result<Vec<HostEvent>, EventParseError> {
    script
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(str::split_whitespace)
        .map(parse_event)
        .collect()
}

/// What the host should do with an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Send this message to the session
    Msg(MaskMsg),
    /// Nothing to do (unbound key, jump to where the cursor already is,
    /// a non-empty selection)
    Ignore,
    /// Refuse the input and signal it
    Reject,
}

/// Translate a raw event against the current state
pub fn translate(event: &HostEvent, keymap: &Keymap, state: &MaskState) -> Dispatch {
    match event {
        HostEvent::Key(keystroke) => translate_key(keystroke, keymap, state),
        HostEvent::Click(index) => Dispatch::Msg(Intent::MoveTo(clamp_index(*index)).into()),
        // The mask has no range editing; only a caret moves the cursor
        HostEvent::Select(start, end) if start == end => {
            Dispatch::Msg(Intent::MoveTo(clamp_index(*start)).into())
        }
        HostEvent::Select(..) => Dispatch::Ignore,
        HostEvent::Paste(text) => Dispatch::Msg(MaskMsg::Paste(text.clone())),
    }
}

/// Negative positions clamp to the first slot
fn clamp_index(index: i64) -> usize {
    usize::try_from(index.max(0)).unwrap_or(usize::MAX)
}

fn translate_key(keystroke: &Keystroke, keymap: &Keymap, state: &MaskState) -> Dispatch {
    if let Some(command) = keymap.lookup(keystroke) {
        return command.to_msg(state).map_or(Dispatch::Ignore, Dispatch::Msg);
    }

    match keystroke.typed_char() {
        Some(ch) => match Digit::new(ch) {
            Some(digit) => Dispatch::Msg(Intent::EnterDigit(digit).into()),
            None => Dispatch::Reject,
        },
        None => Dispatch::Ignore,
    }
}

/// A session driven by raw host events
#[derive(Debug, Clone)]
pub struct MaskHost {
    pub session: MaskSession,
    pub keymap: Keymap,
}

impl MaskHost {
    pub fn new(session: MaskSession, keymap: Keymap) -> Self {
        Self { session, keymap }
    }

    pub fn state(&self) -> &MaskState {
        &self.session.state
    }

    /// Handle one raw event
    pub fn handle(&mut self, event: &HostEvent) -> Option<Cmd> {
        match translate(event, &self.keymap, &self.session.state) {
            Dispatch::Msg(msg) => update(&mut self.session, msg),
            Dispatch::Ignore => {
                tracing::trace!(target: "intent", %event, "ignored");
                None
            }
            Dispatch::Reject => {
                tracing::debug!(target: "intent", %event, "rejected");
                Some(Cmd::Bell)
            }
        }
    }
}
