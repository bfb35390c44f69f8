//! Update function for the Elm-style architecture
//!
//! All session state transformations flow through [`update`].

use crate::commands::Cmd;
use crate::mask::MaskState;
use crate::messages::MaskMsg;
use crate::model::MaskSession;

#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main update function
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(session: &mut MaskSession, msg: MaskMsg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(session, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(session, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(session: &mut MaskSession, msg: MaskMsg) -> Option<Cmd> {
    let before = session.state;

    match msg {
        MaskMsg::Intent(intent) => {
            let after = before.apply(intent);
            if after == before {
                return None;
            }
            if after.buffer != before.buffer {
                session.history.record(before);
            }
            session.state = after;
            Some(Cmd::Redraw)
        }

        MaskMsg::Paste(text) => {
            match MaskState::from_text(&text, session.config.overflow) {
                Ok(after) => {
                    if after == before {
                        return None;
                    }
                    session.history.record(before);
                    session.state = after;
                    Some(Cmd::Redraw)
                }
                Err(e) => {
                    tracing::debug!(target: "intent", error = %e, "paste rejected");
                    Some(Cmd::Bell)
                }
            }
        }

        MaskMsg::Clear => {
            let after = MaskState::new();
            if after == before {
                return None;
            }
            session.history.record(before);
            session.state = after;
            Some(Cmd::Redraw)
        }

        MaskMsg::Undo => {
            let previous = session.history.undo(before)?;
            session.state = previous;
            Some(Cmd::Redraw)
        }

        MaskMsg::Redo => {
            let next = session.history.redo(before)?;
            session.state = next;
            Some(Cmd::Redraw)
        }
    }
}

/// Update with a debug span, a before/after diff and an invariant check
#[cfg(debug_assertions)]
fn update_traced(session: &mut MaskSession, msg: MaskMsg) -> Option<Cmd> {
    let msg_name = msg.name();
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = session.state;
    debug!(target: "intent", msg = ?msg, "processing");

    let result = update_inner(session, msg);

    if let Some(diff) = crate::tracing::describe_transition(&before, &session.state) {
        debug!(target: "cursor", %diff, "state changed");
    }

    session.state.assert_invariants();

    result
}
