//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use phone_mask::mask::{Digit, Intent, MaskState, SEPARATOR, SEPARATOR_POSITIONS};
use proptest::prelude::*;
use phone_mask::{MaskConfig, MaskSession};

/// State from a masked string and cursor index
pub fn state(masked: &str, cursor: usize) -> MaskState {
    MaskState::parse(masked, cursor).unwrap()
}

/// Session starting from a masked string and cursor index
pub fn session(masked: &str, cursor: usize) -> MaskSession {
    MaskSession::with_state(state(masked, cursor), MaskConfig::default())
}

/// `EnterDigit` for `ch`
pub fn digit(ch: char) -> Intent {
    Intent::EnterDigit(Digit::new(ch).unwrap())
}

/// Apply intents in order
pub fn apply_all(start: MaskState, intents: &[Intent]) -> MaskState {
    intents.iter().fold(start, |s, intent| s.apply(*intent))
}

/// Every intent worth checking: clicks on and past every index, both steps,
/// delete and every digit
pub fn all_intents() -> Vec<Intent> {
    let mut intents: Vec<Intent> = (0..=14).map(Intent::MoveTo).collect();
    intents.push(Intent::MoveTo(usize::MAX));
    intents.extend([Intent::StepLeft, Intent::StepRight, Intent::Delete]);
    intents.extend((0..10).map(|v| Intent::EnterDigit(Digit::from_value(v).unwrap())));
    intents
}

/// Any single intent, including clicks past the end of the field
pub fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![
        (0usize..16).prop_map(Intent::MoveTo),
        Just(Intent::MoveTo(usize::MAX)),
        Just(Intent::StepLeft),
        Just(Intent::StepRight),
        Just(Intent::Delete),
        (0u8..10).prop_filter_map("digit value", |v| Digit::from_value(v).map(Intent::EnterDigit)),
    ]
}

/// Buffers in a few fill levels
pub fn sample_buffers() -> Vec<&'static str> {
    vec!["___-___-____", "555-___-____", "5_5-1_3-4__7", "555-123-4567"]
}

/// Assert the layout invariants hold
pub fn assert_well_formed(s: &MaskState) {
    let text = s.buffer.to_string();
    assert_eq!(text.chars().count(), 12, "wrong length: {text}");
    for index in SEPARATOR_POSITIONS {
        assert_eq!(
            text.chars().nth(index),
            Some(SEPARATOR),
            "separator {index} lost in {text}"
        );
    }
    let cursor = s.cursor.index();
    assert!(cursor <= 11, "cursor {cursor} out of range");
    assert!(
        !SEPARATOR_POSITIONS.contains(&cursor),
        "cursor {cursor} on a separator"
    );
}
