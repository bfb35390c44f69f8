//! Edit policy tests - digit entry, delete, separator immutability

mod common;

use common::{all_intents, apply_all, assert_well_formed, digit, intent_strategy, state};
use phone_mask::mask::{is_numeric_candidate, Intent, MaskState};
use proptest::prelude::*;

#[test]
fn test_type_three_digits_then_delete() {
    let s = apply_all(MaskState::new(), &[digit('5'), digit('5'), digit('5')]);
    assert_eq!(s.buffer.to_string(), "555-___-____");
    assert_eq!(s.cursor.index(), 4);

    let s = s.apply(Intent::Delete);
    assert_eq!(s.buffer.to_string(), "555-___-____");
    assert_eq!(s.cursor.index(), 2);
}

#[test]
fn test_type_full_number() {
    let digits: Vec<_> = "5551234567".chars().map(digit).collect();
    let s = apply_all(MaskState::new(), &digits);
    assert_eq!(s.buffer.to_string(), "555-123-4567");
    assert_eq!(s.cursor.index(), 11);
    assert!(s.buffer.is_complete());
}

#[test]
fn test_typing_past_end_overwrites_last_slot() {
    let s = state("555-123-4567", 11).apply(digit('0'));
    assert_eq!(s.buffer.to_string(), "555-123-4560");
    assert_eq!(s.cursor.index(), 11);
}

#[test]
fn test_digit_entry_advances() {
    let s = state("___-___-____", 1).apply(digit('0'));
    assert_eq!((s.buffer.to_string().as_str(), s.cursor.index()), ("_0_-___-____", 2));

    let s = state("55_-___-____", 2).apply(digit('5'));
    assert_eq!((s.buffer.to_string().as_str(), s.cursor.index()), ("555-___-____", 4));
}

#[test]
fn test_delete_retreats() {
    let s = state("555-1__-____", 4).apply(Intent::Delete);
    assert_eq!(s.buffer.to_string(), "555-___-____");
    assert_eq!(s.cursor.index(), 2);
}

#[test]
fn test_delete_all_backwards() {
    let mut s = state("555-123-4567", 11);
    for _ in 0..10 {
        s = s.apply(Intent::Delete);
    }
    assert_eq!(s.buffer.to_string(), "___-___-____");
    assert_eq!(s.cursor.index(), 0);
}

#[test]
fn test_navigation_never_edits() {
    let start = state("5_5-1_3-4__7", 5);
    let moves = all_intents()
        .into_iter()
        .filter(|intent| !matches!(intent, Intent::EnterDigit(_) | Intent::Delete));
    for intent in moves {
        assert_eq!(start.apply(intent).buffer, start.buffer);
    }
}

#[test]
fn test_rejected_candidate_leaves_state_alone() {
    let s = state("555-___-____", 4);
    assert!(!is_numeric_candidate("12a-345"));
    // The host drops the input, so nothing is applied
    assert_eq!(s, state("555-___-____", 4));
}

proptest! {
    #[test]
    fn test_separators_survive_long_random_sequences(
        intents in prop::collection::vec(intent_strategy(), 0..500)
    ) {
        let mut s = MaskState::new();
        for intent in intents {
            s = s.apply(intent);
            assert_well_formed(&s);
        }
    }

    #[test]
    fn test_random_sequences_from_filled_buffer(
        intents in prop::collection::vec(intent_strategy(), 0..100),
        cursor in prop::sample::select(vec![0usize, 2, 4, 6, 8, 11])
    ) {
        let mut s = state("5_5-1_3-4__7", cursor);
        for intent in intents {
            s = s.apply(intent);
            assert_well_formed(&s);
        }
    }
}
