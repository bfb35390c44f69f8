//! Benchmarks for the per-keystroke transition paths
//!
//! Run with: cargo bench transitions

use phone_mask::mask::{reformat, Digit, Intent, MaskState};
use phone_mask::messages::MaskMsg;
use phone_mask::update::update;
use phone_mask::MaskSession;

fn main() {
    divan::main();
}

fn five() -> Intent {
    Intent::EnterDigit(Digit::from_value(5).unwrap())
}

#[divan::bench(args = [100, 1000])]
fn apply_step_right(iterations: usize) {
    let mut state = MaskState::new();
    for _ in 0..iterations {
        state = divan::black_box(state).apply(Intent::StepRight);
        if state.cursor.index() == 11 {
            state = MaskState::new();
        }
    }
    divan::black_box(state);
}

#[divan::bench(args = [100, 1000])]
fn apply_type_and_delete(iterations: usize) {
    let mut state = MaskState::new();
    for i in 0..iterations {
        let intent = if i % 13 < 10 { five() } else { Intent::Delete };
        state = divan::black_box(state).apply(intent);
    }
    divan::black_box(state);
}

#[divan::bench(args = ["5551234567", "555-123-4567", "5 5_5-12-4567890"])]
fn reformat_text(raw: &str) {
    divan::black_box(reformat(divan::black_box(raw)).ok());
}

#[divan::bench(args = [100, 500])]
fn update_insert_digit(iterations: usize) {
    let mut session = MaskSession::default();
    for _ in 0..iterations {
        let cmd = update(&mut session, MaskMsg::Intent(five()));
        divan::black_box(cmd);
    }
    divan::black_box(&session);
}

#[divan::bench]
fn update_undo_redo_cycle() {
    let mut session = MaskSession::default();
    for _ in 0..10 {
        update(&mut session, MaskMsg::Intent(five()));
    }
    for _ in 0..10 {
        let cmd = update(&mut session, MaskMsg::Undo);
        divan::black_box(cmd);
    }
    for _ in 0..10 {
        let cmd = update(&mut session, MaskMsg::Redo);
        divan::black_box(cmd);
    }
    divan::black_box(&session);
}
