//! Host scenarios - raw key, click and paste events through keymap and session

mod common;

use phone_mask::host::{parse_event, parse_script, HostEvent, MaskHost};
use phone_mask::keymap::{embedded_bindings, merge_bindings, parse_keymap_yaml, Keymap};
use phone_mask::view::{render, Frame};
use phone_mask::{Cmd, MaskSession};

fn host() -> MaskHost {
    MaskHost::new(MaskSession::default(), Keymap::with_bindings(embedded_bindings()))
}

fn replay(host: &mut MaskHost, script: &str) -> Vec<Option<Cmd>> {
    parse_script(script)
        .unwrap()
        .iter()
        .map(|event| host.handle(event))
        .collect()
}

#[test]
fn test_type_and_backspace_frames() {
    let mut host = host();
    replay(&mut host, "5 5 5");
    assert_eq!(render(host.state()), "555-[_]__-____");

    replay(&mut host, "backspace");
    assert_eq!(render(host.state()), "55[5]-___-____");
}

#[test]
fn test_fix_a_digit_in_the_middle() {
    let mut host = host();
    replay(&mut host, "paste:5551234567 click:5 9");
    assert_eq!(host.session.text(), "555-193-4567");
    assert_eq!(host.session.cursor(), 6);
}

#[test]
fn test_click_on_separator() {
    let mut host = host();
    replay(&mut host, "click:7");
    assert_eq!(host.session.cursor(), 8);
    replay(&mut host, "click:3");
    assert_eq!(host.session.cursor(), 4);
}

#[test]
fn test_reclick_steps_back() {
    let mut host = host();
    replay(&mut host, "click:6 click:6");
    assert_eq!(host.session.cursor(), 5);
}

#[test]
fn test_collapsed_selection_moves_cursor() {
    let mut host = host();
    replay(&mut host, "paste:5551234567");
    assert_eq!(replay(&mut host, "select:6..6"), vec![Some(Cmd::Redraw)]);
    assert_eq!(host.session.cursor(), 6);

    replay(&mut host, "select:-3..-3");
    assert_eq!(host.session.cursor(), 0);
}

#[test]
fn test_range_selection_is_ignored() {
    let mut host = host();
    replay(&mut host, "paste:5551234567 click:5");
    let before = *host.state();
    assert_eq!(replay(&mut host, "select:2..9 select:-1..4"), vec![None, None]);
    assert_eq!(*host.state(), before);
}

#[test]
fn test_shifted_digit_rings_bell() {
    let mut host = host();
    replay(&mut host, "5");
    let before = *host.state();
    assert_eq!(replay(&mut host, "shift+5"), vec![Some(Cmd::Bell)]);
    assert_eq!(*host.state(), before);
    assert_eq!(host.session.text(), "5__-___-____");
}

#[test]
fn test_rejections_ring_bell_without_change() {
    let mut host = host();
    let results = replay(&mut host, "5 x paste:12a-345 -");
    assert_eq!(
        results,
        vec![Some(Cmd::Redraw), Some(Cmd::Bell), Some(Cmd::Bell), Some(Cmd::Bell)]
    );
    assert_eq!(render(host.state()), "5[_]_-___-____");
}

#[test]
fn test_undo_redo_keys() {
    let mut host = host();
    replay(&mut host, "1 2 3");
    replay(&mut host, "cmd+z cmd+z");
    assert_eq!(host.session.text(), "1__-___-____");
    replay(&mut host, "cmd+shift+z");
    assert_eq!(host.session.text(), "12_-___-____");
}

#[test]
fn test_escape_clears() {
    let mut host = host();
    replay(&mut host, "paste:555 escape");
    assert_eq!(render(host.state()), "[_]__-___-____");
}

#[test]
fn test_user_keymap_rebinds_and_unbinds() {
    let user = parse_keymap_yaml(
        r#"
bindings:
  - key: "escape"
    command: Unbound
  - key: "ctrl+u"
    command: Clear
  - key: "tab"
    command: NextGroup
"#,
    )
    .unwrap();
    let mut host = MaskHost::new(
        MaskSession::default(),
        Keymap::with_bindings(merge_bindings(embedded_bindings(), user)),
    );

    assert_eq!(host.handle(&parse_event("tab").unwrap()), Some(Cmd::Redraw));
    assert_eq!(host.session.cursor(), 4);

    replay(&mut host, "7");
    assert_eq!(host.handle(&parse_event("escape").unwrap()), None);
    assert_eq!(host.session.text(), "___-7__-____");

    replay(&mut host, "ctrl+u");
    assert_eq!(host.session.text(), "___-___-____");
}

#[test]
fn test_final_frame_json() {
    let mut host = host();
    replay(&mut host, "paste:555-123-4567");
    let json = serde_json::to_string(&Frame::from_state(host.state())).unwrap();
    assert!(json.contains(r#""text":"555-123-4567""#));
    assert!(json.contains(r#""complete":true"#));
}

#[test]
fn test_event_labels() {
    let events = parse_script("click:-4 paste:1_2").unwrap();
    assert_eq!(events[0], HostEvent::Click(-4));
    assert_eq!(events[1].to_string(), "paste:1_2");
}
