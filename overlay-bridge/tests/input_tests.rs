//! Events typed after Enter carry over to the next frame.

use egui::{Event, Key, Modifiers};
use overlay_bridge::input::{split_after_enter, DeferredInput};

fn key(key: Key, pressed: bool) -> Event {
    Event::Key {
        key,
        physical_key: None,
        pressed,
        repeat: false,
        modifiers: Modifiers::NONE,
    }
}

fn text(s: &str) -> Event {
    Event::Text(s.to_string())
}

// ============================================================================
// Splitting
// ============================================================================

#[test]
fn test_no_enter_keeps_everything() {
    let mut events = vec![text("a"), key(Key::ArrowUp, true)];
    assert!(split_after_enter(&mut events).is_empty());
    assert_eq!(events.len(), 2);
}

#[test]
fn test_events_after_enter_are_split_off() {
    let mut events = vec![text("go"), key(Key::Enter, true), text("n"), key(Key::Enter, false)];
    let rest = split_after_enter(&mut events);
    assert_eq!(events, vec![text("go"), key(Key::Enter, true)]);
    assert_eq!(rest, vec![text("n"), key(Key::Enter, false)]);
}

#[test]
fn test_enter_release_does_not_split() {
    let mut events = vec![key(Key::Enter, false), text("x")];
    assert!(split_after_enter(&mut events).is_empty());
    assert_eq!(events.len(), 2);
}

#[test]
fn test_only_first_enter_splits() {
    let mut events = vec![
        key(Key::Enter, true),
        text("a"),
        key(Key::Enter, true),
        text("b"),
    ];
    let rest = split_after_enter(&mut events);
    assert_eq!(events, vec![key(Key::Enter, true)]);
    assert_eq!(rest.len(), 3);
}

// ============================================================================
// Carry-over
// ============================================================================

#[test]
fn test_held_events_replay_before_new_ones() {
    let mut deferred = DeferredInput::new();

    let mut first = vec![text("a"), key(Key::Enter, true), text("b")];
    deferred.prepare(&mut first);
    assert_eq!(first, vec![text("a"), key(Key::Enter, true)]);
    assert!(deferred.has_pending());

    let mut second = vec![text("c")];
    deferred.prepare(&mut second);
    assert_eq!(second, vec![text("b"), text("c")]);
    assert!(!deferred.has_pending());
}

#[test]
fn test_two_lines_in_one_frame_submit_on_consecutive_frames() {
    let mut deferred = DeferredInput::new();

    let mut first = vec![
        text("one"),
        key(Key::Enter, true),
        text("two"),
        key(Key::Enter, true),
    ];
    deferred.prepare(&mut first);
    assert_eq!(first, vec![text("one"), key(Key::Enter, true)]);

    let mut second = Vec::new();
    deferred.prepare(&mut second);
    assert_eq!(second, vec![text("two"), key(Key::Enter, true)]);
    assert!(!deferred.has_pending());
}
