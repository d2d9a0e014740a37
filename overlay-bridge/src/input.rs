//! Frame input carry-over.
//!
//! A single-line text field stops reading its frame's events at Enter, so
//! anything typed after Enter in the same frame would be lost. Those events
//! are held back and replayed at the start of the next frame instead.

use egui::{Event, Key};

/// Splits `events` after the first Enter press. `events` keeps everything up
/// to and including it; the rest is returned for the next frame.
pub fn split_after_enter(events: &mut Vec<Event>) -> Vec<Event> {
    let enter = events.iter().position(|e| {
        matches!(
            e,
            Event::Key {
                key: Key::Enter,
                pressed: true,
                ..
            }
        )
    });
    match enter {
        Some(i) => events.split_off(i + 1),
        None => Vec::new(),
    }
}

/// Held-back events, replayed in order before whatever the platform reports.
#[derive(Debug, Default)]
pub struct DeferredInput {
    pending: Vec<Event>,
}

impl DeferredInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend last frame's leftovers to `events`, then hold back anything
    /// after this frame's first Enter.
    pub fn prepare(&mut self, events: &mut Vec<Event>) {
        if !self.pending.is_empty() {
            let fresh = std::mem::take(events);
            *events = std::mem::take(&mut self.pending);
            events.extend(fresh);
        }
        self.pending = split_after_enter(events);
        if !self.pending.is_empty() {
            tracing::trace!(deferred = self.pending.len(), "input held for next frame");
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
