//! Debounce for global hotkeys polled as raw key state.

use std::time::{Duration, Instant};

/// Turns a polled "is the key down" level into discrete toggles.
///
/// The first poll that sees the key down fires. While the key stays down it
/// fires again only once `timeout` has passed since the previous fire.
/// Releasing the key re-arms it immediately.
#[derive(Debug, Clone)]
pub struct HotkeyDebounce {
    timeout: Duration,
    last_fire: Option<Instant>,
    held: bool,
}

impl HotkeyDebounce {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            last_fire: None,
            held: false,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Feed the current key state. Returns true when the hotkey fires.
    pub fn poll(&mut self, down: bool, now: Instant) -> bool {
        if !down {
            self.held = false;
            return false;
        }

        let fire = match self.last_fire {
            Some(last) if self.held => now.saturating_duration_since(last) >= self.timeout,
            _ => true,
        };
        self.held = true;
        if fire {
            self.last_fire = Some(now);
        }
        fire
    }
}
