//! Focus tracking for the overlay window.

use overlay_core::{FocusSource, ForegroundWindow};

/// Derives the foreground window from winit focus events.
///
/// Winit only reports our own window's focus; a companion (the game) has
/// to be reported by whoever embeds the overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowFocus {
    /// `None` until the first focus event.
    overlay: Option<bool>,
    companion: bool,
}

impl WindowFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_overlay_focused(&mut self, focused: bool) {
        self.overlay = Some(focused);
    }

    pub fn set_companion_focused(&mut self, focused: bool) {
        self.companion = focused;
    }
}

impl FocusSource for WindowFocus {
    fn foreground(&self) -> ForegroundWindow {
        match (self.overlay, self.companion) {
            (Some(true), _) => ForegroundWindow::Overlay,
            (_, true) => ForegroundWindow::Companion,
            (None, false) => ForegroundWindow::Nothing,
            (Some(false), false) => ForegroundWindow::Foreign,
        }
    }
}
