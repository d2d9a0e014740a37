//! Click-through and focus for the overlay window.
//!
//! The window takes pointer input only while the shell panel or the console
//! is up. When the hotkey opens either of them the window is made hittable
//! and focused right away, even if another application holds focus: that
//! frame is gated, and waiting for an ungated frame would never end.

/// What a frame showed, as far as window input is concerned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameView {
    pub gated: bool,
    pub shell_visible: bool,
    pub console_visible: bool,
    pub hotkey_fired: bool,
}

/// Window changes to apply after a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowUpdate {
    /// New cursor hittest state, only when it changes.
    pub hittest: Option<bool>,
    pub focus: bool,
}

#[derive(Debug, Default)]
pub struct Passthrough {
    applied: Option<bool>,
    /// Opened by the hotkey while gated; stays hittable until focus arrives.
    activating: bool,
}

impl Passthrough {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, view: FrameView) -> WindowUpdate {
        let shown = view.shell_visible || view.console_visible;
        if view.hotkey_fired && shown && view.gated {
            self.activating = true;
        }
        if !view.gated || !shown {
            self.activating = false;
        }

        let interactive = shown && (!view.gated || self.activating);
        let hittest = (self.applied != Some(interactive)).then_some(interactive);
        if hittest.is_some() {
            self.applied = Some(interactive);
            tracing::debug!(interactive, "overlay input mode");
        }

        WindowUpdate {
            hittest,
            focus: view.hotkey_fired && interactive,
        }
    }

    /// Whether the window currently takes pointer input.
    pub fn is_interactive(&self) -> bool {
        self.applied == Some(true)
    }
}
