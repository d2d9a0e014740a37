//! Focus gate: the overlay only draws and takes input while the user is
//! looking at it (or at the game's input window).

/// Which window currently has input focus, as far as the overlay can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForegroundWindow {
    /// No foreground window, or it cannot be determined.
    Nothing,
    /// The overlay's own window.
    Overlay,
    /// The designated companion input window (usually the game).
    Companion,
    /// Anything else.
    Foreign,
}

impl ForegroundWindow {
    pub fn passes_gate(self) -> bool {
        !matches!(self, ForegroundWindow::Foreign)
    }
}

/// Answers "who has focus" once per frame.
pub trait FocusSource {
    fn foreground(&self) -> ForegroundWindow;
}

impl FocusSource for ForegroundWindow {
    fn foreground(&self) -> ForegroundWindow {
        *self
    }
}
