//! # Overlay Core
//!
//! Everything the developer overlay does that does not touch a window or a
//! GPU: the console (command table, history, bounded input line), the mod
//! registry, the per-frame shell, hotkey debouncing, the focus gate and
//! configuration. Drawing goes through the [`ui::ImmediateUi`] trait.

pub mod builtins;
pub mod config;
pub mod console;
pub mod error;
pub mod focus;
pub mod hotkey;
pub mod mods;
pub mod shell;
pub mod ui;

pub use config::OverlayConfig;
pub use console::Console;
pub use error::OverlayError;
pub use focus::{FocusSource, ForegroundWindow};
pub use mods::{GuiMod, Mod, ModRegistry};
pub use shell::{FrameOutcome, OverlayShell};
pub use ui::ImmediateUi;
