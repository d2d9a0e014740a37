//! Window shell: winit lifecycle and event dispatch around `OverlayShell`.

mod app;
mod events;

pub use app::{run, run_with, OverlayApp};
