//! Overlay Bridge library target.
//!
//! The winit/wgpu host for `overlay-core`: a transparent always-on-top
//! window, the egui backend behind `ImmediateUi`, and the bundled sample
//! mod. The binary entry point is in `main.rs`; the library exists so
//! `tests/*.rs` can reach the backend.

pub mod focus;
pub mod gfx;
pub mod gui;
pub mod input;
pub mod keyboard;
pub mod passthrough;
pub mod stats;
pub mod util;

mod shell;

pub use shell::{run, run_with, OverlayApp};
