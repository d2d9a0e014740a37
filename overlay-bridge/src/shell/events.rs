//! Winit window event handling.
//!
//! Input goes to egui-winit. Lifecycle, focus and the shell hotkey level
//! are handled here.

use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;

use super::app::OverlayApp;
use crate::keyboard::map_physical_key;

pub fn handle_window_event(app: &mut OverlayApp, event_loop: &ActiveEventLoop, event: WindowEvent) {
    if let (Some(window), Some(input)) = (&app.window, &mut app.egui_input) {
        let response = input.on_window_event(window, &event);
        if response.repaint {
            window.request_redraw();
        }
    }

    match event {
        // ── Window lifecycle ──────────────────────────────────────
        WindowEvent::CloseRequested => {
            tracing::info!("window close requested");
            event_loop.exit();
        }

        WindowEvent::Resized(new_size) => {
            if let Some(gpu) = &mut app.gpu {
                gpu.resize(new_size);
            }
            app.request_redraw();
        }

        WindowEvent::Focused(focused) => {
            app.focus.set_overlay_focused(focused);
        }

        // ── Shell hotkey (focused path) ──────────────────────────
        WindowEvent::KeyboardInput { event, .. } => {
            if map_physical_key(event.physical_key) == Some(app.config.hotkeys.shell_toggle) {
                app.shell_key_down = event.state == ElementState::Pressed;
            }
        }

        // ── Redraw ───────────────────────────────────────────────
        WindowEvent::RedrawRequested => app.redraw(),

        _ => {}
    }
}
