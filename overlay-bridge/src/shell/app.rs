//! Application state and the winit event loop.
//!
//! One transparent, undecorated window covers the area the overlay draws
//! in. While neither the shell panel nor the console is up the window lets
//! every click through to whatever is underneath; the global shell hotkey is
//! read from raw device events so it works without window focus. Window
//! events go to egui-winit, and each frame is one `egui::Context::run`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, DeviceEvents, EventLoop};
use winit::window::{Window, WindowId, WindowLevel};

use overlay_core::hotkey::HotkeyDebounce;
use overlay_core::{FrameOutcome, ModRegistry, OverlayConfig, OverlayShell};

use crate::focus::WindowFocus;
use crate::gfx::GpuState;
use crate::gui;
use crate::input::DeferredInput;
use crate::keyboard::map_physical_key;
use crate::passthrough::{FrameView, Passthrough};
use crate::stats::FrameStatsMod;

// ════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════

pub struct OverlayApp {
    pub(super) config: OverlayConfig,

    // ── Window + GPU ──
    pub(super) window: Option<Arc<Window>>,
    pub(super) gpu: Option<GpuState>,

    // ── Overlay ──
    pub(super) shell: OverlayShell,
    pub(super) focus: WindowFocus,

    // ── egui ──
    pub(super) egui: egui::Context,
    pub(super) egui_input: Option<egui_winit::State>,
    deferred: DeferredInput,

    // ── Global hotkey ──
    pub(super) shell_key: HotkeyDebounce,
    pub(super) shell_key_down: bool,

    passthrough: Passthrough,
}

impl OverlayApp {
    pub fn new(config: OverlayConfig, registry: ModRegistry) -> Self {
        let shell = OverlayShell::new(&config, registry);
        let shell_key = HotkeyDebounce::new(Duration::from_millis(config.hotkeys.debounce_ms));
        let egui = egui::Context::default();
        gui::configure(&egui, &config.font);
        Self {
            config,
            window: None,
            gpu: None,
            shell,
            focus: WindowFocus::new(),
            egui,
            egui_input: None,
            deferred: DeferredInput::new(),
            shell_key,
            shell_key_down: false,
            passthrough: Passthrough::new(),
        }
    }

    pub fn shell(&self) -> &OverlayShell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut OverlayShell {
        &mut self.shell
    }

    pub fn focus_mut(&mut self) -> &mut WindowFocus {
        &mut self.focus
    }

    pub fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let win = &self.config.window;
        let level = if win.always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        let attrs = Window::default_attributes()
            .with_title(self.config.shell.title.clone())
            .with_inner_size(PhysicalSize::new(win.width, win.height))
            .with_transparent(true)
            .with_decorations(false)
            .with_window_level(level);

        let window = Arc::new(event_loop.create_window(attrs)?);
        let gpu = GpuState::new(window.clone())?;
        let scale = window.scale_factor() as f32;
        let input = egui_winit::State::new(
            self.egui.clone(),
            egui::ViewportId::ROOT,
            &*window,
            Some(scale),
            window.theme(),
            Some(gpu.max_texture_side()),
        );

        self.egui_input = Some(input);
        self.gpu = Some(gpu);
        self.window = Some(window);
        tracing::info!(scale, "overlay window ready");
        Ok(())
    }

    /// Build, paint and present one frame.
    pub(super) fn redraw(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let (Some(gpu), Some(input)) = (self.gpu.as_mut(), self.egui_input.as_mut()) else {
            return;
        };

        let fired = self.shell_key.poll(self.shell_key_down, Instant::now());

        let mut raw = input.take_egui_input(&window);
        self.deferred.prepare(&mut raw.events);

        let shell = &mut self.shell;
        let focus = &self.focus;
        let mut pending_toggle = fired;
        let mut outcome = FrameOutcome::default();
        let full = self.egui.run(raw, |ctx| {
            outcome = gui::show_overlay(ctx, |ui| {
                shell.render_frame(ui, focus, std::mem::take(&mut pending_toggle))
            });
        });

        input.handle_platform_output(&window, full.platform_output);
        let primitives = self.egui.tessellate(full.shapes, full.pixels_per_point);
        if let Err(e) = gpu.paint(&primitives, &full.textures_delta, full.pixels_per_point) {
            tracing::error!("render failed: {e:#}");
        }

        self.apply_window_state(&window, fired, &outcome);
        if self.deferred.has_pending() {
            window.request_redraw();
        }
    }

    /// Click-through and focus follow what the frame showed.
    fn apply_window_state(&mut self, window: &Window, fired: bool, outcome: &FrameOutcome) {
        let update = self.passthrough.update(FrameView {
            gated: outcome.gated,
            shell_visible: self.shell.is_visible(),
            console_visible: self.shell.console().is_visible(),
            hotkey_fired: fired,
        });
        if let Some(hittest) = update.hittest {
            if let Err(e) = window.set_cursor_hittest(hittest) {
                tracing::debug!("cursor hittest unsupported: {e}");
            }
        }
        if update.focus {
            window.focus_window();
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// ApplicationHandler (winit 0.30)
// ════════════════════════════════════════════════════════════════════

impl ApplicationHandler for OverlayApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        event_loop.listen_device_events(DeviceEvents::Always);

        if let Err(e) = self.create_window(event_loop) {
            tracing::error!("window/GPU init failed: {e:#}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        super::events::handle_window_event(self, event_loop, event);
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::Key(raw) = event {
            if map_physical_key(raw.physical_key) == Some(self.config.hotkeys.shell_toggle) {
                self.shell_key_down = raw.state.is_pressed();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        // Mods animate, so draw continuously; vsync paces the loop.
        self.request_redraw();
    }
}

// ════════════════════════════════════════════════════════════════════
// Entry Points
// ════════════════════════════════════════════════════════════════════

/// Run the overlay with the bundled mods.
pub fn run(config: OverlayConfig) -> anyhow::Result<()> {
    let registry = ModRegistry::new();
    registry.push(Box::new(FrameStatsMod::new()));
    run_with(config, registry)
}

/// Run the overlay over `registry`. Keep a clone to load or unload mods
/// from other threads while it runs.
pub fn run_with(config: OverlayConfig, registry: ModRegistry) -> anyhow::Result<()> {
    tracing::info!("overlay v{} starting", env!("CARGO_PKG_VERSION"));

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = OverlayApp::new(config, registry);
    event_loop.run_app(&mut app)?;
    Ok(())
}
