//! Overlay shell: per-frame orchestration.
//!
//! Each frame the shell
//!   1. applies the global show/hide hotkey,
//!   2. checks the focus gate (and draws nothing if it fails),
//!   3. draws its own panel (help text, mouse/demo toggles, "Mods UI"),
//!   4. toggles and draws the console and renders every mod under the
//!      registry lock, inside the "Mods UI" section when it is expanded,
//!   5. decides whether to draw a software cursor.

use std::cell::Cell;

use crate::builtins;
use crate::config::{HotkeyConfig, OverlayConfig};
use crate::console::Console;
use crate::focus::FocusSource;
use crate::mods::{ModFrameReport, ModRegistry};
use crate::ui::{ImmediateUi, PanelSpec};

pub const HELP_TEXT: &str = "Press Insert to toggle window";
pub const MODS_SECTION_LABEL: &str = "Mods UI";

/// Result of one `render_frame`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// The focus gate failed; nothing was drawn.
    pub gated: bool,
    /// Whether the software cursor is drawn this frame.
    pub cursor_draw: bool,
    pub mods: ModFrameReport,
}

#[derive(Debug)]
pub struct OverlayShell {
    console: Console,
    registry: ModRegistry,
    hotkeys: HotkeyConfig,
    title: String,
    visible: bool,
    mods_section_open: bool,
    show_mouse: bool,
    show_demo: bool,
}

impl OverlayShell {
    pub fn new(config: &OverlayConfig, registry: ModRegistry) -> Self {
        let mut console = Console::new(&config.console, config.hotkeys.console_detail_toggle);
        builtins::register(&mut console, &registry);

        Self {
            console,
            registry,
            hotkeys: config.hotkeys.clone(),
            title: config.shell.title.clone(),
            visible: config.shell.start_visible,
            mods_section_open: true,
            show_mouse: config.shell.show_mouse,
            show_demo: false,
        }
    }

    // ── State ────────────────────────────────────────────────────────

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
        tracing::debug!(visible = self.visible, "overlay panel toggled");
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True while the shell panel is up and its "Mods UI" section expanded.
    pub fn is_drawing_mods_ui(&self) -> bool {
        self.visible && self.mods_section_open
    }

    pub fn show_mouse(&self) -> bool {
        self.show_mouse
    }

    pub fn set_show_mouse(&mut self, show: bool) {
        self.show_mouse = show;
    }

    pub fn show_demo(&self) -> bool {
        self.show_demo
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }

    pub fn registry(&self) -> &ModRegistry {
        &self.registry
    }

    pub fn hotkeys(&self) -> &HotkeyConfig {
        &self.hotkeys
    }

    // ── Frame ────────────────────────────────────────────────────────

    /// Draw one frame. `shell_hotkey` is the already-debounced global key.
    pub fn render_frame(
        &mut self,
        ui: &mut dyn ImmediateUi,
        focus: &dyn FocusSource,
        shell_hotkey: bool,
    ) -> FrameOutcome {
        if shell_hotkey {
            self.toggle_visible();
        }

        if !focus.foreground().passes_gate() {
            ui.set_mouse_draw_cursor(false);
            return FrameOutcome {
                gated: true,
                ..FrameOutcome::default()
            };
        }

        let Self {
            console,
            registry,
            hotkeys,
            title,
            visible,
            mods_section_open,
            show_mouse,
            show_demo,
        } = self;

        let console_toggle = hotkeys.console_toggle;
        let ran = Cell::new(false);
        let mut mods = ModFrameReport::default();
        let mut body = |ui: &mut dyn ImmediateUi| {
            ran.set(true);
            if ui.is_key_pressed(console_toggle) {
                console.toggle_visible();
            }
            console.render(ui);
            mods = registry.render_all(ui);
        };

        if *visible {
            let spec = PanelSpec::floating(title);
            let shown = ui.panel(&spec, Some(&mut *visible), &mut |ui: &mut dyn ImmediateUi| {
                ui.text(HELP_TEXT);
                ui.row(&mut |ui: &mut dyn ImmediateUi| {
                    ui.checkbox("Show Mouse", show_mouse);
                    ui.checkbox("Demo Window", show_demo);
                });
                if *show_demo {
                    ui.show_demo_panel(show_demo);
                }
                *mods_section_open = ui.tree_node(MODS_SECTION_LABEL, true, &mut body);
                if !*mods_section_open {
                    body(ui);
                }
            });
            if !shown {
                *mods_section_open = false;
            }
        }
        // Collapsed or hidden panel: the console and mods still draw.
        if !ran.get() {
            body(ui);
        }

        let cursor_draw = *visible && *show_mouse && !ui.wants_capture_mouse();
        ui.set_mouse_draw_cursor(cursor_draw);

        FrameOutcome {
            gated: false,
            cursor_draw,
            mods,
        }
    }
}
