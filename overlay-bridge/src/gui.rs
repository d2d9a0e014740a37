//! `ImmediateUi` over egui.
//!
//! Each frame runs inside one egui pass. The overlay's top level is a
//! transparent, non-interactive area covering the screen; panels become
//! `egui::Window`s, scroll regions `ScrollArea`s and the console line a
//! single-line `TextEdit` bound to the core's bounded `TextEdit`.

use std::num::NonZeroUsize;
use std::sync::Arc;

use egui::epaint::Shadow;
use egui::text::{CCursor, CCursorRange};
use egui::{
    Color32, CornerRadius, CursorIcon, FontData, FontDefinitions, FontFamily, Id, LayerId, Margin,
    Order, Pos2, Stroke, TextStyle,
};

use overlay_core::config::FontConfig;
use overlay_core::console::TextEdit;
use overlay_core::ui::{
    Contents, HistoryDirection, ImmediateUi, InputCallback, Key, PanelSpec, Placement, Vec2,
};

/// Title of the backend's own showcase panel.
pub const DEMO_PANEL_TITLE: &str = "egui Settings";

const ROOT_AREA: &str = "overlay-root";
const CURSOR_LAYER: &str = "overlay-cursor";
const PINNED_MARGIN: i8 = 8;
const AUTO_PANEL_WIDTH: f32 = 420.0;

/// Per-frame state the trait methods carry between calls.
#[derive(Debug, Default)]
struct FrameState {
    next_item_width: Option<f32>,
    focus_next: bool,
    draw_cursor: bool,
}

/// One nesting level of the overlay's UI.
pub struct EguiUi<'a> {
    ui: &'a mut egui::Ui,
    frame: &'a mut FrameState,
}

/// Egui id of the text field `input_text` shows under `id`.
pub fn input_field_id(id: &str) -> Id {
    Id::new(("overlay-input", id))
}

/// Applies the overlay's style and fonts to a fresh context.
pub fn configure(ctx: &egui::Context, font: &FontConfig) {
    // One pass per frame, so hotkeys and mods see each frame once.
    ctx.options_mut(|o| o.max_passes = NonZeroUsize::MIN);

    if let Some(resolved) = font.resolve(1.0) {
        match std::fs::read(&resolved.path) {
            Ok(bytes) => {
                let name = "overlay-font".to_string();
                let mut fonts = FontDefinitions::default();
                fonts
                    .font_data
                    .insert(name.clone(), Arc::new(FontData::from_owned(bytes)));
                fonts
                    .families
                    .entry(FontFamily::Proportional)
                    .or_default()
                    .insert(0, name);
                ctx.set_fonts(fonts);
                tracing::info!("custom font {} loaded", resolved.path.display());
            }
            Err(e) => tracing::warn!("failed to read font {}: {e}", resolved.path.display()),
        }
    }

    let size = font.base_size;
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            font_id.size = match text_style {
                TextStyle::Heading => size * 1.25,
                TextStyle::Small => size * 0.75,
                _ => size,
            };
        }
    });
}

/// Runs `draw` against the whole screen, then paints the software cursor if
/// `draw` asked for one.
pub fn show_overlay<R>(ctx: &egui::Context, draw: impl FnOnce(&mut dyn ImmediateUi) -> R) -> R {
    let mut frame = FrameState::default();
    let out = egui::Area::new(Id::new(ROOT_AREA))
        .order(Order::Background)
        .interactable(false)
        .fixed_pos(Pos2::ZERO)
        .show(ctx, |ui| {
            let mut root = EguiUi {
                ui,
                frame: &mut frame,
            };
            draw(&mut root)
        })
        .inner;

    if frame.draw_cursor {
        if let Some(pos) = ctx.pointer_latest_pos() {
            paint_cursor(ctx, pos);
            ctx.set_cursor_icon(CursorIcon::None);
        }
    }
    out
}

/// Arrow cursor with its tip at `tip`.
fn paint_cursor(ctx: &egui::Context, tip: Pos2) {
    let painter = ctx.layer_painter(LayerId::new(Order::Tooltip, Id::new(CURSOR_LAYER)));
    let points = [(0.0, 0.0), (0.0, 16.0), (4.5, 12.0), (11.0, 12.0)]
        .into_iter()
        .map(|(x, y)| tip + egui::vec2(x, y))
        .collect();
    painter.add(egui::Shape::convex_polygon(
        points,
        Color32::WHITE,
        Stroke::new(1.0, Color32::BLACK),
    ));
}

pub fn to_egui_key(key: Key) -> egui::Key {
    match key {
        Key::Insert => egui::Key::Insert,
        Key::Delete => egui::Key::Delete,
        Key::Home => egui::Key::Home,
        Key::End => egui::Key::End,
        Key::PageUp => egui::Key::PageUp,
        Key::PageDown => egui::Key::PageDown,
        Key::ArrowUp => egui::Key::ArrowUp,
        Key::ArrowDown => egui::Key::ArrowDown,
        Key::ArrowLeft => egui::Key::ArrowLeft,
        Key::ArrowRight => egui::Key::ArrowRight,
        Key::Backspace => egui::Key::Backspace,
        Key::Enter => egui::Key::Enter,
        Key::Escape => egui::Key::Escape,
        Key::Tab => egui::Key::Tab,
        Key::Backquote => egui::Key::Backtick,
        Key::F1 => egui::Key::F1,
        Key::F2 => egui::Key::F2,
        Key::F3 => egui::Key::F3,
        Key::F4 => egui::Key::F4,
        Key::F5 => egui::Key::F5,
        Key::F6 => egui::Key::F6,
        Key::F7 => egui::Key::F7,
        Key::F8 => egui::Key::F8,
        Key::F9 => egui::Key::F9,
        Key::F10 => egui::Key::F10,
        Key::F11 => egui::Key::F11,
        Key::F12 => egui::Key::F12,
    }
}

impl EguiUi<'_> {
    fn nested(&mut self, ui: &mut egui::Ui, contents: Contents<'_>) {
        let mut inner = EguiUi {
            ui,
            frame: &mut *self.frame,
        };
        contents(&mut inner);
    }

    fn window<'o>(&self, spec: &PanelSpec<'_>) -> egui::Window<'o> {
        let flags = spec.flags;
        let mut frame = egui::Frame::window(self.ui.style());
        if let Some(alpha) = spec.bg_alpha {
            let [r, g, b, _] = frame.fill.to_srgba_unmultiplied();
            let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            frame.fill = Color32::from_rgba_unmultiplied(r, g, b, a);
        }

        let window = egui::Window::new(spec.label())
            .id(Id::new(spec.id))
            .title_bar(!flags.no_title_bar)
            .resizable(!flags.no_resize)
            .movable(!flags.no_move)
            .collapsible(!flags.no_collapse);

        match spec.placement {
            Placement::Fixed { pos, size } => {
                let inset = 2.0 * f32::from(PINNED_MARGIN);
                let frame = frame
                    .inner_margin(Margin::same(PINNED_MARGIN))
                    .corner_radius(CornerRadius::ZERO)
                    .shadow(Shadow::NONE);
                window
                    .frame(frame)
                    .fixed_pos(egui::pos2(pos.x, pos.y))
                    .fixed_size(egui::vec2(
                        (size.x - inset).max(0.0),
                        (size.y - inset).max(0.0),
                    ))
                    .vscroll(false)
            }
            Placement::Auto => window
                .frame(frame)
                .default_width(AUTO_PANEL_WIDTH)
                .vscroll(!flags.no_scrollbar),
        }
    }
}

impl ImmediateUi for EguiUi<'_> {
    fn display_size(&self) -> Vec2 {
        let size = self.ui.ctx().screen_rect().size();
        Vec2::new(size.x, size.y)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        let key = to_egui_key(key);
        self.ui.input(|i| i.key_pressed(key))
    }

    fn wants_capture_mouse(&self) -> bool {
        let ctx = self.ui.ctx();
        ctx.is_using_pointer() || ctx.is_pointer_over_area()
    }

    fn set_mouse_draw_cursor(&mut self, enabled: bool) {
        self.frame.draw_cursor = enabled;
    }

    fn panel(
        &mut self,
        spec: &PanelSpec<'_>,
        open: Option<&mut bool>,
        contents: Contents<'_>,
    ) -> bool {
        let ctx = self.ui.ctx().clone();
        let mut window = self.window(spec);
        if let Some(open) = open {
            window = window.open(open);
        }
        window
            .show(&ctx, |ui| self.nested(ui, contents))
            .is_some_and(|r| r.inner.is_some())
    }

    fn scroll_region(&mut self, id: &str, horizontal_scroll: bool, contents: Contents<'_>) {
        let area = if horizontal_scroll {
            egui::ScrollArea::both()
        } else {
            egui::ScrollArea::vertical()
        };
        let ui = &mut *self.ui;
        let frame = &mut *self.frame;
        area.id_salt(id)
            .stick_to_bottom(true)
            .auto_shrink([false, false])
            .show(ui, |ui| contents(&mut EguiUi { ui, frame }));
    }

    fn row(&mut self, contents: Contents<'_>) {
        let ui = &mut *self.ui;
        let frame = &mut *self.frame;
        ui.horizontal(|ui| contents(&mut EguiUi { ui, frame }));
    }

    fn text(&mut self, text: &str) {
        self.ui.label(text);
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        self.ui.checkbox(value, label).changed()
    }

    fn tree_node(&mut self, label: &str, default_open: bool, contents: Contents<'_>) -> bool {
        let ui = &mut *self.ui;
        let frame = &mut *self.frame;
        egui::CollapsingHeader::new(label)
            .default_open(default_open)
            .show(ui, |ui| contents(&mut EguiUi { ui, frame }))
            .body_returned
            .is_some()
    }

    fn set_next_item_width(&mut self, width: f32) {
        self.frame.next_item_width = Some(width);
    }

    fn set_keyboard_focus_here(&mut self) {
        self.frame.focus_next = true;
    }

    fn input_text(
        &mut self,
        id: &str,
        edit: &mut TextEdit,
        callback: &mut dyn FnMut(InputCallback, &mut TextEdit),
    ) -> bool {
        let id = input_field_id(id);
        if std::mem::take(&mut self.frame.focus_next) {
            self.ui.memory_mut(|m| m.request_focus(id));
        }
        let available = self.ui.available_width();
        let width = self
            .frame
            .next_item_width
            .take()
            .map_or(available, |w| w.min(available));

        let mut buf = edit.text().to_owned();
        let output = egui::TextEdit::singleline(&mut buf)
            .id(id)
            .char_limit(edit.capacity())
            .desired_width(width)
            .show(self.ui);

        if output.response.changed() {
            edit.replace(&buf);
            edit.take_dirty();
        }
        if let Some(range) = output.cursor_range {
            let (a, b) = (range.primary.index, range.secondary.index);
            edit.set_selection(a.min(b)..a.max(b));
        }

        if output.response.has_focus() {
            let (up, down, tab) = self.ui.input(|i| {
                (
                    i.key_pressed(egui::Key::ArrowUp),
                    i.key_pressed(egui::Key::ArrowDown),
                    i.key_pressed(egui::Key::Tab),
                )
            });
            if up {
                callback(InputCallback::History(HistoryDirection::Up), edit);
            }
            if down {
                callback(InputCallback::History(HistoryDirection::Down), edit);
            }
            if tab {
                callback(InputCallback::Completion, edit);
            }
        }

        if edit.take_dirty() {
            // The owner rewrote the line; egui picks it up next frame.
            let mut state = output.state;
            let end = CCursor::new(edit.char_count());
            state.cursor.set_char_range(Some(CCursorRange::one(end)));
            state.store(self.ui.ctx(), id);
        }

        output.response.lost_focus() && self.ui.input(|i| i.key_pressed(egui::Key::Enter))
    }

    fn show_demo_panel(&mut self, open: &mut bool) {
        let ctx = self.ui.ctx().clone();
        egui::Window::new(DEMO_PANEL_TITLE)
            .open(open)
            .vscroll(true)
            .show(&ctx, |ui| {
                egui::CollapsingHeader::new("Settings").show(ui, |ui| ctx.settings_ui(ui));
                egui::CollapsingHeader::new("Inspection").show(ui, |ui| ctx.inspection_ui(ui));
            });
    }
}
