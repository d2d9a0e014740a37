//! Immediate-mode UI seam.
//!
//! The console, the shell and every mod draw through [`ImmediateUi`]. Nothing
//! here retains widget trees: callers redeclare their UI every frame and the
//! backend decides how to lay it out and rasterize it. `overlay-bridge`
//! implements the trait over egui; the core's tests implement it with a
//! scripted recorder.

use serde::{Deserialize, Serialize};

use crate::console::TextEdit;

// ════════════════════════════════════════════════════════════════════
// Geometry
// ════════════════════════════════════════════════════════════════════

/// A 2D point or extent in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ════════════════════════════════════════════════════════════════════
// Keys
// ════════════════════════════════════════════════════════════════════

/// Keys the overlay queries for edges or binds as hotkeys.
///
/// Serialized by variant name, so config files read `"Insert"`, `"F5"`, …
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Backspace,
    Enter,
    Escape,
    Tab,
    Backquote,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

// ════════════════════════════════════════════════════════════════════
// Panels
// ════════════════════════════════════════════════════════════════════

/// Window chrome switches for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelFlags {
    pub no_title_bar: bool,
    pub no_resize: bool,
    pub no_move: bool,
    pub no_scrollbar: bool,
    pub no_saved_settings: bool,
    pub no_collapse: bool,
}

impl PanelFlags {
    /// Pinned, chrome-less panel: no title bar, cannot be moved or resized.
    pub const PINNED: PanelFlags = PanelFlags {
        no_title_bar: true,
        no_resize: true,
        no_move: true,
        no_scrollbar: false,
        no_saved_settings: true,
        no_collapse: true,
    };

    pub const fn without_scrollbar(mut self) -> Self {
        self.no_scrollbar = true;
        self
    }
}

/// Where a panel goes on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// The backend picks (and remembers) the position and size.
    Auto,
    /// Position and size are forced every frame.
    Fixed { pos: Vec2, size: Vec2 },
}

/// Everything `panel` needs to know about a panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSpec<'a> {
    /// Stable identity; also the title unless `title` is set.
    pub id: &'a str,
    pub title: Option<&'a str>,
    pub placement: Placement,
    pub flags: PanelFlags,
    /// Background opacity override (`None` keeps the backend's style).
    pub bg_alpha: Option<f32>,
}

impl<'a> PanelSpec<'a> {
    /// A normal floating, titled panel.
    pub fn floating(id: &'a str) -> Self {
        Self {
            id,
            title: None,
            placement: Placement::Auto,
            flags: PanelFlags::default(),
            bg_alpha: None,
        }
    }

    /// A panel pinned to a rectangle with no chrome.
    pub fn pinned(id: &'a str, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            title: None,
            placement: Placement::Fixed { pos, size },
            flags: PanelFlags::PINNED,
            bg_alpha: None,
        }
    }

    pub fn with_flags(mut self, flags: PanelFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_bg_alpha(mut self, alpha: f32) -> Self {
        self.bg_alpha = Some(alpha);
        self
    }

    pub fn label(&self) -> &'a str {
        self.title.unwrap_or(self.id)
    }
}

// ════════════════════════════════════════════════════════════════════
// Text input callbacks
// ════════════════════════════════════════════════════════════════════

/// Direction of a history recall request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Up,
    Down,
}

/// Events a single-line text field forwards to its owner while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCallback {
    History(HistoryDirection),
    Completion,
}

// ════════════════════════════════════════════════════════════════════
// The trait
// ════════════════════════════════════════════════════════════════════

/// Body of a panel, scroll region, row or tree node. Runs at most once per
/// call, against the same backend nested one level deeper.
pub type Contents<'c> = &'c mut dyn FnMut(&mut dyn ImmediateUi);

/// One frame's worth of immediate-mode drawing and input queries.
///
/// Containers take their contents as a closure, so opening and closing are
/// always balanced.
pub trait ImmediateUi {
    /// Size of the drawable surface.
    fn display_size(&self) -> Vec2;

    /// True on the frame `key` went down (edge, not level).
    fn is_key_pressed(&self, key: Key) -> bool;

    /// True while the pointer is over UI or dragging something owned by it.
    fn wants_capture_mouse(&self) -> bool;

    /// Draw a software cursor at the pointer position this frame.
    fn set_mouse_draw_cursor(&mut self, enabled: bool);

    /// Shows a panel and runs `contents` inside it unless it is collapsed or
    /// closed. Returns whether `contents` ran. When `open` is given the
    /// panel gets a close box that clears it.
    fn panel(
        &mut self,
        spec: &PanelSpec<'_>,
        open: Option<&mut bool>,
        contents: Contents<'_>,
    ) -> bool;

    fn scroll_region(&mut self, id: &str, horizontal_scroll: bool, contents: Contents<'_>);

    /// Lays out everything `contents` adds side by side.
    fn row(&mut self, contents: Contents<'_>);

    fn text(&mut self, text: &str);

    /// Returns true when the value changed this frame.
    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool;

    /// Collapsible section. `default_open` only applies the first time the
    /// node is seen. Runs `contents` and returns true when expanded.
    fn tree_node(&mut self, label: &str, default_open: bool, contents: Contents<'_>) -> bool;

    fn set_next_item_width(&mut self, width: f32);

    /// Give keyboard focus to the next widget.
    fn set_keyboard_focus_here(&mut self);

    /// Single-line text field bound to `edit`. Returns true when Enter was
    /// pressed in it this frame. History/completion keys are forwarded to
    /// `callback` instead of editing the text.
    fn input_text(
        &mut self,
        id: &str,
        edit: &mut TextEdit,
        callback: &mut dyn FnMut(InputCallback, &mut TextEdit),
    ) -> bool;

    /// The backend's own showcase panel.
    fn show_demo_panel(&mut self, open: &mut bool);
}
