// Scripted ImmediateUi shared by the integration tests.
//
// Records every call in order and plays back canned input: keys pressed
// this frame, text typed into the next input field, history keys, Enter.
#![allow(dead_code)]

use std::collections::HashSet;

use overlay_core::console::TextEdit;
use overlay_core::ui::{
    Contents, HistoryDirection, ImmediateUi, InputCallback, Key, PanelFlags, PanelSpec, Placement,
    Vec2,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    BeginPanel {
        id: String,
        placement: Placement,
        flags: PanelFlags,
        closable: bool,
    },
    EndPanel,
    BeginScroll(String),
    EndScroll,
    Text(String),
    BeginRow,
    EndRow,
    Checkbox(String),
    TreeNode(String),
    TreePop,
    ItemWidth(f32),
    FocusHere,
    InputText(String),
    Demo,
    MouseCursor(bool),
}

pub struct ScriptedUi {
    pub display: Vec2,
    pub pressed: HashSet<Key>,
    pub wants_mouse: bool,
    pub calls: Vec<Call>,

    // ── Input playback for the next input_text ──
    pub typed: Option<String>,
    pub history_keys: Vec<HistoryDirection>,
    pub completion: bool,
    pub press_enter: bool,

    // ── Widget behaviour ──
    pub close_panels: HashSet<String>,
    pub collapsed_panels: HashSet<String>,
    pub collapsed_nodes: HashSet<String>,
    pub toggle_checkboxes: HashSet<String>,
    pub mouse_cursor: Option<bool>,
    pub panel_depth: i32,
}

impl Default for ScriptedUi {
    fn default() -> Self {
        Self {
            display: Vec2::new(1280.0, 800.0),
            pressed: HashSet::new(),
            wants_mouse: false,
            calls: Vec::new(),
            typed: None,
            history_keys: Vec::new(),
            completion: false,
            press_enter: false,
            close_panels: HashSet::new(),
            collapsed_panels: HashSet::new(),
            collapsed_nodes: HashSet::new(),
            toggle_checkboxes: HashSet::new(),
            mouse_cursor: None,
            panel_depth: 0,
        }
    }
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(mut self, key: Key) -> Self {
        self.pressed.insert(key);
        self
    }

    /// Forget recorded calls and per-frame input before the next frame.
    pub fn next_frame(&mut self) {
        self.calls.clear();
        self.pressed.clear();
        self.typed = None;
        self.history_keys.clear();
        self.completion = false;
        self.press_enter = false;
        self.mouse_cursor = None;
    }

    pub fn panel_ids(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::BeginPanel { id, .. } => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    pub fn position(&self, call: &Call) -> Option<usize> {
        self.calls.iter().position(|c| c == call)
    }

    pub fn panel(&self, id: &str) -> Option<(Placement, PanelFlags, bool)> {
        self.calls.iter().find_map(|c| match c {
            Call::BeginPanel {
                id: pid,
                placement,
                flags,
                closable,
            } if pid == id => Some((*placement, *flags, *closable)),
            _ => None,
        })
    }
}

impl ImmediateUi for ScriptedUi {
    fn display_size(&self) -> Vec2 {
        self.display
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn wants_capture_mouse(&self) -> bool {
        self.wants_mouse
    }

    fn set_mouse_draw_cursor(&mut self, enabled: bool) {
        self.mouse_cursor = Some(enabled);
        self.calls.push(Call::MouseCursor(enabled));
    }

    fn panel(
        &mut self,
        spec: &PanelSpec<'_>,
        open: Option<&mut bool>,
        contents: Contents<'_>,
    ) -> bool {
        let closable = open.is_some();
        if let Some(open) = open {
            if self.close_panels.contains(spec.id) {
                *open = false;
            }
        }
        self.calls.push(Call::BeginPanel {
            id: spec.id.to_string(),
            placement: spec.placement,
            flags: spec.flags,
            closable,
        });
        let collapsed = self.collapsed_panels.contains(spec.id);
        if !collapsed {
            self.panel_depth += 1;
            contents(self);
            self.panel_depth -= 1;
        }
        self.calls.push(Call::EndPanel);
        !collapsed
    }

    fn scroll_region(&mut self, id: &str, _horizontal_scroll: bool, contents: Contents<'_>) {
        self.calls.push(Call::BeginScroll(id.to_string()));
        contents(self);
        self.calls.push(Call::EndScroll);
    }

    fn row(&mut self, contents: Contents<'_>) {
        self.calls.push(Call::BeginRow);
        contents(self);
        self.calls.push(Call::EndRow);
    }

    fn text(&mut self, text: &str) {
        self.calls.push(Call::Text(text.to_string()));
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        self.calls.push(Call::Checkbox(label.to_string()));
        if self.toggle_checkboxes.contains(label) {
            *value = !*value;
            return true;
        }
        false
    }

    fn tree_node(&mut self, label: &str, default_open: bool, contents: Contents<'_>) -> bool {
        self.calls.push(Call::TreeNode(label.to_string()));
        let open = default_open && !self.collapsed_nodes.contains(label);
        if open {
            contents(self);
            self.calls.push(Call::TreePop);
        }
        open
    }

    fn set_next_item_width(&mut self, width: f32) {
        self.calls.push(Call::ItemWidth(width));
    }

    fn set_keyboard_focus_here(&mut self) {
        self.calls.push(Call::FocusHere);
    }

    fn input_text(
        &mut self,
        id: &str,
        edit: &mut TextEdit,
        callback: &mut dyn FnMut(InputCallback, &mut TextEdit),
    ) -> bool {
        self.calls.push(Call::InputText(id.to_string()));
        if let Some(text) = self.typed.take() {
            let joined = format!("{}{}", edit.text(), text);
            edit.replace(&joined);
        }
        for dir in self.history_keys.drain(..) {
            callback(InputCallback::History(dir), edit);
        }
        if self.completion {
            callback(InputCallback::Completion, edit);
        }
        std::mem::take(&mut self.press_enter)
    }

    fn show_demo_panel(&mut self, _open: &mut bool) {
        self.calls.push(Call::Demo);
    }
}
