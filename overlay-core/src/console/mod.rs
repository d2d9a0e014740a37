//! Drop-down developer console.
//!
//! Two pinned panels along the bottom edge of the display: an optional
//! scrollback of everything submitted or logged, and a single-line input.
//! Submitted lines are split on spaces; the first token picks a handler from
//! the command table and the rest become its arguments.

mod command;
mod edit;
mod history;

pub use command::{CommandHandler, CommandLine, CommandTable, ConsoleOutput, UnknownCommandPolicy};
pub use edit::{truncate_chars, TextEdit, DEFAULT_INPUT_CAPACITY};
pub use history::HistoryLog;

use crate::config::ConsoleConfig;
use crate::ui::{HistoryDirection, ImmediateUi, InputCallback, Key, PanelSpec, Vec2};

const OUTPUT_PANEL_ID: &str = "ConsoleOutputArea";
const INPUT_PANEL_ID: &str = "ConsoleInputArea";
const INPUT_FIELD_ID: &str = "##ConsoleInput";

/// What a submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Nothing to submit.
    Empty,
    /// A registered handler ran.
    Dispatched { name: String },
    /// No handler was registered under this name.
    Unknown { name: String },
}

pub struct Console {
    commands: CommandTable,
    history: HistoryLog,
    input: TextEdit,
    visible: bool,
    detail_visible: bool,
    focus_input: bool,
    detail_key: Key,
    input_height: f32,
    output_height: f32,
    unknown_command: UnknownCommandPolicy,
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("commands", &self.commands)
            .field("history_len", &self.history.len())
            .field("visible", &self.visible)
            .field("detail_visible", &self.detail_visible)
            .finish()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(&ConsoleConfig::default(), Key::F2)
    }
}

impl Console {
    /// `config.input_capacity` is clamped to `1..=DEFAULT_INPUT_CAPACITY`.
    pub fn new(config: &ConsoleConfig, detail_key: Key) -> Self {
        let capacity = config.input_capacity.clamp(1, DEFAULT_INPUT_CAPACITY);
        if capacity != config.input_capacity {
            tracing::warn!(
                requested = config.input_capacity,
                capacity,
                "console input capacity out of range"
            );
        }
        Self {
            commands: CommandTable::new(),
            history: HistoryLog::new(),
            input: TextEdit::new(capacity),
            visible: config.start_visible,
            detail_visible: false,
            focus_input: false,
            detail_key,
            input_height: config.input_height,
            output_height: config.output_height,
            unknown_command: config.unknown_command,
        }
    }

    // ── Visibility ───────────────────────────────────────────────────

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
        tracing::debug!(visible = self.visible, "console toggled");
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle_detail(&mut self) {
        self.detail_visible = !self.detail_visible;
    }

    pub fn is_detail_visible(&self) -> bool {
        self.detail_visible
    }

    /// Whether the input field will grab keyboard focus next frame.
    pub fn focus_requested(&self) -> bool {
        self.focus_input
    }

    // ── Commands & logging ───────────────────────────────────────────

    /// Register `handler` under `name`, replacing any earlier one.
    pub fn register_command<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: FnMut(&[String], &mut ConsoleOutput<'_>) + Send + 'static,
    {
        let name = name.into();
        if self.commands.register(name.clone(), Box::new(handler)) {
            tracing::debug!(%name, "console command replaced");
        }
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    pub fn set_unknown_command_policy(&mut self, policy: UnknownCommandPolicy) {
        self.unknown_command = policy;
    }

    /// Append a line to the scrollback. Cancels history browsing.
    pub fn log(&mut self, message: impl Into<String>) {
        self.history.push(message);
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    // ── Input line ───────────────────────────────────────────────────

    pub fn input(&self) -> &TextEdit {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextEdit {
        &mut self.input
    }

    /// Submit whatever is in the input line.
    pub fn submit(&mut self) -> Submission {
        if self.input.is_empty() {
            return Submission::Empty;
        }
        let line = self.input.take_text();
        self.execute(&line)
    }

    /// Run `line` as if it had been typed and submitted. The raw line is
    /// logged (after the handler ran), truncated to the input capacity.
    pub fn execute(&mut self, line: &str) -> Submission {
        let line = truncate_chars(line, self.input.capacity());
        let Some(parsed) = CommandLine::parse(line) else {
            return Submission::Empty;
        };

        let outcome = match self.commands.get_mut(&parsed.name) {
            Some(handler) => {
                tracing::debug!(command = %parsed.name, args = parsed.args.len(), "dispatching");
                let mut out = ConsoleOutput {
                    history: &mut self.history,
                    visible: &mut self.visible,
                };
                handler(&parsed.args, &mut out);
                Submission::Dispatched { name: parsed.name }
            }
            None => Submission::Unknown { name: parsed.name },
        };

        self.history.push(line);
        if let (Submission::Unknown { name }, UnknownCommandPolicy::Report) =
            (&outcome, self.unknown_command)
        {
            self.history.push(format!("unknown command: {name}"));
        }
        self.history.reset_cursor();
        outcome
    }

    /// Recall history into the input line, as the Up/Down keys do.
    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        apply_input_callback(
            &mut self.history,
            InputCallback::History(direction),
            &mut self.input,
        );
    }

    // ── Frame ────────────────────────────────────────────────────────

    pub fn render(&mut self, ui: &mut dyn ImmediateUi) {
        if !self.visible {
            return;
        }
        let display = ui.display_size();

        if ui.is_key_pressed(self.detail_key) {
            self.toggle_detail();
        }
        if self.detail_visible {
            self.render_output(ui, display);
        }
        self.render_input(ui, display);
    }

    fn render_output(&self, ui: &mut dyn ImmediateUi, display: Vec2) {
        let spec = PanelSpec::pinned(
            OUTPUT_PANEL_ID,
            Vec2::new(0.0, display.y - self.input_height - self.output_height),
            Vec2::new(display.x, self.output_height),
        );
        let entries = self.history.entries();
        ui.panel(&spec, None, &mut |ui: &mut dyn ImmediateUi| {
            ui.scroll_region("ScrollRegion", true, &mut |ui: &mut dyn ImmediateUi| {
                for entry in entries {
                    ui.text(entry);
                }
            });
        });
    }

    fn render_input(&mut self, ui: &mut dyn ImmediateUi, display: Vec2) {
        let spec = PanelSpec::pinned(
            INPUT_PANEL_ID,
            Vec2::new(0.0, display.y - self.input_height),
            Vec2::new(display.x, self.input_height),
        );
        let spec = spec
            .with_flags(spec.flags.without_scrollbar())
            .with_bg_alpha(1.0);

        let Self {
            history,
            input,
            focus_input,
            ..
        } = self;
        let mut entered = false;
        ui.panel(&spec, None, &mut |ui: &mut dyn ImmediateUi| {
            ui.set_next_item_width(display.x);
            if std::mem::take(focus_input) {
                ui.set_keyboard_focus_here();
            }
            entered = ui.input_text(
                INPUT_FIELD_ID,
                input,
                &mut |event: InputCallback, edit: &mut TextEdit| {
                    apply_input_callback(history, event, edit)
                },
            );
        });

        if entered {
            self.submit();
            self.focus_input = true;
        }
    }
}

/// Text-field callback: Up/Down recall history, anything else is ignored.
fn apply_input_callback(history: &mut HistoryLog, event: InputCallback, edit: &mut TextEdit) {
    let InputCallback::History(direction) = event else {
        return;
    };
    if let Some(text) = history.navigate(direction) {
        edit.replace(text);
    }
}
