//! Command table and input-line splitting.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::history::HistoryLog;

/// A registered console command. Receives the arguments that followed the
/// command name and a handle for writing back into the console.
pub type CommandHandler = Box<dyn FnMut(&[String], &mut ConsoleOutput<'_>) + Send>;

// ════════════════════════════════════════════════════════════════════
// Parsing
// ════════════════════════════════════════════════════════════════════

/// A submitted line split into name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Splits on every single space. Consecutive spaces yield empty
    /// arguments; quotes mean nothing. Returns `None` for an empty line.
    pub fn parse(line: &str) -> Option<Self> {
        if line.is_empty() {
            return None;
        }
        let mut tokens = line.split(' ').map(str::to_string);
        let name = tokens.next()?;
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }
}

// ════════════════════════════════════════════════════════════════════
// Unknown-command policy
// ════════════════════════════════════════════════════════════════════

/// What happens when a submitted line names no registered command. The raw
/// line is logged either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCommandPolicy {
    /// Drop it silently.
    #[default]
    Ignore,
    /// Also log `unknown command: <name>`.
    Report,
}

// ════════════════════════════════════════════════════════════════════
// Handler access to the console
// ════════════════════════════════════════════════════════════════════

/// What a running command may touch.
pub struct ConsoleOutput<'a> {
    pub(crate) history: &'a mut HistoryLog,
    pub(crate) visible: &'a mut bool,
}

impl ConsoleOutput<'_> {
    pub fn log(&mut self, message: impl Into<String>) {
        self.history.push(message);
    }

    pub fn toggle_visible(&mut self) {
        *self.visible = !*self.visible;
    }

    pub fn is_visible(&self) -> bool {
        *self.visible
    }
}

// ════════════════════════════════════════════════════════════════════
// Table
// ════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct CommandTable {
    handlers: HashMap<String, CommandHandler>,
}

impl fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTable")
            .field("commands", &self.names())
            .finish()
    }
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns true when an earlier handler was replaced.
    pub fn register(&mut self, name: impl Into<String>, handler: CommandHandler) -> bool {
        self.handlers.insert(name.into(), handler).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut CommandHandler> {
        self.handlers.get_mut(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
