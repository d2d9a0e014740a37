//! Overlay configuration.
//!
//! Loaded once at startup from a JSON file. Every field has a default, so a
//! missing file or a partial one is fine; only unreadable or malformed files
//! are errors.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::console::{UnknownCommandPolicy, DEFAULT_INPUT_CAPACITY};
use crate::error::OverlayError;
use crate::ui::Key;

pub const CONFIG_FILE_NAME: &str = "overlay.json";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub hotkeys: HotkeyConfig,
    pub console: ConsoleConfig,
    pub shell: ShellConfig,
    pub font: FontConfig,
    pub window: WindowConfig,
}

// ════════════════════════════════════════════════════════════════════
// Sections
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Global key toggling the shell panel. Works without window focus.
    pub shell_toggle: Key,
    pub console_toggle: Key,
    pub console_detail_toggle: Key,
    /// Minimum time between two toggles while the global key is held.
    pub debounce_ms: u64,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            shell_toggle: Key::Insert,
            console_toggle: Key::F5,
            console_detail_toggle: Key::F2,
            debounce_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub input_height: f32,
    pub output_height: f32,
    /// Clamped to `1..=256` when the console is built.
    pub input_capacity: usize,
    pub unknown_command: UnknownCommandPolicy,
    pub start_visible: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            input_height: 40.0,
            output_height: 500.0,
            input_capacity: DEFAULT_INPUT_CAPACITY,
            unknown_command: UnknownCommandPolicy::Ignore,
            start_visible: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub title: String,
    pub start_visible: bool,
    pub show_mouse: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Developer Overlay".to_string(),
            start_visible: true,
            show_mouse: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Custom font file. Skipped (with a log line) when absent.
    pub path: Option<PathBuf>,
    /// Size at a DPI scale of 1.0.
    pub base_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            base_size: 18.0,
        }
    }
}

/// A custom font that exists on disk, sized for the current DPI scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFont {
    pub path: PathBuf,
    pub pixel_size: f32,
}

impl FontConfig {
    /// Returns `None` when no font is configured or the file is missing.
    pub fn resolve(&self, dpi_scale: f32) -> Option<ResolvedFont> {
        let path = self.path.as_ref()?;
        if !path.is_file() {
            tracing::info!("custom font {} not found, keeping the default", path.display());
            return None;
        }
        Some(ResolvedFont {
            path: path.clone(),
            pixel_size: (self.base_size * dpi_scale).round(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub always_on_top: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            always_on_top: true,
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Loading
// ════════════════════════════════════════════════════════════════════

impl OverlayConfig {
    /// `<config dir>/overlay.json`, e.g. `~/.config/overlay/overlay.json`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "DrTomLLC", "overlay")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Read `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, OverlayError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(OverlayError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::from_json(&raw).map_err(|source| OverlayError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
