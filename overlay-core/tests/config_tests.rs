//! Configuration loading tests.

use std::fs;

use overlay_core::config::{FontConfig, OverlayConfig, CONFIG_FILE_NAME};
use overlay_core::console::UnknownCommandPolicy;
use overlay_core::ui::Key;
use overlay_core::OverlayError;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = OverlayConfig::default();
    assert_eq!(config.hotkeys.shell_toggle, Key::Insert);
    assert_eq!(config.hotkeys.console_toggle, Key::F5);
    assert_eq!(config.hotkeys.console_detail_toggle, Key::F2);
    assert_eq!(config.hotkeys.debounce_ms, 300);
    assert_eq!(config.console.input_height, 40.0);
    assert_eq!(config.console.output_height, 500.0);
    assert_eq!(config.console.input_capacity, 256);
    assert_eq!(config.console.unknown_command, UnknownCommandPolicy::Ignore);
    assert_eq!(config.shell.title, "Developer Overlay");
    assert!(config.shell.start_visible);
    assert_eq!(config.font.base_size, 18.0);
    assert!(config.window.always_on_top);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = OverlayConfig::load(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
    assert_eq!(config, OverlayConfig::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        r#"{ "hotkeys": { "console_toggle": "Backquote" }, "console": { "unknown_command": "report" } }"#,
    )
    .unwrap();

    let config = OverlayConfig::load(&path).unwrap();
    assert_eq!(config.hotkeys.console_toggle, Key::Backquote);
    assert_eq!(config.hotkeys.shell_toggle, Key::Insert);
    assert_eq!(config.console.unknown_command, UnknownCommandPolicy::Report);
    assert_eq!(config.console.input_capacity, 256);
}

#[test]
fn test_invalid_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "{ not json").unwrap();

    let err = OverlayConfig::load(&path).unwrap_err();
    assert!(matches!(err, OverlayError::ConfigParse { .. }));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

#[test]
fn test_unknown_key_name_is_an_error() {
    assert!(OverlayConfig::from_json(r#"{ "hotkeys": { "shell_toggle": "Hyper" } }"#).is_err());
}

#[test]
fn test_directory_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = OverlayConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, OverlayError::ConfigRead { .. }));
}

#[test]
fn test_json_round_trip() {
    let mut config = OverlayConfig::default();
    config.font.path = Some("fonts/mono.ttf".into());
    config.window.width = 1920;
    let json = config.to_json().unwrap();
    assert_eq!(OverlayConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_font_resolve_scales_by_dpi() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("font.ttf");
    fs::write(&path, b"not really a font").unwrap();

    let font = FontConfig {
        path: Some(path.clone()),
        base_size: 18.0,
    };
    let resolved = font.resolve(1.5).unwrap();
    assert_eq!(resolved.path, path);
    assert_eq!(resolved.pixel_size, 27.0);
}

#[test]
fn test_font_resolve_missing_file() {
    let dir = TempDir::new().unwrap();
    let font = FontConfig {
        path: Some(dir.path().join("msyh.ttc")),
        base_size: 18.0,
    };
    assert!(font.resolve(1.0).is_none());
    assert!(FontConfig::default().resolve(1.0).is_none());
}
