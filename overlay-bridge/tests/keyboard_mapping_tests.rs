//! Winit key codes to overlay keys.

use overlay_bridge::keyboard::{map_key_code, map_physical_key};
use overlay_core::ui::Key;
use winit::keyboard::{KeyCode, NativeKeyCode, PhysicalKey};

// ============================================================================
// Hotkeys
// ============================================================================

#[test]
fn insert_maps_to_shell_hotkey() {
    assert_eq!(map_key_code(KeyCode::Insert), Some(Key::Insert));
}

#[test]
fn function_keys_map() {
    assert_eq!(map_key_code(KeyCode::F1), Some(Key::F1));
    assert_eq!(map_key_code(KeyCode::F5), Some(Key::F5));
    assert_eq!(map_key_code(KeyCode::F12), Some(Key::F12));
}

#[test]
fn backquote_maps() {
    assert_eq!(map_key_code(KeyCode::Backquote), Some(Key::Backquote));
}

// ============================================================================
// Editing keys
// ============================================================================

#[test]
fn both_enters_submit() {
    assert_eq!(map_key_code(KeyCode::Enter), Some(Key::Enter));
    assert_eq!(map_key_code(KeyCode::NumpadEnter), Some(Key::Enter));
}

#[test]
fn arrows_map() {
    assert_eq!(map_key_code(KeyCode::ArrowUp), Some(Key::ArrowUp));
    assert_eq!(map_key_code(KeyCode::ArrowDown), Some(Key::ArrowDown));
    assert_eq!(map_key_code(KeyCode::ArrowLeft), Some(Key::ArrowLeft));
    assert_eq!(map_key_code(KeyCode::ArrowRight), Some(Key::ArrowRight));
}

#[test]
fn letters_are_not_keys() {
    // Letters arrive as text, not as keys.
    assert_eq!(map_key_code(KeyCode::KeyA), None);
    assert_eq!(map_key_code(KeyCode::Space), None);
}

// ============================================================================
// Physical keys
// ============================================================================

#[test]
fn physical_code_delegates() {
    assert_eq!(
        map_physical_key(PhysicalKey::Code(KeyCode::Escape)),
        Some(Key::Escape)
    );
}

#[test]
fn unidentified_physical_key_is_none() {
    let key = PhysicalKey::Unidentified(NativeKeyCode::Unidentified);
    assert_eq!(map_physical_key(key), None);
}
