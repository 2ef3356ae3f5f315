//! Integration tests for the keymap-core public API.
//!
//! These tests pin the full `code → key` data contract through the crate-root
//! re-exports and check the properties shortcut matching relies on: variant
//! folding, lock-key suppression, and modifier classification.

use keymap_core::keymap::{lookup_raw, table};
use keymap_core::{code_to_key, is_modifier, KeyMapper, Modifier};

/// Every code the mapper surfaces, with the name it must return.
const EXPECTED_MAPPINGS: &[(&str, &str)] = &[
    // Modifiers and whitespace
    ("ControlLeft", "ctrl"), ("ControlRight", "ctrl"),
    ("AltLeft", "alt"), ("AltRight", "alt"),
    ("ShiftLeft", "shift"), ("ShiftRight", "shift"),
    ("Space", "space"), ("Escape", "esc"),
    // Digit row
    ("Digit1", "1"), ("Digit2", "2"), ("Digit3", "3"), ("Digit4", "4"), ("Digit5", "5"),
    ("Digit6", "6"), ("Digit7", "7"), ("Digit8", "8"), ("Digit9", "9"), ("Digit0", "0"),
    // Letters
    ("KeyA", "a"), ("KeyB", "b"), ("KeyC", "c"), ("KeyD", "d"), ("KeyE", "e"),
    ("KeyF", "f"), ("KeyG", "g"), ("KeyH", "h"), ("KeyI", "i"), ("KeyJ", "j"),
    ("KeyK", "k"), ("KeyL", "l"), ("KeyM", "m"), ("KeyN", "n"), ("KeyO", "o"),
    ("KeyP", "p"), ("KeyQ", "q"), ("KeyR", "r"), ("KeyS", "s"), ("KeyT", "t"),
    ("KeyU", "u"), ("KeyV", "v"), ("KeyW", "w"), ("KeyX", "x"), ("KeyY", "y"),
    ("KeyZ", "z"),
    // Punctuation
    ("Minus", "-"), ("Equal", "="), ("BracketLeft", "["), ("BracketRight", "]"),
    ("Semicolon", ";"), ("Quote", "'"), ("Backquote", "`"), ("Backslash", "\\"),
    ("Comma", ","), ("Period", "."), ("Slash", "/"),
    // Editing and navigation
    ("Enter", "enter"), ("Tab", "tab"), ("Backspace", "backspace"), ("Delete", "del"),
    ("ArrowUp", "up"), ("ArrowDown", "down"), ("ArrowLeft", "left"), ("ArrowRight", "right"),
    ("PageUp", "pageup"), ("PageDown", "pagedown"), ("Home", "home"), ("End", "end"),
    ("Insert", "insert"),
    // Numpad
    ("NumpadDivide", "/"), ("NumpadMultiply", "*"), ("NumpadSubtract", "-"),
    ("NumpadAdd", "+"), ("NumpadEnter", "enter"), ("NumpadDecimal", "."),
    ("Numpad0", "0"), ("Numpad1", "1"), ("Numpad2", "2"), ("Numpad3", "3"),
    ("Numpad4", "4"), ("Numpad5", "5"), ("Numpad6", "6"), ("Numpad7", "7"),
    ("Numpad8", "8"), ("Numpad9", "9"),
    // Function keys
    ("F1", "f1"), ("F2", "f2"), ("F3", "f3"), ("F4", "f4"), ("F5", "f5"), ("F6", "f6"),
    ("F7", "f7"), ("F8", "f8"), ("F9", "f9"), ("F10", "f10"), ("F11", "f11"), ("F12", "f12"),
    // System
    ("PrintScreen", "printscreen"), ("Pause", "pause"),
];

const LOCK_KEY_CODES: &[(&str, &str)] = &[
    ("NumLock", "numlock"),
    ("ScrollLock", "scrolllock"),
    ("CapsLock", "capslock"),
];

#[test]
fn test_every_surfaced_code_maps_to_its_documented_name() {
    for &(code, expected) in EXPECTED_MAPPINGS {
        assert_eq!(
            code_to_key(code),
            Some(expected),
            "code_to_key({code:?}) should return {expected:?}"
        );
    }
}

#[test]
fn test_expected_list_plus_lock_keys_is_exactly_the_table() {
    let mut expected: Vec<(&str, &str)> = EXPECTED_MAPPINGS
        .iter()
        .chain(LOCK_KEY_CODES)
        .copied()
        .collect();
    let mut actual: Vec<(&str, &str)> = table().to_vec();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(expected, actual);
}

#[test]
fn test_lock_keys_are_suppressed() {
    for &(code, name) in LOCK_KEY_CODES {
        assert_eq!(code_to_key(code), None, "{code} must not be surfaced");
        assert_eq!(lookup_raw(code), Some(name), "{code} must stay in the table");
    }
}

#[test]
fn test_unknown_input_yields_none() {
    assert_eq!(code_to_key("NotARealCode"), None);
    assert_eq!(code_to_key(""), None);
}

#[test]
fn test_left_and_right_modifier_variants_agree() {
    assert_eq!(code_to_key("ControlLeft"), code_to_key("ControlRight"));
    assert_eq!(code_to_key("ControlLeft"), Some("ctrl"));
    assert_eq!(code_to_key("AltLeft"), code_to_key("AltRight"));
    assert_eq!(code_to_key("AltLeft"), Some("alt"));
    assert_eq!(code_to_key("ShiftLeft"), code_to_key("ShiftRight"));
    assert_eq!(code_to_key("ShiftLeft"), Some("shift"));
}

#[test]
fn test_both_enter_keys_map_to_enter() {
    assert_eq!(code_to_key("Enter"), Some("enter"));
    assert_eq!(code_to_key("NumpadEnter"), Some("enter"));
}

#[test]
fn test_spot_checks() {
    assert_eq!(code_to_key("KeyA"), Some("a"));
    assert_eq!(code_to_key("Digit1"), Some("1"));
    assert_eq!(code_to_key("NumpadAdd"), Some("+"));
    assert_eq!(code_to_key("ArrowUp"), Some("up"));
}

#[test]
fn test_is_modifier_classification() {
    assert!(is_modifier("ctrl"));
    assert!(is_modifier("alt"));
    assert!(is_modifier("shift"));
    assert!(!is_modifier("a"));
    assert!(!is_modifier(""));
    assert!(!is_modifier("enter"));
}

#[test]
fn test_only_modifier_codes_resolve_to_modifiers() {
    let modifier_codes: Vec<&str> = table()
        .iter()
        .filter(|&&(code, _)| code_to_key(code).is_some_and(is_modifier))
        .map(|&(code, _)| code)
        .collect();
    assert_eq!(
        modifier_codes,
        ["ControlLeft", "ControlRight", "AltLeft", "AltRight", "ShiftLeft", "ShiftRight"]
    );
}

#[test]
fn test_repeated_calls_are_stable() {
    for _ in 0..3 {
        for &(code, _) in table() {
            assert_eq!(code_to_key(code), code_to_key(code));
            assert_eq!(KeyMapper::modifier_for_code(code), KeyMapper::modifier_for_code(code));
        }
    }
}

#[test]
fn test_lookups_from_many_threads_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                table()
                    .iter()
                    .map(|&(code, _)| code_to_key(code))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let baseline: Vec<_> = table().iter().map(|&(code, _)| code_to_key(code)).collect();
    for handle in handles {
        assert_eq!(handle.join().expect("lookup thread panicked"), baseline);
    }
}

#[test]
fn test_modifier_serializes_as_canonical_name() {
    let json = serde_json::to_string(&Modifier::Ctrl).expect("serialize");
    assert_eq!(json, "\"ctrl\"");
    let back: Modifier = serde_json::from_str("\"shift\"").expect("deserialize");
    assert_eq!(back, Modifier::Shift);
    assert!(serde_json::from_str::<Modifier>("\"meta\"").is_err());
}
