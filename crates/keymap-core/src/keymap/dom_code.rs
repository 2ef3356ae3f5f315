//! DOM `KeyboardEvent.code` to canonical key name translation table.
//!
//! Reference: W3C UI Events KeyboardEvent code Values.
//!
//! # What is a `KeyboardEvent.code`?
//!
//! Browsers report two strings for every key event.  `key` is the character
//! or logical key produced under the active layout; `code` names the
//! *physical* key position, independent of layout.  Pressing the key labelled
//! "A" on a QWERTY keyboard yields `code = "KeyA"`; the same position on an
//! AZERTY keyboard also yields `"KeyA"` even though it types "q".
//!
//! `code` also distinguishes physical variants that shortcuts usually treat
//! as one key: `ControlLeft` vs `ControlRight`, `Digit1` vs `Numpad1`,
//! `Enter` vs `NumpadEnter`.  The table below folds those variants onto a
//! single canonical name.
//!
//! # How this table works
//!
//! The `(code, key)` pairs are written once, inside `dom_code_table!`.  The
//! macro expands them into two compile-time constants: the ordered slice
//! `DOM_CODE_TO_KEY_TABLE`, and a `match` over string literals used for
//! lookups.  Nothing is built at runtime.  Codes are unique (a repeated code
//! is an unreachable `match` arm); keys are not.
//!
//! The lock keys are kept in the table.  [`code_to_key`] filters them out by
//! the *resolved name*, not by the input code, so any code that resolves to a
//! suppressed name is hidden.  [`lookup_raw`] skips that filter.

use super::canonical::is_suppressed;

/// Translates a DOM `KeyboardEvent.code` to a canonical key name.
///
/// Returns `None` when the code is not in the table (including the empty
/// string and any malformed input) or when it resolves to one of the
/// suppressed lock keys (`numlock`, `scrolllock`, `capslock`).
///
/// Matching is exact and case-sensitive: `"keya"` is unknown.
pub fn code_to_key(code: &str) -> Option<&'static str> {
    let key = lookup_raw(code)?;
    if is_suppressed(key) {
        tracing::trace!(code, key, "suppressed lock key");
        return None;
    }
    Some(key)
}

/// Looks a code up in the table without applying the lock-key filter.
///
/// Returns `None` only for codes that are not in the table.
pub fn lookup_raw(code: &str) -> Option<&'static str> {
    match_code(code)
}

/// Returns the full translation table in declaration order.
pub fn table() -> &'static [(&'static str, &'static str)] {
    DOM_CODE_TO_KEY_TABLE
}

/// Expands one list of `(code, key)` literals into the ordered table and the
/// lookup `match`, so the two cannot drift apart.
macro_rules! dom_code_table {
    ($(($code:literal, $key:literal)),* $(,)?) => {
        /// Complete DOM code → canonical key table.
        ///
        /// Each code appears once.  Several codes share a key (row and numpad
        /// digits, both Enter keys, left and right modifiers).
        const DOM_CODE_TO_KEY_TABLE: &[(&str, &str)] = &[$(($code, $key)),*];

        fn match_code(code: &str) -> Option<&'static str> {
            match code {
                $($code => Some($key),)*
                _ => None,
            }
        }
    };
}

dom_code_table! {
    // ── Modifier keys ─────────────────────────────────────────────────────────
    ("ControlLeft", "ctrl"),
    ("ControlRight", "ctrl"),
    ("AltLeft", "alt"),
    ("AltRight", "alt"),
    ("ShiftLeft", "shift"),
    ("ShiftRight", "shift"),
    ("Space", "space"),
    ("Escape", "esc"),
    // ── Digit row ─────────────────────────────────────────────────────────────
    ("Digit1", "1"),
    ("Digit2", "2"),
    ("Digit3", "3"),
    ("Digit4", "4"),
    ("Digit5", "5"),
    ("Digit6", "6"),
    ("Digit7", "7"),
    ("Digit8", "8"),
    ("Digit9", "9"),
    ("Digit0", "0"),
    // ── Alphabet keys ─────────────────────────────────────────────────────────
    ("KeyA", "a"),
    ("KeyB", "b"),
    ("KeyC", "c"),
    ("KeyD", "d"),
    ("KeyE", "e"),
    ("KeyF", "f"),
    ("KeyG", "g"),
    ("KeyH", "h"),
    ("KeyI", "i"),
    ("KeyJ", "j"),
    ("KeyK", "k"),
    ("KeyL", "l"),
    ("KeyM", "m"),
    ("KeyN", "n"),
    ("KeyO", "o"),
    ("KeyP", "p"),
    ("KeyQ", "q"),
    ("KeyR", "r"),
    ("KeyS", "s"),
    ("KeyT", "t"),
    ("KeyU", "u"),
    ("KeyV", "v"),
    ("KeyW", "w"),
    ("KeyX", "x"),
    ("KeyY", "y"),
    ("KeyZ", "z"),
    // ── Punctuation / symbols ─────────────────────────────────────────────────
    ("Minus", "-"),
    ("Equal", "="),
    ("BracketLeft", "["),
    ("BracketRight", "]"),
    ("Semicolon", ";"),
    ("Quote", "'"),
    ("Backquote", "`"),
    ("Backslash", "\\"),
    ("Comma", ","),
    ("Period", "."),
    ("Slash", "/"),
    // ── Control keys ──────────────────────────────────────────────────────────
    ("Enter", "enter"),
    ("Tab", "tab"),
    ("Backspace", "backspace"),
    ("Delete", "del"),
    // ── Navigation cluster ────────────────────────────────────────────────────
    ("ArrowUp", "up"),
    ("ArrowDown", "down"),
    ("ArrowLeft", "left"),
    ("ArrowRight", "right"),
    ("PageUp", "pageup"),
    ("PageDown", "pagedown"),
    ("Home", "home"),
    ("End", "end"),
    ("Insert", "insert"),
    // ── Numpad ────────────────────────────────────────────────────────────────
    ("NumpadDivide", "/"),
    ("NumpadMultiply", "*"),
    ("NumpadSubtract", "-"),
    ("NumpadAdd", "+"),
    ("NumpadEnter", "enter"),
    ("NumpadDecimal", "."),
    ("Numpad0", "0"),
    ("Numpad1", "1"),
    ("Numpad2", "2"),
    ("Numpad3", "3"),
    ("Numpad4", "4"),
    ("Numpad5", "5"),
    ("Numpad6", "6"),
    ("Numpad7", "7"),
    ("Numpad8", "8"),
    ("Numpad9", "9"),
    // ── Function keys ─────────────────────────────────────────────────────────
    ("F1", "f1"),
    ("F2", "f2"),
    ("F3", "f3"),
    ("F4", "f4"),
    ("F5", "f5"),
    ("F6", "f6"),
    ("F7", "f7"),
    ("F8", "f8"),
    ("F9", "f9"),
    ("F10", "f10"),
    ("F11", "f11"),
    ("F12", "f12"),
    // ── System / lock keys ────────────────────────────────────────────────────
    ("PrintScreen", "printscreen"),
    ("ScrollLock", "scrolllock"),
    ("Pause", "pause"),
    ("CapsLock", "capslock"),
    ("NumLock", "numlock"),
}
