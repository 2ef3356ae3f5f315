//! Key code translation for keyboard-shortcut matching.
//!
//! The canonical representation is a short lowercase key name (`"a"`, `"1"`,
//! `"enter"`, `"ctrl"`).  Browser `KeyboardEvent.code` strings are translated
//! to canonical names at the input boundary; everything downstream works with
//! canonical names only.

pub mod canonical;
pub mod dom_code;

pub use canonical::{is_modifier, is_suppressed, Modifier, SUPPRESSED_KEYS};
pub use dom_code::{code_to_key, lookup_raw, table};

/// Unified key mapper providing all translation directions.
pub struct KeyMapper;

impl KeyMapper {
    /// Translates a DOM `KeyboardEvent.code` string to a canonical key name.
    ///
    /// Returns `None` if the code is unknown or resolves to a suppressed
    /// lock key.
    pub fn code_to_key(code: &str) -> Option<&'static str> {
        dom_code::code_to_key(code)
    }

    /// Returns `true` if `key` is one of the canonical modifier names.
    pub fn is_modifier(key: &str) -> bool {
        canonical::is_modifier(key)
    }

    /// Translates a DOM code straight to a [`Modifier`].
    ///
    /// Returns `None` for codes that are unknown, suppressed, or resolve to a
    /// non-modifier key.
    pub fn modifier_for_code(code: &str) -> Option<Modifier> {
        dom_code::code_to_key(code).and_then(Modifier::from_key)
    }
}
