//! Canonical key vocabulary.
//!
//! Canonical key names are short lowercase strings: letters (`"a"`), digits
//! (`"1"`), symbols (`"+"`, `"/"`), and named keys (`"enter"`, `"esc"`,
//! `"f1"`).  Left and right variants of a physical key share one name, so
//! `ControlLeft` and `ControlRight` both become `"ctrl"`.
//!
//! # Modifiers
//!
//! Exactly three canonical names are modifiers: `"ctrl"`, `"alt"`, and
//! `"shift"`.  There is no `"meta"` in this vocabulary.
//!
//! # Suppressed names
//!
//! The lock keys (`"numlock"`, `"scrolllock"`, `"capslock"`) are part of the
//! vocabulary and appear in the code table, but the mapper never returns them.
//! [`is_suppressed`] is the filter the mapper applies to its lookup result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical names that the code mapper filters out of its results.
pub const SUPPRESSED_KEYS: [&str; 3] = ["numlock", "scrolllock", "capslock"];

/// Returns `true` if `key` is exactly `"ctrl"`, `"alt"`, or `"shift"`.
///
/// The comparison is exact: `"Ctrl"`, `" ctrl"`, and `""` are not modifiers.
pub fn is_modifier(key: &str) -> bool {
    Modifier::from_key(key).is_some()
}

/// Returns `true` if `key` is a lock-key name the mapper never surfaces.
pub fn is_suppressed(key: &str) -> bool {
    SUPPRESSED_KEYS.contains(&key)
}

/// A modifier key in the canonical vocabulary.
///
/// Serializes as its canonical name (`"ctrl"`, `"alt"`, `"shift"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
}

impl Modifier {
    /// All modifiers, in canonical order.
    pub const ALL: [Modifier; 3] = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift];

    /// Returns the canonical key name for this modifier.
    pub fn as_key(self) -> &'static str {
        match self {
            Modifier::Ctrl => "ctrl",
            Modifier::Alt => "alt",
            Modifier::Shift => "shift",
        }
    }

    /// Classifies a canonical key name.
    ///
    /// Returns `None` for every name that is not exactly a modifier name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ctrl" => Some(Modifier::Ctrl),
            "alt" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Error returned when parsing a [`Modifier`] from a string that is not a
/// canonical modifier name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a modifier key name: {0:?}")]
pub struct ParseModifierError(pub String);

impl FromStr for Modifier {
    type Err = ParseModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modifier::from_key(s).ok_or_else(|| ParseModifierError(s.to_string()))
    }
}
