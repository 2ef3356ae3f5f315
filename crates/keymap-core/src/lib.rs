//! # keymap-core
//!
//! Translation from browser physical-key codes (`KeyboardEvent.code`) to the
//! short canonical key names an application uses when matching keyboard
//! shortcuts, plus a classifier for the modifier keys among those names.
//!
//! This crate has no I/O and no mutable global state.  Every function is pure
//! and may be called concurrently from any number of threads.
//!
//! # Overview
//!
//! - **`keymap::dom_code`** – The fixed `code → key` table and the mapper that
//!   looks codes up in it.  Three lock-key names (`numlock`, `scrolllock`,
//!   `capslock`) exist in the table but are never returned by the mapper.
//!
//! - **`keymap::canonical`** – The canonical key vocabulary: modifier
//!   classification, the [`Modifier`] type, and the suppressed lock-key names.
//!
//! ```rust
//! use keymap_core::{code_to_key, is_modifier};
//!
//! assert_eq!(code_to_key("KeyA"), Some("a"));
//! assert_eq!(code_to_key("CapsLock"), None);
//! assert!(is_modifier("ctrl"));
//! assert!(!is_modifier("a"));
//! ```

pub mod keymap;

// Re-export the most-used items at the crate root so callers can write
// `keymap_core::code_to_key` instead of `keymap_core::keymap::dom_code::code_to_key`.
pub use keymap::canonical::{is_modifier, Modifier, ParseModifierError};
pub use keymap::dom_code::code_to_key;
pub use keymap::KeyMapper;
