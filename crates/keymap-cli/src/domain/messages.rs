//! Output record for one resolved code.
//!
//! In JSON mode every record is written as a single-line object:
//!
//! ```json
//! {"code":"KeyA","key":"a","modifier":false}
//! {"code":"CapsLock","key":null,"modifier":false}
//! ```
//!
//! `key` is `null` when the code is unknown or is a suppressed lock key.

use serde::{Deserialize, Serialize};

/// The result of resolving one DOM code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyResolution {
    /// The input code, exactly as received (after trimming).
    pub code: String,

    /// Canonical key name, or `None` when nothing applies to this code.
    pub key: Option<String>,

    /// `true` when `key` is `ctrl`, `alt`, or `shift`.
    pub modifier: bool,
}

impl KeyResolution {
    /// Returns `true` if the code resolved to a canonical key.
    pub fn is_mapped(&self) -> bool {
        self.key.is_some()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
