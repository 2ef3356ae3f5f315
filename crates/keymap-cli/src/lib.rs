//! keymap-cli library crate.
//!
//! Resolves DOM `KeyboardEvent.code` strings to canonical shortcut key names
//! from the command line, one code per line of output.
//!
//! # Architecture
//!
//! ```text
//! codes (argv or stdin lines)
//!         ↓
//! [keymap-cli]
//!   ├── domain/       Pure types: KeyResolution record, CliConfig
//!   └── application/  resolve_code → render → resolve_all (BufRead → Write)
//!         ↓
//! stdout (text or NDJSON)
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O; it depends only on `serde` and `clap` derives.
//! - `application` depends on `domain` and `keymap-core`, and is generic over
//!   its reader and writer so it can be tested against in-memory buffers.
//! - `main.rs` owns argument parsing, logging setup, and the real stdin/stdout.

/// Domain layer: output records and configuration (no I/O).
pub mod domain;

/// Application layer: resolution and rendering logic.
pub mod application;
