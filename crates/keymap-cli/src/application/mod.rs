//! Application layer for keymap-cli.
//!
//! The application layer is responsible for:
//!
//! - Resolving a code into a [`KeyResolution`](crate::domain::KeyResolution)
//! - Rendering records as text or JSON lines
//! - Streaming a sequence of codes from a reader to a writer
//! - Defining the `ResolveError` type for pipeline failures

pub mod resolve_keys;

pub use resolve_keys::{
    render, resolve_all, resolve_code, resolve_lines, ResolveError, ResolveStats,
};
