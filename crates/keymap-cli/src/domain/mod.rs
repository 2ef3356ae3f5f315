//! Domain layer for keymap-cli.
//!
//! Pure types with no dependencies on I/O or the terminal: the record that
//! describes one resolved code, and the configuration that controls how
//! records are rendered.

pub mod config;
pub mod messages;

pub use config::{CliConfig, OutputFormat};
pub use messages::KeyResolution;
