//! CLI configuration types.
//!
//! [`CliConfig`] holds every runtime setting.  `main.rs` builds it from
//! command-line arguments and environment variables; tests construct it
//! directly.

use clap::ValueEnum;

/// How resolved codes are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated `code`, `key`, `modifier` columns; `-` marks an empty cell.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// All runtime configuration for the resolver.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Output encoding for each resolved code.
    pub format: OutputFormat,

    /// Drop codes that resolve to nothing instead of printing them.
    pub skip_unmapped: bool,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
