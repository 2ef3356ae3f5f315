//! keymap — resolve DOM key codes to canonical shortcut key names.
//!
//! # Usage
//!
//! ```text
//! keymap [OPTIONS] [CODES]...
//!
//! Arguments:
//!   [CODES]...  DOM KeyboardEvent.code values; read from stdin when omitted
//!
//! Options:
//!   --format <FORMAT>   Output format: text | json [default: text]
//!   --skip-unmapped     Omit codes that resolve to nothing
//! ```
//!
//! # Environment variable overrides
//!
//! CLI args take precedence when both are present.
//!
//! | Variable               | Default | Description                   |
//! |------------------------|---------|-------------------------------|
//! | `KEYMAP_FORMAT`        | `text`  | Output format                 |
//! | `KEYMAP_SKIP_UNMAPPED` | `false` | Omit unmapped codes           |
//! | `RUST_LOG`             | `warn`  | Log filter (logs go to stderr)|

use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keymap_cli::application::{resolve_all, resolve_lines};
use keymap_cli::domain::{CliConfig, OutputFormat};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Resolve DOM `KeyboardEvent.code` values to canonical shortcut key names.
#[derive(Debug, Parser)]
#[command(
    name = "keymap",
    about = "Resolve DOM KeyboardEvent.code values to canonical shortcut key names",
    version
)]
struct Cli {
    /// Codes to resolve.  When none are given, codes are read from stdin,
    /// one per line.
    codes: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "KEYMAP_FORMAT")]
    format: OutputFormat,

    /// Omit codes that are unknown or suppressed instead of printing them.
    ///
    /// The env value is falsey-parsed: `0`, `false`, `no`, `off`, `n`, `f`
    /// and the empty string disable it; anything else (`1`, `yes`, `true`)
    /// enables it.
    #[arg(
        long,
        env = "KEYMAP_SKIP_UNMAPPED",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    skip_unmapped: bool,
}

impl Cli {
    /// Splits the parsed arguments into the positional codes and a [`CliConfig`].
    fn into_parts(self) -> (Vec<String>, CliConfig) {
        let config = CliConfig {
            format: self.format,
            skip_unmapped: self.skip_unmapped,
        };
        (self.codes, config)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let (codes, config) = Cli::parse().into_parts();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let stats = if codes.is_empty() {
        let stdin = io::stdin();
        resolve_lines(stdin.lock(), &mut out, &config)
            .context("failed to resolve codes from stdin")?
    } else {
        resolve_all(&codes, &mut out, &config).context("failed to resolve codes")?
    };

    info!(
        total = stats.total,
        mapped = stats.mapped,
        unmapped = stats.unmapped,
        "resolved key codes"
    );
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
