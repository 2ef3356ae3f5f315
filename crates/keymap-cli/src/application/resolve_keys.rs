//! Code resolution and output rendering.
//!
//! All functions here are free of global state.  The streaming entry points
//! take any `BufRead`/`Write` pair, so the binary passes locked stdin/stdout
//! and tests pass byte buffers.
//!
//! # Pipeline
//!
//! ```text
//! "KeyA" ──resolve_code──▶ KeyResolution ──render──▶ "KeyA\ta\t-"
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::debug;

use keymap_core::{code_to_key, is_modifier};

use crate::domain::{CliConfig, KeyResolution, OutputFormat};

// ── Error type ────────────────────────────────────────────────────────────────

/// Errors that can occur while streaming codes through the resolver.
///
/// Resolution itself never fails; only reading input, writing output, and
/// JSON encoding can.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record could not be encoded as JSON.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

// ── Statistics ────────────────────────────────────────────────────────────────

/// Counters collected over one resolver run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Codes processed (blank input lines are not counted).
    pub total: usize,
    /// Codes that resolved to a canonical key.
    pub mapped: usize,
    /// Codes that were unknown or suppressed.
    pub unmapped: usize,
}

impl ResolveStats {
    fn record(&mut self, resolution: &KeyResolution) {
        self.total += 1;
        if resolution.is_mapped() {
            self.mapped += 1;
        } else {
            self.unmapped += 1;
        }
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Resolves one DOM code into an output record.
pub fn resolve_code(code: &str) -> KeyResolution {
    let key = code_to_key(code);
    KeyResolution {
        code: code.to_string(),
        key: key.map(str::to_string),
        modifier: key.is_some_and(is_modifier),
    }
}

/// Renders a record as a single line (without the trailing newline).
///
/// In text mode the code column is written with Rust escapes
/// (`str::escape_debug`), so a code containing a tab or newline cannot add
/// columns or lines.  Ordinary codes such as `KeyA` are written unchanged.
///
/// # Errors
///
/// Returns [`ResolveError::Json`] if JSON encoding fails.
pub fn render(resolution: &KeyResolution, format: OutputFormat) -> Result<String, ResolveError> {
    match format {
        OutputFormat::Text => {
            let key = resolution.key.as_deref().unwrap_or("-");
            let modifier = if resolution.modifier { "modifier" } else { "-" };
            Ok(format!(
                "{}\t{}\t{}",
                resolution.code.escape_debug(),
                key,
                modifier
            ))
        }
        OutputFormat::Json => Ok(serde_json::to_string(resolution)?),
    }
}

// ── Streaming ─────────────────────────────────────────────────────────────────

/// Resolves every code in `codes` and writes one line per code to `out`.
///
/// Codes that resolve to nothing are omitted when `config.skip_unmapped` is
/// set; they are still counted in the returned stats.
///
/// # Errors
///
/// Returns [`ResolveError`] if writing or JSON encoding fails.
pub fn resolve_all<I, S, W>(
    codes: I,
    out: &mut W,
    config: &CliConfig,
) -> Result<ResolveStats, ResolveError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut stats = ResolveStats::default();
    for code in codes {
        emit(code.as_ref(), out, config, &mut stats)?;
    }
    out.flush()?;
    Ok(stats)
}

/// Reads codes line by line from `input` and resolves each one.
///
/// Lines are trimmed; blank lines are skipped.
///
/// # Errors
///
/// Returns [`ResolveError::Io`] if a line cannot be read (including invalid
/// UTF-8) or output cannot be written.
pub fn resolve_lines<R, W>(
    input: R,
    out: &mut W,
    config: &CliConfig,
) -> Result<ResolveStats, ResolveError>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ResolveStats::default();
    for line in input.lines() {
        let line = line?;
        let code = line.trim();
        if code.is_empty() {
            continue;
        }
        emit(code, out, config, &mut stats)?;
    }
    out.flush()?;
    Ok(stats)
}

fn emit<W: Write>(
    code: &str,
    out: &mut W,
    config: &CliConfig,
    stats: &mut ResolveStats,
) -> Result<(), ResolveError> {
    let resolution = resolve_code(code);
    stats.record(&resolution);

    if !resolution.is_mapped() {
        debug!(code, "no canonical key for code");
        if config.skip_unmapped {
            return Ok(());
        }
    }

    writeln!(out, "{}", render(&resolution, config.format)?)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
