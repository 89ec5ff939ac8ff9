//! Writes rendered reports to stdout.

use anyhow::{Context, Result};
use fp_lint_core::reporter::{self, OutputFormat};
use fp_lint_core::LintResult;
use std::io::Write;

/// Renders `result` and writes it to stdout.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    let text = reporter::render(result, format).context("Failed to render report")?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write report")
}
