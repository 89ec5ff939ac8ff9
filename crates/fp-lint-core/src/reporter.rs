//! Rendering of lint results.
//!
//! Rendering is a pure function of the [`LintResult`]: the same result always
//! renders to the same bytes. Writing the text out is the caller's job.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use crate::parser::ParseFailure;
use crate::types::{LintResult, Severity, Violation};

/// Output format for lint results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Multi-line listing grouped by file.
    #[default]
    Human,
    /// One JSON record per line.
    Machine,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "machine" => Ok(Self::Machine),
            other => Err(format!(
                "unknown format `{other}` (expected human or machine)"
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Machine => write!(f, "machine"),
        }
    }
}

/// Renders `result` in the requested format.
///
/// # Errors
///
/// Returns an error if a machine record cannot be serialized.
pub fn render(result: &LintResult, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(render_human(result)),
        OutputFormat::Machine => render_machine(result),
    }
}

#[derive(Default)]
struct FileEntries<'a> {
    violations: Vec<&'a Violation>,
    failures: Vec<&'a ParseFailure>,
}

fn group_by_file(result: &LintResult) -> BTreeMap<&Path, FileEntries<'_>> {
    let mut files: BTreeMap<&Path, FileEntries<'_>> = BTreeMap::new();
    for v in &result.violations {
        files
            .entry(v.location.file.as_path())
            .or_default()
            .violations
            .push(v);
    }
    for f in &result.failures {
        files.entry(f.file.as_path()).or_default().failures.push(f);
    }
    files
}

fn render_human(result: &LintResult) -> String {
    let mut out = String::new();

    if result.is_clean() {
        let _ = writeln!(out, "No findings ({} file(s) checked)", result.files_checked);
        return out;
    }

    for (file, entries) in group_by_file(result) {
        let _ = writeln!(out, "{}", file.display());
        for v in entries.violations {
            let _ = writeln!(
                out,
                "  {}:{}  {}  {}  {}",
                v.location.line, v.location.column, v.severity, v.message, v.rule
            );
            if let Some(suggestion) = &v.suggestion {
                let _ = writeln!(out, "      = help: {}", suggestion.message);
            }
        }
        for f in entries.failures {
            let _ = writeln!(
                out,
                "  {}:{}  {}  {}  parse-failure",
                f.line,
                f.column,
                Severity::Error,
                f.message
            );
        }
        out.push('\n');
    }

    let (errors, warnings) = result.count_by_severity();
    let _ = write!(
        out,
        "Found {errors} error(s), {warnings} warning(s) in {} file(s)",
        result.files_checked
    );
    if result.has_failures() {
        let _ = write!(out, ", {} file(s) failed to parse", result.failures.len());
    }
    out.push('\n');
    out
}

/// One line of machine output.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum Record<'a> {
    Finding {
        file: String,
        line: usize,
        column: usize,
        #[serde(rename = "ruleId")]
        rule_id: &'a str,
        code: &'a str,
        severity: Severity,
        message: &'a str,
    },
    ParseFailure {
        file: String,
        line: usize,
        column: usize,
        message: &'a str,
    },
    NoFindings {
        #[serde(rename = "filesChecked")]
        files_checked: usize,
    },
}

fn render_machine(result: &LintResult) -> Result<String, serde_json::Error> {
    let mut records = Vec::new();

    for (file, entries) in group_by_file(result) {
        let file = file.to_string_lossy();
        records.extend(entries.violations.into_iter().map(|v| Record::Finding {
            file: file.to_string(),
            line: v.location.line,
            column: v.location.column,
            rule_id: &v.rule,
            code: &v.code,
            severity: v.severity,
            message: &v.message,
        }));
        records.extend(entries.failures.into_iter().map(|f| Record::ParseFailure {
            file: file.to_string(),
            line: f.line,
            column: f.column,
            message: &f.message,
        }));
    }

    if records.is_empty() {
        records.push(Record::NoFindings {
            files_checked: result.files_checked,
        });
    }

    let mut out = String::new();
    for record in &records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}
