//! Lint command implementation.

use anyhow::{Context, Result};
use fp_lint_core::{Analyzer, LintResult, OutputFormat, RuleBox, Severity};
use fp_lint_rules::{all_rules, select_rules, validate_rule_ids};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config_resolver;

/// Arguments of `fp-lint lint`.
#[derive(Debug)]
pub struct LintArgs {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub rules: Vec<String>,
    pub exclude: Vec<String>,
    pub config: Option<PathBuf>,
}

/// How a completed lint run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintStatus {
    /// Nothing reached the failure threshold.
    Passed,
    /// At least one finding reached the failure threshold.
    Findings,
    /// At least one path could not be found, read or parsed.
    ParseFailures,
}

impl LintStatus {
    /// Classifies `result` against the `fail_on` threshold.
    ///
    /// Parse failures take precedence over findings.
    #[must_use]
    pub fn of(result: &LintResult, fail_on: Severity) -> Self {
        if result.has_failures() {
            Self::ParseFailures
        } else if result.has_violations_at(fail_on) {
            Self::Findings
        } else {
            Self::Passed
        }
    }

    /// Process exit code for this status.
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Passed => ExitCode::SUCCESS,
            Self::Findings => ExitCode::from(1),
            Self::ParseFailures => ExitCode::from(2),
        }
    }
}

/// Runs the lint command.
///
/// Rule selection and config are validated before any file is read.
pub fn run(args: &LintArgs) -> Result<LintStatus> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = config_resolver::resolve(&cwd, args.config.as_deref()).load()?;

    validate_rule_ids(config.configured_rule_ids()).context("Invalid [rules] table in config")?;
    let rules = active_rules(&args.rules)?;
    let fail_on = config.fail_on();

    let mut builder = Analyzer::builder()
        .paths(args.paths.iter().cloned())
        .rules(rules)
        .config(config);
    for pattern in &args.exclude {
        builder = builder.exclude(pattern.clone());
    }
    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Linting {} path(s) with rules: {}",
        args.paths.len(),
        analyzer.rule_ids().join(", ")
    );

    let result = analyzer
        .analyze()
        .with_context(|| format!("Analysis failed for {}", display_paths(&args.paths)))?;

    super::output::print(&result, args.format)?;

    Ok(LintStatus::of(&result, fail_on))
}

fn active_rules(requested: &[String]) -> Result<Vec<RuleBox>> {
    if requested.is_empty() {
        return Ok(all_rules());
    }
    Ok(select_rules(requested)?)
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_lint_core::{Location, ParseFailure, Violation};

    fn finding(severity: Severity) -> Violation {
        Violation::new(
            "FP001",
            "MutableBinding",
            severity,
            Location::new(PathBuf::from("a.js"), 1, 1),
            "msg",
        )
    }

    #[test]
    fn warnings_pass_by_default() {
        let mut result = LintResult::new();
        result.violations.push(finding(Severity::Warning));
        assert_eq!(LintStatus::of(&result, Severity::Error), LintStatus::Passed);
        assert_eq!(LintStatus::of(&result, Severity::Warning), LintStatus::Findings);
    }

    #[test]
    fn errors_fail() {
        let mut result = LintResult::new();
        result.violations.push(finding(Severity::Error));
        assert_eq!(LintStatus::of(&result, Severity::Error), LintStatus::Findings);
    }

    #[test]
    fn parse_failure_takes_precedence() {
        let mut result = LintResult::new();
        result.violations.push(finding(Severity::Error));
        result.failures.push(ParseFailure::new("b.js", 1, 1, "syntax error"));
        assert_eq!(
            LintStatus::of(&result, Severity::Error),
            LintStatus::ParseFailures
        );
    }

    #[test]
    fn unknown_rule_is_rejected() {
        let err = active_rules(&["NoSuchRule".to_string()]).err();
        assert!(err.is_some_and(|e| e.to_string().contains("NoSuchRule")));
    }

    #[test]
    fn empty_selection_means_all_rules() {
        assert_eq!(active_rules(&[]).unwrap().len(), 6);
    }
}
