//! Rule engine: applies rules to one parsed file.
//!
//! The engine is stateless. Every rule inspects every top-level statement
//! independently and the combined findings come back in report order.

use std::path::Path;
use tree_sitter::Tree;
use tracing::trace;

use crate::config::Config;
use crate::context::FileContext;
use crate::parser::{first_syntax_error, JsParser, ParseFailure};
use crate::rule::RuleBox;
use crate::types::{Severity, Suggestion, Violation};
use crate::utils::allowance::check_allow_with_reason;

/// Named children of `program` that are not statements.
const NON_STATEMENTS: &[&str] = &["comment", "hash_bang_line"];

/// Runs `rules` over `tree` with default configuration.
///
/// # Errors
///
/// Returns [`ParseFailure`] if the tree contains syntax errors.
pub fn run(
    ctx: &FileContext<'_>,
    tree: &Tree,
    rules: &[RuleBox],
) -> Result<Vec<Violation>, ParseFailure> {
    run_with_config(ctx, tree, rules, &Config::default())
}

/// Runs `rules` over `tree`, applying severity overrides from `config` and
/// allow directives found in the source.
///
/// # Errors
///
/// Returns [`ParseFailure`] if the tree contains syntax errors.
pub fn run_with_config(
    ctx: &FileContext<'_>,
    tree: &Tree,
    rules: &[RuleBox],
    config: &Config,
) -> Result<Vec<Violation>, ParseFailure> {
    let root = tree.root_node();
    if let Some(failure) = first_syntax_error(ctx.path, ctx.content, root) {
        return Err(failure);
    }

    let mut cursor = root.walk();
    let statements: Vec<_> = root
        .named_children(&mut cursor)
        .filter(|n| !NON_STATEMENTS.contains(&n.kind()))
        .collect();

    let mut violations = Vec::new();
    for rule in rules {
        let severity = config.rule_severity(rule.id());
        for statement in &statements {
            let found = rule.inspect(ctx, *statement);
            trace!(rule = rule.id(), count = found.len(), "inspected statement");
            violations.extend(found.into_iter().map(|mut v| {
                if let Some(severity) = severity {
                    v.severity = severity;
                }
                v
            }));
        }
    }

    let lines: Vec<&str> = ctx.content.lines().collect();
    let mut violations: Vec<Violation> = violations
        .into_iter()
        .filter_map(|v| apply_allow_directive(&lines, v))
        .collect();
    violations.sort_by(Violation::report_order);
    Ok(violations)
}

/// Parses `source` and runs `rules` over it.
///
/// # Errors
///
/// Returns [`ParseFailure`] if the source cannot be parsed.
pub fn check_source(
    parser: &mut JsParser,
    path: &Path,
    source: &str,
    rules: &[RuleBox],
    config: &Config,
) -> Result<Vec<Violation>, ParseFailure> {
    let tree = parser.parse(path, source)?;
    let ctx = FileContext::new(path, source);
    run_with_config(&ctx, &tree, rules, config)
}

/// Suppresses a finding covered by an allow directive.
///
/// Suppressing an error-level finding requires a reason; without one the
/// finding is replaced by a warning about the missing reason.
fn apply_allow_directive(lines: &[&str], violation: Violation) -> Option<Violation> {
    let check = check_allow_with_reason(
        lines,
        violation.location.line,
        &violation.rule,
        &violation.code,
    );
    if !check.is_allowed() {
        return Some(violation);
    }
    if violation.severity < Severity::Error || check.reason().is_some() {
        return None;
    }

    let message = format!(
        "Allow directive for '{}' is missing required reason",
        violation.rule
    );
    Some(
        Violation::new(
            violation.code,
            violation.rule,
            Severity::Warning,
            violation.location,
            message,
        )
        .with_suggestion(Suggestion::new(
            "Add reason=\"...\" to explain why this exception is necessary",
        )),
    )
}
