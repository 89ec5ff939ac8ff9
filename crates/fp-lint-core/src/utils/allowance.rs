//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // fp-lint: allow(MutableBinding) reason="accumulator in hot path"
//! /* fp-lint: allow(NativeLoop, FP001) */
//! ```
//!
//! A directive applies to its own line and to the line after it. Rules are
//! named by id or by code.

use std::collections::HashSet;

/// Marker that introduces a directive inside a comment.
const DIRECTIVE_PREFIX: &str = "fp-lint:";

/// Result of checking for allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
pub struct AllowDirective {
    /// Rule ids or codes that are allowed.
    pub rules: HashSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

impl AllowDirective {
    /// Whether this directive covers the rule with `rule_id` and `code`.
    #[must_use]
    pub fn names(&self, rule_id: &str, code: &str) -> bool {
        self.rules
            .iter()
            .any(|r| r == "all" || r == rule_id || r.eq_ignore_ascii_case(code))
    }
}

/// Checks the finding's line and the line above it for an allow directive.
///
/// A directive names rules by id (exact) or by code (case-insensitive), or
/// uses `all`.
///
/// # Arguments
///
/// * `lines` - Source split into lines, once per file
/// * `line` - Line number of the finding (1-indexed)
/// * `rule_id` - Id of the rule to check for
/// * `code` - Code of the same rule
#[must_use]
pub fn check_allow_with_reason(
    lines: &[&str],
    line: usize,
    rule_id: &str,
    code: &str,
) -> AllowCheck {
    for check_line in [line, line.saturating_sub(1)] {
        let Some(text) = check_line.checked_sub(1).and_then(|idx| lines.get(idx)) else {
            continue;
        };

        if let Some(directive) = parse_allow_directive(text) {
            if directive.names(rule_id, code) {
                return AllowCheck::Allowed {
                    reason: directive.reason,
                };
            }
        }
    }

    AllowCheck::Denied
}

/// Parses an allowance directive from a line that may contain a comment.
///
/// Every `//` or `/*` on the line is tried, so a `//` inside a string
/// literal (`"http://…"`) does not hide a trailing directive.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let mut starts: Vec<usize> = line
        .match_indices("//")
        .chain(line.match_indices("/*"))
        .map(|(idx, _)| idx)
        .collect();
    starts.sort_unstable();
    starts
        .into_iter()
        .find_map(|start| parse_comment(&line[start + 2..]))
}

/// Parses the text after a comment opener.
fn parse_comment(comment: &str) -> Option<AllowDirective> {
    let comment = comment.trim_start_matches(&['/', '*', '!'][..]);
    let comment = comment.trim_end().trim_end_matches("*/").trim();

    let directive = comment.strip_prefix(DIRECTIVE_PREFIX)?.trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules: HashSet<String> = allow_content[..paren_end]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = rest
        .strip_prefix("reason=")
        .map(str::trim)
        .and_then(|r| r.strip_prefix('"'))
        .and_then(|r| r.find('"').map(|end| r[..end].to_string()))
        .filter(|r| !r.trim().is_empty());

    Some(AllowDirective { rules, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_comment_directive() {
        let directive = parse_allow_directive("// fp-lint: allow(MutableBinding)").unwrap();
        assert!(directive.rules.contains("MutableBinding"));
        assert!(directive.reason.is_none());
    }

    #[test]
    fn parses_block_comment_directive_with_reason() {
        let directive =
            parse_allow_directive("/* fp-lint: allow(TryCatch) reason=\"JSON.parse boundary\" */")
                .unwrap();
        assert!(directive.rules.contains("TryCatch"));
        assert_eq!(directive.reason.as_deref(), Some("JSON.parse boundary"));
    }

    #[test]
    fn parses_multiple_rules() {
        let directive =
            parse_allow_directive("  // fp-lint: allow(NativeLoop, MutableBinding)").unwrap();
        assert!(directive.rules.contains("NativeLoop"));
        assert!(directive.rules.contains("MutableBinding"));
    }

    #[test]
    fn parses_trailing_comment() {
        let directive =
            parse_allow_directive("let i = 0; // fp-lint: allow(MutableBinding) reason=\"x\"")
                .unwrap();
        assert!(directive.rules.contains("MutableBinding"));
    }

    #[test]
    fn finds_directive_after_url_in_string() {
        let line = "const u = \"http://x\"; // fp-lint: allow(TopLevelSideEffect) reason=\"cfg\"";
        let directive = parse_allow_directive(line).unwrap();
        assert!(directive.rules.contains("TopLevelSideEffect"));
        assert_eq!(directive.reason.as_deref(), Some("cfg"));
    }

    #[test]
    fn ignores_plain_comments_and_code() {
        assert!(parse_allow_directive("// just a comment").is_none());
        assert!(parse_allow_directive("let x = 1;").is_none());
        assert!(parse_allow_directive("// fp-lint: allow()").is_none());
    }

    #[test]
    fn empty_reason_counts_as_missing() {
        let directive = parse_allow_directive("// fp-lint: allow(TryCatch) reason=\"\"").unwrap();
        assert!(directive.reason.is_none());
    }

    fn lines(content: &str) -> Vec<&str> {
        content.lines().collect()
    }

    #[test]
    fn applies_to_same_and_next_line() {
        let src = lines("// fp-lint: allow(MutableBinding)\nlet a = 1;\nlet b = 2;\n");
        assert!(check_allow_with_reason(&src, 2, "MutableBinding", "FP001").is_allowed());
        assert!(!check_allow_with_reason(&src, 3, "MutableBinding", "FP001").is_allowed());
        assert!(!check_allow_with_reason(&src, 2, "NativeLoop", "FP002").is_allowed());
    }

    #[test]
    fn matches_rule_code_case_insensitively() {
        let src = lines("let a = 1; // fp-lint: allow(fp001)\n");
        assert!(check_allow_with_reason(&src, 1, "MutableBinding", "FP001").is_allowed());
        assert!(!check_allow_with_reason(&src, 1, "NativeLoop", "FP002").is_allowed());
    }

    #[test]
    fn rule_id_match_is_exact() {
        let src = lines("let a = 1; // fp-lint: allow(mutablebinding)\n");
        assert!(!check_allow_with_reason(&src, 1, "MutableBinding", "FP001").is_allowed());
    }

    #[test]
    fn allow_all_matches_every_rule() {
        let src = lines("while (x) {} // fp-lint: allow(all) reason=\"legacy\"\n");
        let check = check_allow_with_reason(&src, 1, "NativeLoop", "FP002");
        assert!(check.is_allowed());
        assert_eq!(check.reason(), Some("legacy"));
    }

    #[test]
    fn denied_outside_range() {
        let src = lines("let x = 1;\n");
        let check = check_allow_with_reason(&src, 1, "MutableBinding", "FP001");
        assert!(!check.is_allowed());
        assert_eq!(check.reason(), None);
        assert!(!check_allow_with_reason(&[], 0, "MutableBinding", "FP001").is_allowed());
        assert!(!check_allow_with_reason(&src, 7, "MutableBinding", "FP001").is_allowed());
    }
}
