//! Rule to forbid exception-based control flow.
//!
//! # Rationale
//!
//! A `catch` block turns a failure into a jump. Functional code returns the
//! failure as a value (a Result or Either) so callers see it in the type of
//! what they get back.
//!
//! # Detected Patterns
//!
//! - `try { } catch (e) { }`, including handlers that only rethrow
//! - `try { } catch { } finally { }`
//!
//! `try { } finally { }` without a `catch` clause handles nothing and is not
//! flagged.
//!
//! # Suppression
//!
//! - `// fp-lint: allow(TryCatch) reason="..."` comment (a reason is
//!   required because the rule defaults to error)

use fp_lint_core::utils::{walk, Walk};
use fp_lint_core::{FileContext, Node, Rule, Severity, Suggestion, Violation};

/// Rule code for TryCatch.
pub const CODE: &str = "FP004";

/// Rule id for TryCatch.
pub const ID: &str = "TryCatch";

/// Forbids `try`/`catch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TryCatch;

impl Rule for TryCatch {
    fn id(&self) -> &'static str {
        ID
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids exception-based control flow (`try`/`catch`)"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn inspect(&self, ctx: &FileContext<'_>, node: Node<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(node, |n| {
            if n.kind() == "try_statement" && has_catch_clause(n) {
                violations.push(
                    ctx.violation(
                        self,
                        n,
                        "`try`/`catch` used for control flow; return a Result/Either value instead",
                    )
                    .with_suggestion(Suggestion::new(
                        "Wrap the fallible call so it returns Left(error) or Right(value)",
                    )),
                );
            }
            Walk::Descend
        });

        violations
    }
}

fn has_catch_clause(node: Node<'_>) -> bool {
    node.child_by_field_name("handler")
        .is_some_and(|h| h.kind() == "catch_clause")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, positions};

    #[test]
    fn flags_try_catch() {
        let src = "const f = () => {\n  try {\n    g();\n  } catch (e) {\n    h(e);\n  }\n};\n";
        let v = check(TryCatch, src);
        assert_eq!(positions(&v), vec![(2, 3)]);
        assert_eq!(v[0].severity, Severity::Error);
        assert!(v[0].message.contains("Result/Either"));
    }

    #[test]
    fn rethrowing_handler_is_still_flagged() {
        let src = "try { g(); } catch (e) { throw e; }\n";
        assert_eq!(check(TryCatch, src).len(), 1);
    }

    #[test]
    fn optional_catch_binding_is_flagged() {
        let src = "try { g(); } catch { h(); } finally { done(); }\n";
        assert_eq!(check(TryCatch, src).len(), 1);
    }

    #[test]
    fn try_finally_is_not_flagged() {
        let src = "try { g(); } finally { done(); }\n";
        assert!(check(TryCatch, src).is_empty());
    }

    #[test]
    fn nested_try_blocks_are_separate_findings() {
        let src = "try {\n  try { a(); } catch (e) {}\n} catch (e) {}\n";
        assert_eq!(positions(&check(TryCatch, src)), vec![(1, 1), (2, 3)]);
    }
}
