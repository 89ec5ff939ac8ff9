//! Rule to forbid `switch` statements.
//!
//! A `switch` is flagged once, whatever its case count. Replace it with a
//! lookup object or a conditional combinator such as `R.cond`.

use fp_lint_core::utils::{walk, Walk};
use fp_lint_core::{FileContext, Node, Rule, Severity, Suggestion, Violation};

/// Rule code for SwitchStatement.
pub const CODE: &str = "FP003";

/// Rule id for SwitchStatement.
pub const ID: &str = "SwitchStatement";

/// Forbids `switch` statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchStatement;

impl Rule for SwitchStatement {
    fn id(&self) -> &'static str {
        ID
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids `switch` statements"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn inspect(&self, ctx: &FileContext<'_>, node: Node<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(node, |n| {
            if n.kind() == "switch_statement" {
                violations.push(
                    ctx.violation(self, n, "`switch` statement")
                        .with_suggestion(Suggestion::new(
                            "Use a lookup object or R.cond to select a value",
                        )),
                );
            }
            Walk::Descend
        });

        violations
    }
}
