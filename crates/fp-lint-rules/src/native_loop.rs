//! Rule to forbid native loop statements.
//!
//! # Detected Patterns
//!
//! - `for (init; test; update)`
//! - `for (k in obj)` and `for (x of xs)`
//! - `while (test)` and `do { } while (test)`
//!
//! Nested loops are reported separately. Higher-order iteration
//! (`xs.map(f)`, `R.reduce(...)`) is not a loop statement and is never flagged.
//!
//! # Suppression
//!
//! - `// fp-lint: allow(NativeLoop)` comment

use fp_lint_core::utils::{walk, Walk};
use fp_lint_core::{FileContext, Node, Rule, Severity, Suggestion, Violation};

/// Rule code for NativeLoop.
pub const CODE: &str = "FP002";

/// Rule id for NativeLoop.
pub const ID: &str = "NativeLoop";

/// Forbids `for`, `for…in`, `for…of`, `while` and `do…while`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeLoop;

impl Rule for NativeLoop {
    fn id(&self) -> &'static str {
        ID
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids `for`, `for…in`, `for…of`, `while` and `do…while`"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn inspect(&self, ctx: &FileContext<'_>, node: Node<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(node, |n| {
            if let Some(form) = loop_form(n) {
                violations.push(
                    ctx.violation(self, n, format!("`{form}` loop"))
                        .with_suggestion(Suggestion::new(
                            "Use map/filter/reduce (e.g. Ramda) or recursion instead",
                        )),
                );
            }
            Walk::Descend
        });

        violations
    }
}

/// Source form of a loop statement, or `None` if `node` is not a loop.
fn loop_form(node: Node<'_>) -> Option<&'static str> {
    match node.kind() {
        "for_statement" => Some("for"),
        "for_in_statement" => {
            let mut cursor = node.walk();
            let is_of = node
                .children(&mut cursor)
                .any(|c| !c.is_named() && c.kind() == "of");
            Some(if is_of { "for...of" } else { "for...in" })
        }
        "while_statement" => Some("while"),
        "do_statement" => Some("do...while"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, positions};

    #[test]
    fn flags_every_loop_form() {
        let src = "\
for (const i = 0; false; ) {}
for (const k in obj) {}
for (const x of xs) {}
while (ready()) {}
do {} while (ready());
";
        let v = check(NativeLoop, src);
        assert_eq!(
            positions(&v),
            vec![(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]
        );
        let messages: Vec<&str> = v.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "`for` loop",
                "`for...in` loop",
                "`for...of` loop",
                "`while` loop",
                "`do...while` loop",
            ]
        );
    }

    #[test]
    fn fixed_range_loop_still_flagged() {
        let v = check(NativeLoop, "for (let i = 0; i < 10; i++) {}\n");
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].severity, Severity::Warning);
    }

    #[test]
    fn nested_loops_are_separate_findings() {
        let src = "while (a) {\n  for (const x of xs) {}\n}\n";
        assert_eq!(positions(&check(NativeLoop, src)), vec![(1, 1), (2, 3)]);
    }

    #[test]
    fn loops_inside_functions_are_flagged() {
        let src = "function f(xs) {\n  for (const x of xs) {}\n}\n";
        assert_eq!(positions(&check(NativeLoop, src)), vec![(2, 3)]);
    }

    #[test]
    fn higher_order_iteration_is_fine() {
        let src = "const ys = xs.map((x) => x * 2).filter(Boolean);\n";
        assert!(check(NativeLoop, src).is_empty());
    }
}
