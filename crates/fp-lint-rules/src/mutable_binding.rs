//! Rule to forbid reassignable variable bindings.
//!
//! # Rationale
//!
//! Functional code never reassigns a name. A `const` binding documents that
//! the value is fixed; new values are derived, not written over old ones.
//!
//! # Detected Patterns
//!
//! - `let` declarations, including destructuring (`let { a } = obj`)
//! - `var` declarations
//! - `let`/`var` heads of `for…in` and `for…of` loops
//! - loop counters (`for (let i = 0; …)`), with no exemption
//!
//! One finding is reported per declaration, however many names it binds.
//!
//! # Suppression
//!
//! - `// fp-lint: allow(MutableBinding)` comment

use fp_lint_core::utils::{walk, Walk};
use fp_lint_core::{FileContext, Node, Rule, Severity, Suggestion, Violation};

/// Rule code for MutableBinding.
pub const CODE: &str = "FP001";

/// Rule id for MutableBinding.
pub const ID: &str = "MutableBinding";

/// Forbids `let` and `var` bindings.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutableBinding;

impl Rule for MutableBinding {
    fn id(&self) -> &'static str {
        ID
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids reassignable `let`/`var` bindings"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn inspect(&self, ctx: &FileContext<'_>, node: Node<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(node, |n| {
            let keyword = match n.kind() {
                "variable_declaration" => Some(n),
                "lexical_declaration" => keyword_child(n, &["let"]),
                "for_in_statement" => keyword_child(n, &["let", "var"]),
                _ => None,
            };

            if let Some(keyword) = keyword {
                let kw = ctx.text(keyword).split_whitespace().next().unwrap_or("var");
                violations.push(
                    ctx.violation(self, keyword, format!("`{kw}` declares a reassignable binding"))
                        .with_suggestion(Suggestion::new(
                            "Declare it with `const` and derive new values instead of reassigning",
                        )),
                );
            }
            Walk::Descend
        });

        violations
    }
}

/// First anonymous direct child whose kind is one of `keywords`.
fn keyword_child<'t>(node: Node<'t>, keywords: &[&str]) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find(|c| !c.is_named() && keywords.contains(&c.kind()));
    found
}
