//! Rule to forbid classes.
//!
//! Both `class Foo {}` declarations and `const Foo = class {}` expressions
//! are flagged. There are no exemptions; data belongs in plain objects and
//! behavior in functions over them.

use fp_lint_core::utils::{walk, Walk};
use fp_lint_core::{FileContext, Node, Rule, Severity, Suggestion, Violation};

/// Rule code for ClassDeclaration.
pub const CODE: &str = "FP005";

/// Rule id for ClassDeclaration.
pub const ID: &str = "ClassDeclaration";

/// Forbids class declarations and class expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassDeclaration;

impl Rule for ClassDeclaration {
    fn id(&self) -> &'static str {
        ID
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids class declarations and expressions"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn inspect(&self, ctx: &FileContext<'_>, node: Node<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(node, |n| {
            // Expressions share the `class` kind with the anonymous keyword token.
            let is_class = match n.kind() {
                "class_declaration" => true,
                "class" => n.is_named(),
                _ => false,
            };
            if is_class {
                let message = match n.child_by_field_name("name") {
                    Some(name) => format!("Class `{}` declared", ctx.text(name)),
                    None => "Anonymous class expression".to_string(),
                };
                violations.push(ctx.violation(self, n, message).with_suggestion(
                    Suggestion::new("Use plain objects and functions that operate on them"),
                ));
            }
            Walk::Descend
        });

        violations
    }
}
