//! Rule to forbid side effects at module scope.
//!
//! # Rationale
//!
//! Importing a module should only define values. Anything that runs on
//! import (a call, a constructor, a write to existing state) makes load
//! order observable and the module impossible to reason about in isolation.
//!
//! # Detected Patterns
//!
//! Reachable from a top-level statement without entering a function body:
//!
//! - call expressions, including `const x = f()` and tagged templates
//! - `new` expressions
//! - assignments and compound assignments (`a = 1`, `a += 1`)
//! - updates (`i++`, `--i`)
//! - any of the above in a `static { ... }` block or a static field
//!   initializer, which run when the class is defined
//!
//! Only the outermost effect of an expression is reported, so
//! `total = sum(xs)` is one finding, not two.
//!
//! # Allowed Patterns
//!
//! - `const` bindings initialized by literals, objects, arrays or functions
//! - function and method bodies (they run only when invoked)
//! - instance field initializers (they run on construction)
//! - `import`/`export` declarations that contain none of the above
//!
//! # Suppression
//!
//! - `// fp-lint: allow(TopLevelSideEffect) reason="..."` comment

use fp_lint_core::utils::{walk, Walk};
use fp_lint_core::{FileContext, Node, Rule, Severity, Suggestion, Violation};

/// Rule code for TopLevelSideEffect.
pub const CODE: &str = "FP006";

/// Rule id for TopLevelSideEffect.
pub const ID: &str = "TopLevelSideEffect";

/// Node kinds whose contents only run when invoked.
const DEFERRED_SCOPES: &[&str] = &[
    "function_declaration",
    "generator_function_declaration",
    "function_expression",
    "function",
    "generator_function",
    "arrow_function",
    "method_definition",
];

/// Forbids calls and assignments at module scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopLevelSideEffect;

impl Rule for TopLevelSideEffect {
    fn id(&self) -> &'static str {
        ID
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids calls and assignments at module scope"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn inspect(&self, ctx: &FileContext<'_>, node: Node<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();

        walk(node, |n| {
            if DEFERRED_SCOPES.contains(&n.kind()) {
                return Walk::Skip;
            }
            if n.kind() == "field_definition" && !is_static(n) {
                return Walk::Skip;
            }
            let Some(effect) = effect_kind(n) else {
                return Walk::Descend;
            };
            violations.push(
                ctx.violation(self, n, format!("{effect} at module scope"))
                    .with_suggestion(Suggestion::new(
                        "Move the effect into a function that callers invoke explicitly",
                    )),
            );
            Walk::Skip
        });

        violations
    }
}

/// Returns true for a class member marked `static`.
fn is_static(member: Node<'_>) -> bool {
    let mut cursor = member.walk();
    let found = member.children(&mut cursor).any(|c| c.kind() == "static");
    found
}

/// Describes `node` if evaluating it has an effect.
fn effect_kind(node: Node<'_>) -> Option<&'static str> {
    match node.kind() {
        "call_expression" => Some("Function call"),
        "new_expression" => Some("Constructor call"),
        "assignment_expression" | "augmented_assignment_expression" => Some("Assignment"),
        "update_expression" => Some("Update"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{check, positions};

    fn messages(src: &str) -> Vec<String> {
        check(TopLevelSideEffect, src)
            .into_iter()
            .map(|v| v.message)
            .collect()
    }

    #[test]
    fn flags_bare_call() {
        let v = check(TopLevelSideEffect, "console.log('hi');\n");
        assert_eq!(positions(&v), vec![(1, 1)]);
        assert_eq!(v[0].message, "Function call at module scope");
        assert_eq!(v[0].severity, Severity::Error);
    }

    #[test]
    fn flags_call_in_const_initializer() {
        let v = check(TopLevelSideEffect, "const config = loadConfig();\n");
        assert_eq!(positions(&v), vec![(1, 16)]);
    }

    #[test]
    fn reports_outermost_effect_only() {
        assert_eq!(messages("total = sum(map(xs));\n"), vec!["Assignment at module scope"]);
        assert_eq!(messages("f(g(), h());\n").len(), 1);
    }

    #[test]
    fn flags_each_effect_kind() {
        let src = "\
const d = new Date();
counter += 1;
counter++;
window.x = 1;
";
        assert_eq!(
            messages(src),
            vec![
                "Constructor call at module scope",
                "Assignment at module scope",
                "Update at module scope",
                "Assignment at module scope",
            ]
        );
    }

    #[test]
    fn function_bodies_are_exempt() {
        let src = "\
function main() {
  console.log('hi');
}
const run = () => start(1);
const obj = { go() { return go(); } };
const g = function () { state = 1; };
";
        assert!(messages(src).is_empty());
    }

    #[test]
    fn methods_and_instance_fields_are_exempt() {
        let src = "class A {\n  y = make();\n  method() { effect(); }\n}\n";
        assert!(messages(src).is_empty());
    }

    #[test]
    fn static_initialization_is_flagged() {
        let src = "\
class A {
  static { init(); }
  static x = load();
  y = make();
  m() { run(); }
  static helper() { run(); }
}
";
        assert_eq!(positions(&check(TopLevelSideEffect, src)), vec![(2, 12), (3, 14)]);
    }

    #[test]
    fn callback_argument_is_part_of_the_call() {
        let src = "setTimeout(() => {\n  tick();\n}, 10);\n";
        assert_eq!(positions(&check(TopLevelSideEffect, src)), vec![(1, 1)]);
    }

    #[test]
    fn pure_module_is_clean() {
        let src = "\
import R from 'ramda';
export const double = (x) => x * 2;
export const names = ['a', 'b'];
const table = { a: 1, b: [2, 3] };
export default table;
";
        assert!(messages(src).is_empty());
    }

    #[test]
    fn export_with_call_is_flagged() {
        assert_eq!(messages("export const store = createStore();\n").len(), 1);
    }

    #[test]
    fn effects_inside_top_level_blocks_are_flagged() {
        let src = "if (debug) {\n  enable();\n}\n";
        assert_eq!(positions(&check(TopLevelSideEffect, src)), vec![(2, 3)]);
    }
}
