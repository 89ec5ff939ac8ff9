//! Rule trait for defining lint rules.

use tree_sitter::Node;

use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A stateless lint rule over Tree-sitter syntax nodes.
///
/// The engine calls [`Rule::inspect`] once per top-level statement of a file.
/// A rule owns the traversal of that statement's subtree and returns every
/// finding in it. Rules must be pure: the same node and context always yield
/// the same findings, and no rule can see another rule's output.
///
/// # Example
///
/// ```ignore
/// use fp_lint_core::{FileContext, Node, Rule, Violation};
/// use fp_lint_core::utils::{walk, Walk};
///
/// pub struct NoDebugger;
///
/// impl Rule for NoDebugger {
///     fn id(&self) -> &'static str { "NoDebugger" }
///     fn code(&self) -> &'static str { "FP100" }
///
///     fn inspect(&self, ctx: &FileContext<'_>, node: Node<'_>) -> Vec<Violation> {
///         let mut found = Vec::new();
///         walk(node, |n| {
///             if n.kind() == "debugger_statement" {
///                 found.push(ctx.violation(self, n, "`debugger` statement"));
///             }
///             Walk::Descend
///         });
///         found
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the rule id (e.g., "MutableBinding").
    fn id(&self) -> &'static str;

    /// Returns the rule code (e.g., "FP001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for findings from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Inspects one top-level node and returns the findings in its subtree.
    fn inspect(&self, ctx: &FileContext<'_>, node: Node<'_>) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

impl<R: Rule + ?Sized> Rule for &R {
    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn code(&self) -> &'static str {
        (**self).code()
    }

    fn description(&self) -> &'static str {
        (**self).description()
    }

    fn default_severity(&self) -> Severity {
        (**self).default_severity()
    }

    fn inspect(&self, ctx: &FileContext<'_>, node: Node<'_>) -> Vec<Violation> {
        (**self).inspect(ctx, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::JsParser;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn id(&self) -> &'static str {
            "TestRule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn inspect(&self, ctx: &FileContext<'_>, node: Node<'_>) -> Vec<Violation> {
            vec![ctx.violation(self, node, "Test finding")]
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.id(), "TestRule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Warning);
    }

    #[test]
    fn violation_carries_rule_identity() {
        let src = "x;\n";
        let tree = JsParser::new()
            .unwrap()
            .parse(Path::new("t.js"), src)
            .unwrap();
        let ctx = FileContext::new(Path::new("t.js"), src);
        let found = TestRule.inspect(&ctx, tree.root_node());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rule, "TestRule");
        assert_eq!(found[0].code, "TEST001");
        assert_eq!(found[0].location.line, 1);
    }
}
