//! Context types for rule execution.

use std::path::Path;
use tree_sitter::Node;

use crate::rule::Rule;
use crate::types::{Location, Violation};

/// Context provided to rules for one file.
///
/// Read-only: rules receive a shared reference and cannot observe each
/// other through it.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    /// Path of the file, as discovered.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str) -> Self {
        Self { path, content }
    }

    /// Source text covered by `node`.
    #[must_use]
    pub fn text(&self, node: Node<'_>) -> &'a str {
        self.content
            .get(node.start_byte()..node.end_byte())
            .unwrap_or("")
    }

    /// Location of the start of `node` (1-indexed line and byte column).
    #[must_use]
    pub fn location(&self, node: Node<'_>) -> Location {
        let start = node.start_position();
        Location::new(self.path.to_path_buf(), start.row + 1, start.column + 1)
            .with_span(node.start_byte(), node.end_byte() - node.start_byte())
    }

    /// Creates a finding from `rule` at `node` with the rule's default severity.
    #[must_use]
    pub fn violation(
        &self,
        rule: &dyn Rule,
        node: Node<'_>,
        message: impl Into<String>,
    ) -> Violation {
        Violation::new(
            rule.code(),
            rule.id(),
            rule.default_severity(),
            self.location(node),
            message,
        )
    }
}
