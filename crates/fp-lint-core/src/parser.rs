//! JavaScript source parser using Tree-sitter.
//!
//! Wraps the `tree-sitter-javascript` grammar. Tree-sitter always produces a
//! tree, recovering from syntax errors with `ERROR` and `MISSING` nodes;
//! [`first_syntax_error`] turns such a tree into a [`ParseFailure`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tree_sitter::{Language, Node, Parser, Tree};

use crate::utils::traverse::{walk, Walk};

/// A file that could not be turned into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{}:{}:{}: {}", .file.display(), .line, .column, .message)]
pub struct ParseFailure {
    /// Path that could not be found, read or parsed.
    pub file: PathBuf,
    /// Line of the first problem (1-indexed).
    pub line: usize,
    /// Column of the first problem (1-indexed).
    pub column: usize,
    /// Human-readable description.
    pub message: String,
}

impl ParseFailure {
    /// Creates a failure at an explicit position.
    #[must_use]
    pub fn new(
        file: impl Into<PathBuf>,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            message: message.into(),
        }
    }
}

/// Parses JavaScript (including JSX) source text.
///
/// A `JsParser` owns a Tree-sitter parser and is not shared between threads;
/// create one per worker.
pub struct JsParser {
    parser: Parser,
}

impl JsParser {
    /// Creates a parser for the JavaScript grammar.
    ///
    /// # Errors
    ///
    /// Returns a failure if the linked grammar is incompatible with the
    /// Tree-sitter runtime.
    pub fn new() -> Result<Self, ParseFailure> {
        let language: Language = tree_sitter_javascript::LANGUAGE.into();
        let mut parser = Parser::new();
        parser.set_language(&language).map_err(|e| {
            ParseFailure::new(
                PathBuf::new(),
                1,
                1,
                format!("failed to load JavaScript grammar: {e}"),
            )
        })?;
        Ok(Self { parser })
    }

    /// Parses `source`, attributing failures to `path`.
    ///
    /// The returned tree may still contain error nodes; the engine checks for
    /// them before running rules.
    ///
    /// # Errors
    ///
    /// Returns a failure if Tree-sitter produces no tree at all.
    pub fn parse(&mut self, path: &Path, source: &str) -> Result<Tree, ParseFailure> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| ParseFailure::new(path, 1, 1, "parser produced no syntax tree"))
    }
}

/// Finds the first `ERROR` or `MISSING` node in preorder.
#[must_use]
pub fn first_syntax_error(path: &Path, source: &str, root: Node<'_>) -> Option<ParseFailure> {
    if !root.has_error() {
        return None;
    }

    let mut found = None;
    walk(root, |node| {
        if found.is_some() {
            return Walk::Skip;
        }
        if node.is_error() || node.is_missing() {
            found = Some(describe(path, source, node));
            return Walk::Skip;
        }
        if node.has_error() {
            Walk::Descend
        } else {
            Walk::Skip
        }
    });

    // has_error() was true, so something is malformed even if no node matched.
    found.or_else(|| Some(describe(path, source, root)))
}

fn describe(path: &Path, source: &str, node: Node<'_>) -> ParseFailure {
    let pos = node.start_position();
    let message = if node.is_missing() {
        format!("syntax error: missing `{}`", node.kind())
    } else {
        let snippet = source
            .get(node.start_byte()..node.end_byte())
            .and_then(|s| s.lines().next())
            .map(str::trim)
            .unwrap_or_default();
        if snippet.is_empty() {
            "syntax error".to_string()
        } else {
            format!("syntax error: unexpected `{}`", truncate(snippet, 40))
        }
    };
    ParseFailure::new(path, pos.row + 1, pos.column + 1, message)
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
