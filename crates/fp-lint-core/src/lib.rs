//! # fp-lint-core
//!
//! Core framework for functional-style linting of JavaScript sources based on
//! the Tree-sitter JavaScript grammar.
//!
//! This crate provides the foundational traits and types for building
//! the linter. It includes:
//!
//! - [`Rule`] trait for stateless per-node rules
//! - [`engine::run`] for applying rules to one parsed file
//! - [`Analyzer`] for orchestrating a batch of files
//! - [`Violation`] for representing lint findings
//! - [`reporter::render`] for turning a [`LintResult`] into text
//!
//! ## Example
//!
//! ```ignore
//! use fp_lint_core::{Analyzer, OutputFormat};
//!
//! let analyzer = Analyzer::builder()
//!     .path("./src")
//!     .rule_box(Box::new(MyRule))
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! print!("{}", fp_lint_core::reporter::render(&result, OutputFormat::Human)?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
pub mod engine;
pub mod parser;
pub mod reporter;
mod rule;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use parser::{JsParser, ParseFailure};
pub use reporter::OutputFormat;
pub use rule::{Rule, RuleBox};
pub use types::{LintResult, Location, Severity, Suggestion, Violation};
pub use utils::allowance::AllowCheck;

/// Re-exported so rule crates name the same node type the engine hands out.
pub use tree_sitter::Node;
