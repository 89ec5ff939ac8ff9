//! # fp-lint-rules
//!
//! Built-in functional-style rules for fp-lint.
//!
//! ## Available Rules
//!
//! | Code | Id | Default | Description |
//! |------|----|---------|-------------|
//! | FP001 | `MutableBinding` | warning | Forbids reassignable `let`/`var` bindings |
//! | FP002 | `NativeLoop` | warning | Forbids `for`, `for…in`, `for…of`, `while` and `do…while` |
//! | FP003 | `SwitchStatement` | warning | Forbids `switch` statements |
//! | FP004 | `TryCatch` | error | Forbids exception-based control flow |
//! | FP005 | `ClassDeclaration` | error | Forbids class declarations and expressions |
//! | FP006 | `TopLevelSideEffect` | error | Forbids calls and assignments at module scope |
//!
//! ## Usage
//!
//! ```ignore
//! use fp_lint_core::Analyzer;
//! use fp_lint_rules::select_rules;
//!
//! let analyzer = Analyzer::builder()
//!     .path("./src")
//!     .rules(select_rules(&["MutableBinding", "FP002"])?)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod class_declaration;
mod mutable_binding;
mod native_loop;
mod registry;
mod switch_statement;
mod top_level_side_effect;
mod try_catch;

pub use class_declaration::ClassDeclaration;
pub use mutable_binding::MutableBinding;
pub use native_loop::NativeLoop;
pub use registry::{all_rules, find_rule, registry, select_rules, validate_rule_ids, RegistryError};
pub use switch_statement::SwitchStatement;
pub use top_level_side_effect::TopLevelSideEffect;
pub use try_catch::TryCatch;

/// Re-export core types for convenience.
pub use fp_lint_core::{Rule, Severity, Violation};
