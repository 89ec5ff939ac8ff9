//! Static registry of the built-in rules.
//!
//! The registry is a fixed, read-only slice. Lookups accept a rule id
//! (`MutableBinding`) or its code (`FP001`, case-insensitive).

use crate::{
    ClassDeclaration, MutableBinding, NativeLoop, SwitchStatement, TopLevelSideEffect, TryCatch,
};
use fp_lint_core::{Rule, RuleBox};
use thiserror::Error;
use tracing::debug;

static RULES: &[&dyn Rule] = &[
    &MutableBinding,
    &NativeLoop,
    &SwitchStatement,
    &TryCatch,
    &ClassDeclaration,
    &TopLevelSideEffect,
];

/// Errors from rule lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A requested rule id or code is not registered.
    #[error("Unknown rule '{id}' (run `fp-lint list-rules` to see available rules)")]
    UnknownRule {
        /// The id as given.
        id: String,
    },

    /// A config table is keyed by a rule code instead of the rule id.
    #[error("Rule settings must be keyed by id: use [rules.{id}] instead of [rules.{key}]")]
    KeyedByCode {
        /// The key as given.
        key: String,
        /// Id of the rule the code belongs to.
        id: String,
    },
}

/// Returns every built-in rule, in code order.
#[must_use]
pub fn registry() -> &'static [&'static dyn Rule] {
    RULES
}

/// Returns all built-in rules as boxed trait objects.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    RULES.iter().map(|rule| Box::new(*rule) as RuleBox).collect()
}

/// Looks up a rule by id or code.
#[must_use]
pub fn find_rule(key: &str) -> Option<&'static dyn Rule> {
    let key = key.trim();
    RULES
        .iter()
        .copied()
        .find(|rule| rule.id() == key || rule.code().eq_ignore_ascii_case(key))
}

/// Resolves `keys` to rules, in registry order and without duplicates.
///
/// Each key may itself be a comma-separated list.
///
/// # Errors
///
/// Returns [`RegistryError::UnknownRule`] for the first key that names no rule.
pub fn select_rules<S: AsRef<str>>(keys: &[S]) -> Result<Vec<RuleBox>, RegistryError> {
    let mut selected: Vec<&'static dyn Rule> = Vec::new();

    for key in keys.iter().flat_map(|k| k.as_ref().split(',')) {
        if key.trim().is_empty() {
            continue;
        }
        let rule = find_rule(key).ok_or_else(|| RegistryError::UnknownRule {
            id: key.trim().to_string(),
        })?;
        if !selected.iter().any(|r| r.id() == rule.id()) {
            selected.push(rule);
        }
    }

    debug!("Selected {} rule(s)", selected.len());
    Ok(RULES
        .iter()
        .filter(|rule| selected.iter().any(|s| s.id() == rule.id()))
        .map(|rule| Box::new(*rule) as RuleBox)
        .collect())
}

/// Checks that every id (for example each `[rules.<id>]` table of a config
/// file) is exactly the id of a built-in rule.
///
/// Config settings are looked up by id, so a code here would be ignored.
///
/// # Errors
///
/// Returns [`RegistryError::KeyedByCode`] for a rule code and
/// [`RegistryError::UnknownRule`] for anything else that names no rule.
pub fn validate_rule_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Result<(), RegistryError> {
    for id in ids {
        match find_rule(id) {
            Some(rule) if rule.id() == id => {}
            Some(rule) => {
                return Err(RegistryError::KeyedByCode {
                    key: id.to_string(),
                    id: rule.id().to_string(),
                })
            }
            None => return Err(RegistryError::UnknownRule { id: id.to_string() }),
        }
    }
    Ok(())
}
