//! Batch analyzer: discovers files and runs the engine over each of them.

use crate::config::Config;
use crate::engine;
use crate::parser::{JsParser, ParseFailure};
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a whole analysis run.
///
/// Per-file problems are not errors: a missing path, an unreadable
/// directory entry or a parse error is recorded in [`LintResult::failures`].
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error while discovering files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Worker pool could not be created.
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    paths: Vec<PathBuf>,
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file or directory to analyze.
    #[must_use]
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Adds several files or directories to analyze.
    #[must_use]
    pub fn paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules to the analyzer.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// Rules disabled in the configuration are dropped here.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());

        let excludes = exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p).map(|compiled| (p.clone(), compiled)))
            .collect::<Result<Vec<_>, _>>()?;

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.id());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.id());
                }
                enabled
            })
            .collect();

        let paths = if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths
        };

        Ok(Analyzer {
            paths,
            rules,
            excludes,
            config,
        })
    }
}

/// What happened to one file.
enum FileOutcome {
    Checked(Vec<Violation>),
    Failed(ParseFailure),
}

/// The main analyzer that orchestrates lint execution over many files.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    paths: Vec<PathBuf>,
    rules: Vec<RuleBox>,
    excludes: Vec<(String, glob::Pattern)>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the ids of the active rules.
    #[must_use]
    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Analyzes all files and returns the sorted results.
    ///
    /// A path that cannot be found, walked, read or parsed is recorded in
    /// [`LintResult::failures`] and does not stop the others.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker pool cannot be started.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis of {} path(s)", self.paths.len());

        let (files, discovery_failures) = self.discover_files();
        info!(
            "Found {} files to analyze with {} rules",
            files.len(),
            self.rules.len()
        );

        let mut pool = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.config.analyzer.parallelism {
            pool = pool.num_threads(threads.max(1));
        }
        let pool = pool.build()?;

        let outcomes: Vec<FileOutcome> = pool.install(|| {
            files
                .par_iter()
                .map_init(JsParser::new, |parser, path| match parser {
                    Ok(parser) => self.analyze_file(parser, path),
                    Err(e) => FileOutcome::Failed(ParseFailure::new(
                        path.clone(),
                        e.line,
                        e.column,
                        e.message.clone(),
                    )),
                })
                .collect()
        });

        let mut result = LintResult::new();
        result.failures.extend(discovery_failures);
        for outcome in outcomes {
            match outcome {
                FileOutcome::Checked(violations) => {
                    result.violations.extend(violations);
                    result.files_checked += 1;
                }
                FileOutcome::Failed(failure) => {
                    warn!("Failed to parse {failure}");
                    result.failures.push(failure);
                }
            }
        }
        result.sort();

        info!(
            "Analysis complete: {} findings in {} files, {} failed",
            result.violations.len(),
            result.files_checked,
            result.failures.len()
        );

        Ok(result)
    }

    /// Reads, parses and checks a single file.
    fn analyze_file(&self, parser: &mut JsParser, path: &Path) -> FileOutcome {
        debug!("Analyzing: {}", path.display());

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return FileOutcome::Failed(ParseFailure::new(
                    path,
                    1,
                    1,
                    format!("failed to read file: {e}"),
                ))
            }
        };

        match engine::check_source(parser, path, &content, &self.rules, &self.config) {
            Ok(violations) => FileOutcome::Checked(violations),
            Err(failure) => FileOutcome::Failed(failure),
        }
    }

    /// Expands the configured paths into a sorted, de-duplicated file list.
    ///
    /// Explicitly named files are always analyzed. Directories are walked and
    /// filtered by extension and exclude patterns. Paths that do not exist and
    /// entries the walker cannot read come back as failures.
    fn discover_files(&self) -> (Vec<PathBuf>, Vec<ParseFailure>) {
        let mut files = BTreeSet::new();
        let mut failures = Vec::new();

        for root in &self.paths {
            if root.is_file() {
                files.insert(root.clone());
                continue;
            }
            if !root.is_dir() {
                warn!("Path not found: {}", root.display());
                failures.push(ParseFailure::new(root.clone(), 1, 1, "path not found"));
                continue;
            }

            let mut builder = ignore::WalkBuilder::new(root);
            builder
                .hidden(false)
                .git_ignore(self.config.analyzer.respect_gitignore)
                .git_exclude(self.config.analyzer.respect_gitignore)
                .require_git(false);

            for entry in builder.build() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!("Failed to walk {}: {e}", root.display());
                        let path = walk_error_path(&e).unwrap_or(root);
                        failures.push(ParseFailure::new(
                            path.to_path_buf(),
                            1,
                            1,
                            format!("failed to walk directory: {e}"),
                        ));
                        continue;
                    }
                };
                let path = entry.path();

                if !path.is_file() || !self.has_supported_extension(path) {
                    continue;
                }
                if self.should_exclude(path) {
                    debug!("Excluding: {}", path.display());
                    continue;
                }
                files.insert(path.to_path_buf());
            }
        }

        (files.into_iter().collect(), failures)
    }

    fn has_supported_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.config
                    .analyzer
                    .extensions
                    .iter()
                    .any(|allowed| allowed.trim_start_matches('.') == ext)
            })
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes.iter().any(|(raw, pattern)| {
            if pattern.matches(&path_str) {
                return true;
            }
            // Also check as substring for patterns like "**/node_modules/**"
            let normalized = raw.replace("**", "");
            !normalized.is_empty() && normalized != "/" && path_str.contains(&normalized)
        })
    }
}

/// Path an [`ignore::Error`] is about, if it names one.
fn walk_error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            walk_error_path(err)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_current_dir() {
        let analyzer = Analyzer::builder()
            .build()
            .expect("Failed to build analyzer");
        assert_eq!(analyzer.paths, vec![PathBuf::from(".")]);
        assert_eq!(analyzer.rule_count(), 0);
    }

    #[test]
    fn test_exclude_patterns() {
        let analyzer = Analyzer::builder()
            .exclude("**/vendor/**")
            .build()
            .expect("Failed to build analyzer");

        assert!(analyzer.should_exclude(Path::new("web/node_modules/lodash/index.js")));
        assert!(analyzer.should_exclude(Path::new("./dist/bundle.js")));
        assert!(analyzer.should_exclude(Path::new("/repo/vendor/lib.js")));
        assert!(!analyzer.should_exclude(Path::new("src/index.js")));
    }

    #[test]
    fn invalid_glob_is_rejected() {
        let err = Analyzer::builder().exclude("src/[").build();
        assert!(matches!(err, Err(AnalyzerError::Glob(_))));
    }

    #[test]
    fn extension_filter_uses_config() {
        let analyzer = Analyzer::builder().build().unwrap();
        assert!(analyzer.has_supported_extension(Path::new("a.js")));
        assert!(analyzer.has_supported_extension(Path::new("a.mjs")));
        assert!(!analyzer.has_supported_extension(Path::new("a.ts")));
        assert!(!analyzer.has_supported_extension(Path::new("Makefile")));
    }

    #[test]
    fn missing_path_is_recorded_as_failure() {
        let analyzer = Analyzer::builder()
            .path("definitely/not/here")
            .build()
            .unwrap();
        let result = analyzer.analyze().unwrap();
        assert_eq!(result.files_checked, 0);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].file, PathBuf::from("definitely/not/here"));
        assert_eq!(result.failures[0].message, "path not found");
    }

    #[test]
    fn walk_error_path_unwraps_context() {
        let inner = ignore::Error::WithPath {
            path: PathBuf::from("src/locked"),
            err: Box::new(ignore::Error::Io(std::io::Error::from(
                std::io::ErrorKind::PermissionDenied,
            ))),
        };
        let err = ignore::Error::WithDepth {
            depth: 2,
            err: Box::new(inner),
        };
        assert_eq!(walk_error_path(&err), Some(Path::new("src/locked")));
        assert_eq!(
            walk_error_path(&ignore::Error::UnrecognizedFileType("x".into())),
            None
        );
    }
}
