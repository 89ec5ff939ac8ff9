//! Locates and loads `fp-lint.toml`.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <FILE>`
//! 2. `fp-lint.toml`, then `.fp-lint.toml`, in the working directory
//! 3. `config.toml` in the global directory (`$FP_LINT_CONFIG_DIR`, else
//!    `~/.fp-lint/`)
//! 4. built-in defaults

use anyhow::{Context, Result};
use fp_lint_core::Config;
use std::path::{Path, PathBuf};

/// File names looked up in the working directory.
const LOCAL_NAMES: [&str; 2] = ["fp-lint.toml", ".fp-lint.toml"];

/// File name looked up in the global directory.
const GLOBAL_NAME: &str = "config.toml";

/// Environment variable overriding the global directory.
pub const CONFIG_DIR_ENV: &str = "FP_LINT_CONFIG_DIR";

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`; not checked for existence.
    Explicit(PathBuf),
    /// Found next to the code being linted.
    Local(PathBuf),
    /// Found in the global directory.
    Global(PathBuf),
    /// Nothing found.
    Builtin,
}

impl ConfigSource {
    /// Path of the config file, if there is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Local(p) | Self::Global(p) => Some(p),
            Self::Builtin => None,
        }
    }

    /// Reads and parses the config this source points at.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid config.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };
        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Resolves the config source for a run started in `cwd`.
#[must_use]
pub fn resolve(cwd: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_in(cwd, explicit, global_config_dir().as_deref())
}

fn resolve_in(cwd: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(local) = LOCAL_NAMES.iter().map(|n| cwd.join(n)).find(|p| p.is_file()) {
        tracing::debug!("Found project config: {}", local.display());
        return ConfigSource::Local(local);
    }

    match global_dir.map(|dir| dir.join(GLOBAL_NAME)) {
        Some(global) if global.is_file() => {
            tracing::debug!("Found global config: {}", global.display());
            ConfigSource::Global(global)
        }
        _ => ConfigSource::Builtin,
    }
}

/// Global config directory: `$FP_LINT_CONFIG_DIR`, else `~/.fp-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => home::home_dir().map(|h| h.join(".fp-lint")),
    }
}
