//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# fp-lint configuration

# Findings at or above this severity make `fp-lint lint` exit with 1.
fail_on = "error"

[analyzer]
# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

# Extensions picked up when walking directories
extensions = ["js", "mjs", "cjs", "jsx"]

# Respect .gitignore files
respect_gitignore = true

# Number of files analyzed in parallel (default: one per CPU)
# parallelism = 4

# Rule configurations
# Each rule can be disabled or have its severity overridden

[rules.MutableBinding]
enabled = true
# severity = "error"

[rules.NativeLoop]
enabled = true

[rules.SwitchStatement]
enabled = true

[rules.TryCatch]
enabled = true

[rules.ClassDeclaration]
enabled = true

[rules.TopLevelSideEffect]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_default_config(Path::new("fp-lint.toml"), force)?;

    println!("Created fp-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit fp-lint.toml to configure rules");
    println!("  2. Run: fp-lint lint");

    Ok(())
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
