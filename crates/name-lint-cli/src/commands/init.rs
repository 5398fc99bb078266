//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "name-lint.toml";

const DEFAULT_CONFIG: &str = r#"# name-lint configuration

# Severity at which `name-lint check` exits with status 1.
# Naming diagnostics are warnings, so use "warning" to fail CI on them.
# fail_on = "error"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src/main/java"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/build/**",
    "**/generated/**",
]

# Respect .gitignore files
respect_gitignore = true

# Only check top-level types annotated with the marker
require_marker = true

# Simple name of the opt-in annotation
marker = "CheckName"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Annotate the types to check with @CheckName");
    println!("  2. Run: name-lint check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
