//! Check-snapshot command implementation.
//!
//! Runs the naming checker on a declaration tree handed over as JSON by a
//! host other than the built-in Java front-end.

use anyhow::{Context, Result};
use name_lint_core::{Analyzer, TreeSnapshot};
use name_lint_rules::all_checkers;
use std::path::Path;

use super::output::{self, Sources};
use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check-snapshot command.
pub fn run(file: &Path, format: OutputFormat, all: bool, source: &ConfigSource) -> Result<()> {
    let config = super::load_config(source)?;
    let fail_on = config.fail_on();

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read snapshot: {}", file.display()))?;
    let snapshot = TreeSnapshot::from_json(&content)
        .with_context(|| format!("Failed to parse snapshot: {}", file.display()))?;
    let unit = snapshot
        .into_unit()
        .with_context(|| format!("Malformed declaration tree: {}", file.display()))?;

    let mut builder = Analyzer::builder().config(config);
    if all {
        builder = builder.require_marker(false);
    }
    for checker in all_checkers() {
        builder = builder.checker_box(checker);
    }
    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Checking snapshot {} ({} declarations)",
        unit.path.display(),
        unit.tree.len()
    );

    let mut result = analyzer.analyze_unit(&unit);
    result.sort_by_file();

    output::print(&result, format, &Sources::new())?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}
