//! Check command implementation.

use anyhow::{Context, Result};
use name_lint_core::{Analyzer, LintResult};
use name_lint_java::JavaExtractor;
use name_lint_rules::all_checkers;
use std::path::Path;

use super::output::{self, Sources};
use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    all: bool,
    source: &ConfigSource,
) -> Result<()> {
    let config = super::load_config(source)?;
    let fail_on = config.fail_on();
    let extractor = JavaExtractor::with_marker(config.analyzer.marker.clone());

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .extractor(extractor);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }
    if all {
        builder = builder.require_marker(false);
    }
    for checker in all_checkers() {
        builder = builder.checker_box(checker);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {} with {} checker(s)",
        analyzer.root().display(),
        analyzer.checker_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    let sources = match format {
        OutputFormat::Fancy => read_sources(analyzer.root(), &result),
        _ => Sources::new(),
    };
    output::print(&result, format, &sources)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

/// Reads the files that have diagnostics, keyed by their reported path.
fn read_sources(root: &Path, result: &LintResult) -> Sources {
    let mut sources = Sources::new();
    for diagnostic in &result.diagnostics {
        let file = &diagnostic.location.file;
        if sources.contains_key(file) {
            continue;
        }
        match std::fs::read_to_string(root.join(file)) {
            Ok(text) => {
                sources.insert(file.clone(), text);
            }
            Err(e) => tracing::warn!("Cannot read {} for display: {}", file.display(), e),
        }
    }
    sources
}
