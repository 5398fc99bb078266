//! Shared output formatting for lint results.

use anyhow::Result;
use miette::{NamedSource, Report};
use name_lint_core::{Diagnostic, DiagnosticReport, LintResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::OutputFormat;

/// Source text per diagnostic file, used by the fancy renderer.
pub type Sources = HashMap<PathBuf, String>;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat, sources: &Sources) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Fancy => print_fancy(result, sources),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!("{}", diagnostic.format());
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, _) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    println!("{summary_color}{}\x1b[0m", result.summary());
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for diagnostic in &result.diagnostics {
        println!("{diagnostic}");
    }
}

fn print_fancy(result: &LintResult, sources: &Sources) {
    for diagnostic in &result.diagnostics {
        eprintln!("{:?}", fancy_report(diagnostic, sources.get(&diagnostic.location.file)));
    }
    print_summary(result);
}

/// Builds a miette report, attaching source text when it is known.
fn fancy_report(diagnostic: &Diagnostic, source: Option<&String>) -> Report {
    let report = Report::new(DiagnosticReport::from(diagnostic));
    match source {
        Some(text) => report.with_source_code(NamedSource::new(
            display_name(&diagnostic.location.file),
            text.clone(),
        )),
        None => report,
    }
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}
