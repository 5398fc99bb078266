//! Integration test: Java sources on disk through the full analyzer pipeline.

use name_lint_core::{Analyzer, Config, Diagnostic, LintResult, SourceExtractor};
use name_lint_java::JavaExtractor;
use name_lint_rules::NameChecker;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn analyze(root: &Path, require_marker: bool) -> LintResult {
    Analyzer::builder()
        .root(root)
        .extractor(JavaExtractor::new())
        .checker(NameChecker::new())
        .require_marker(require_marker)
        .build()
        .expect("analyzer")
        .analyze()
        .expect("analysis")
}

/// `(file name, line, code, identifier)` for compact assertions.
fn rows(diagnostics: &[Diagnostic]) -> Vec<(String, usize, String, String)> {
    diagnostics
        .iter()
        .map(|d| {
            (
                d.location
                    .file
                    .file_name()
                    .map(|f| f.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                d.location.line,
                d.code.clone(),
                d.message.split('\'').nth(1).unwrap_or_default().to_string(),
            )
        })
        .collect()
}

fn row(file: &str, line: usize, code: &str, name: &str) -> (String, usize, String, String) {
    (file.to_string(), line, code.to_string(), name.to_string())
}

#[test]
fn marked_types_are_checked_in_declaration_order() {
    let result = analyze(&fixture("orders"), true);

    assert_eq!(
        rows(&result.diagnostics),
        vec![
            row("OrderService.java", 7, "NL003", "maxRetries"),
            row("OrderService.java", 8, "NL003", "Default_Region"),
            row("OrderService.java", 10, "NL002", "pending_ids"),
            row("OrderService.java", 18, "NL002", "Submit"),
            row("OrderService.java", 18, "NL002", "Quantity"),
            row("OrderService.java", 22, "NL001", "state"),
            row("OrderService.java", 22, "NL003", "closed"),
            row("OrderService.java", 25, "NL003", "retryLimit"),
        ]
    );
    assert_eq!(result.files_checked, 3, "build/ is excluded by default");
    assert_eq!(result.roots_checked, 2);
    assert!(!result.has_errors());
}

#[test]
fn unmarked_types_are_checked_without_marker_requirement() {
    let result = analyze(&fixture("orders"), false);

    let legacy: Vec<_> = rows(&result.diagnostics)
        .into_iter()
        .filter(|(file, ..)| file == "legacy_Helper.java")
        .collect();
    assert_eq!(
        legacy,
        vec![
            row("legacy_Helper.java", 3, "NL001", "legacy_Helper"),
            row("legacy_Helper.java", 4, "NL003", "bad_Name"),
            row("legacy_Helper.java", 6, "NL002", "Do_Stuff"),
        ]
    );
    assert_eq!(result.diagnostics.len(), 11);
}

#[test]
fn diagnostics_carry_relative_paths_and_spans() {
    let root = fixture("orders");
    let result = analyze(&root, true);
    let first = &result.diagnostics[0];

    assert_eq!(
        first.location.file,
        Path::new("src/com/example/orders/OrderService.java")
    );
    let source = fs::read_to_string(root.join(&first.location.file)).unwrap();
    let span = &source[first.location.offset..first.location.offset + first.location.length];
    assert_eq!(span, "maxRetries");
}

#[test]
fn invalid_package_is_reported_once_per_file() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Pair.java"),
        "package com.Acme;\n\n@CheckName class First {}\n@CheckName class Second {}\n",
    )
    .unwrap();

    let result = analyze(dir.path(), true);
    assert_eq!(rows(&result.diagnostics), vec![row("Pair.java", 1, "NL004", "com.Acme")]);
}

#[test]
fn package_is_skipped_when_no_type_is_selected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Plain.java"),
        "package Bad.Package;\n\nclass plain {}\n",
    )
    .unwrap();

    let result = analyze(dir.path(), true);
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.roots_checked, 0);
}

#[test]
fn configured_marker_and_excludes_apply() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("gen")).unwrap();
    fs::write(dir.path().join("A.java"), "@Audited class a_type {}\n").unwrap();
    fs::write(dir.path().join("gen/B.java"), "@Audited class b_type {}\n").unwrap();

    let config = Config::parse(
        r#"
[analyzer]
marker = "Audited"
exclude = ["gen/**"]
"#,
    )
    .unwrap();
    let marker = config.analyzer.marker.clone();

    let result = Analyzer::builder()
        .root(dir.path())
        .config(config)
        .extractor(JavaExtractor::with_marker(marker))
        .checker(NameChecker::new())
        .build()
        .unwrap()
        .analyze()
        .unwrap();

    assert_eq!(rows(&result.diagnostics), vec![row("A.java", 1, "NL001", "a_type")]);
}

#[test]
fn extractor_is_deterministic() {
    let path = fixture("orders").join("src/com/example/orders/OrderService.java");
    let source = fs::read_to_string(&path).unwrap();
    let extractor = JavaExtractor::new();

    let first = extractor.extract(&path, &source).unwrap();
    let second = extractor.extract(&path, &source).unwrap();
    assert_eq!(first.tree, second.tree);
}

#[test]
fn derived_and_cast_constants_use_constant_naming() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Durations.java"),
        "class Durations {\n\
         \x20   static final long SECOND_MS = 1000L;\n\
         \x20   static final long MINUTE_MS = 60 * SECOND_MS;\n\
         \x20   static final int CAST = (int) 3L;\n\
         }\n",
    )
    .unwrap();

    let result = analyze(dir.path(), false);
    assert!(result.diagnostics.is_empty(), "{:?}", rows(&result.diagnostics));
}
