//! Integration test: discovery, root selection and checking via Analyzer.
//!
//! Uses JSON tree snapshots on disk as the front-end so the full
//! walk → extract → select → check pipeline runs without a parser.

use name_lint_core::{
    Analyzer, AnalyzerError, Checker, Config, Diagnostic, DiagnosticReporter, ExtractError,
    Location, NodeId, Severity, SourceExtractor, SourceUnit, TreeSnapshot,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct SnapshotExtractor;

impl SourceExtractor for SnapshotExtractor {
    fn language_id(&self) -> &'static str {
        "snapshot"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn extract(&self, path: &Path, source: &str) -> Result<SourceUnit, ExtractError> {
        let parse_error = || ExtractError::Parse {
            path: path.to_path_buf(),
        };
        let snapshot = TreeSnapshot::from_json(source).map_err(|_| parse_error())?;
        let mut unit = snapshot.into_unit().map_err(|_| parse_error())?;
        unit.path = path.to_path_buf();
        Ok(unit)
    }
}

/// Reports every visited node so tests can observe traversal.
struct VisitAll;

impl Checker for VisitAll {
    fn name(&self) -> &'static str {
        "visit-all"
    }

    fn code(&self) -> &'static str {
        "T001"
    }

    fn check_node(&self, unit: &SourceUnit, id: NodeId, reporter: &mut dyn DiagnosticReporter) {
        reporter.report(Diagnostic::new(
            self.code(),
            self.name(),
            Severity::Warning,
            Location::for_node(unit.path.clone(), id, unit.tree.node(id).position),
            unit.tree.node(id).name.clone(),
        ));
    }
}

const MARKED: &str = r#"{
  "path": "ignored",
  "roots": [{
    "kind": "package", "name": "com.example",
    "children": [
      {"kind": "class", "name": "Marked", "opt_in": true, "line": 3, "column": 14,
       "children": [{"kind": "field", "name": "count"}]},
      {"kind": "class", "name": "Unmarked", "line": 7, "column": 7}
    ]
  }]
}"#;

const UNMARKED: &str = r#"{
  "path": "ignored",
  "roots": [{"kind": "class", "name": "Plain", "children": [{"kind": "method", "name": "run"}]}]
}"#;

fn project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("src")).unwrap();
    fs::create_dir_all(tmp.path().join("build")).unwrap();
    fs::write(tmp.path().join("src/a.json"), MARKED).unwrap();
    fs::write(tmp.path().join("src/b.json"), UNMARKED).unwrap();
    fs::write(tmp.path().join("src/broken.json"), "{ not json").unwrap();
    fs::write(tmp.path().join("build/c.json"), MARKED).unwrap();
    fs::write(tmp.path().join("src/readme.txt"), "skip me").unwrap();
    tmp
}

fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics.iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn checks_only_marked_roots_and_their_package() {
    let tmp = project();
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .extractor(SnapshotExtractor)
        .checker(VisitAll)
        .build()
        .unwrap();

    let result = analyzer.analyze().unwrap();

    assert_eq!(messages(&result.diagnostics), vec!["com.example", "Marked", "count"]);
    assert_eq!(result.files_checked, 2);
    assert_eq!(result.roots_checked, 1);
    assert_eq!(result.diagnostics[1].location.file, Path::new("src/a.json"));
    assert_eq!(result.diagnostics[1].location.line, 3);
}

#[test]
fn marker_can_be_disabled() {
    let tmp = project();
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .extractor(SnapshotExtractor)
        .checker(VisitAll)
        .require_marker(false)
        .build()
        .unwrap();

    let result = analyzer.analyze().unwrap();

    assert_eq!(
        messages(&result.diagnostics),
        vec!["com.example", "Marked", "count", "Unmarked", "Plain", "run"]
    );
    assert_eq!(result.roots_checked, 3);
}

#[test]
fn config_controls_marker_and_excludes() {
    let tmp = project();
    let config = Config::parse(
        r#"
[analyzer]
require_marker = false
exclude = ["src/b.json"]
"#,
    )
    .unwrap();

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .config(config)
        .extractor(SnapshotExtractor)
        .checker(VisitAll)
        .build()
        .unwrap();

    let result = analyzer.analyze().unwrap();

    // build/ is no longer excluded once the config replaces the defaults
    assert_eq!(result.files_checked, 2);
    assert!(result.diagnostics.iter().all(|d| d.message != "Plain"));
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.location.file == Path::new("build/c.json")));
}

#[test]
fn extraction_failures_are_fatal_on_request() {
    let tmp = project();
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .extractor(SnapshotExtractor)
        .checker(VisitAll)
        .fail_on_extract_error(true)
        .build()
        .unwrap();

    assert!(analyzer.analyze().is_err());
}

#[test]
fn repeated_runs_are_identical() {
    let tmp = project();
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .extractor(SnapshotExtractor)
        .checker(VisitAll)
        .build()
        .unwrap();

    let first = analyzer.analyze().unwrap();
    let second = analyzer.analyze().unwrap();
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn project_below_excluded_directory_name_is_still_checked() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("build/proj");
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(root.join("src/a.json"), MARKED).unwrap();

    let analyzer = Analyzer::builder()
        .root(&root)
        .extractor(SnapshotExtractor)
        .checker(VisitAll)
        .build()
        .unwrap();

    let result = analyzer.analyze().unwrap();
    assert_eq!(messages(&result.diagnostics), vec!["com.example", "Marked", "count"]);
}

#[test]
fn unreadable_file_is_skipped() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.json"), MARKED).unwrap();
    fs::write(tmp.path().join("b.json"), [b'{', 0xE9, b'}']).unwrap();

    let lenient = Analyzer::builder()
        .root(tmp.path())
        .extractor(SnapshotExtractor)
        .checker(VisitAll)
        .build()
        .unwrap();
    let result = lenient.analyze().unwrap();
    assert_eq!(messages(&result.diagnostics), vec!["com.example", "Marked", "count"]);
    assert_eq!(result.files_checked, 1);

    let strict = Analyzer::builder()
        .root(tmp.path())
        .extractor(SnapshotExtractor)
        .checker(VisitAll)
        .fail_on_extract_error(true)
        .build()
        .unwrap();
    assert!(matches!(strict.analyze(), Err(AnalyzerError::Io(_))));
}
