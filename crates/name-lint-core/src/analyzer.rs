//! Core analyzer for orchestrating checking passes.

use crate::checker::{Checker, CheckerBox};
use crate::config::Config;
use crate::context::{ExtractError, SourceExtractor, SourceUnit};
use crate::types::LintResult;

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error walking the source tree.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Error turning a source file into a declaration tree.
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    checkers: Vec<CheckerBox>,
    extractors: Vec<Box<dyn SourceExtractor>>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
    require_marker: Option<bool>,
    fail_on_extract_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a checker to the analyzer.
    #[must_use]
    pub fn checker<C: Checker + 'static>(mut self, checker: C) -> Self {
        self.checkers.push(Box::new(checker));
        self
    }

    /// Adds a boxed checker to the analyzer.
    #[must_use]
    pub fn checker_box(mut self, checker: CheckerBox) -> Self {
        self.checkers.push(checker);
        self
    }

    /// Adds a language front-end.
    #[must_use]
    pub fn extractor<E: SourceExtractor + 'static>(mut self, extractor: E) -> Self {
        self.extractors.push(Box::new(extractor));
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

    /// Overrides the configured marker requirement.
    #[must_use]
    pub fn require_marker(mut self, require: bool) -> Self {
        self.require_marker = Some(require);
        self
    }

    /// Sets whether unreadable or unparsable files abort the run (default: false).
    #[must_use]
    pub fn fail_on_extract_error(mut self, fail: bool) -> Self {
        self.fail_on_extract_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be resolved or an
    /// exclude pattern is not a valid glob.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        let root = self
            .root
            .unwrap_or_else(|| config.analyzer.root.clone());
        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        let mut patterns = self.exclude_patterns;
        patterns.extend(config.analyzer.exclude.iter().cloned());
        let exclude = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Analyzer {
            root,
            require_marker: self
                .require_marker
                .unwrap_or(config.analyzer.require_marker),
            respect_gitignore: config.analyzer.respect_gitignore,
            checkers: self.checkers,
            extractors: self.extractors,
            exclude,
            fail_on_extract_error: self.fail_on_extract_error,
        })
    }
}

/// The main analyzer: the host loop that feeds roots to checkers.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    require_marker: bool,
    respect_gitignore: bool,
    checkers: Vec<CheckerBox>,
    extractors: Vec<Box<dyn SourceExtractor>>,
    exclude: Vec<glob::Pattern>,
    fail_on_extract_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered checkers.
    #[must_use]
    pub fn checker_count(&self) -> usize {
        self.checkers.len()
    }

    /// Discovers, extracts, and checks every source file under the root.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery fails, or if reading or extracting
    /// a file fails and `fail_on_extract_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {:?}", self.root);

        let files = self.discover_files()?;
        info!("Found {} files to analyze", files.len());

        let mut result = LintResult::new();
        for path in &files {
            let Some(extractor) = self.extractors.iter().find(|e| e.handles(path)) else {
                continue;
            };

            let source = match std::fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    if self.fail_on_extract_error {
                        return Err(e.into());
                    }
                    continue;
                }
            };
            let relative = path.strip_prefix(&self.root).unwrap_or(path);

            match extractor.extract(relative, &source) {
                Ok(unit) => {
                    let unit = unit.with_content(source);
                    result.extend(self.analyze_unit(&unit));
                }
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    if self.fail_on_extract_error {
                        return Err(e.into());
                    }
                }
            }
        }

        result.sort_by_file();

        info!(
            "Analysis complete: {} diagnostics in {} files ({} roots)",
            result.diagnostics.len(),
            result.files_checked,
            result.roots_checked
        );

        Ok(result)
    }

    /// Runs every checker over the selected roots of one unit.
    ///
    /// The package declaration is checked once, on its own, whenever at
    /// least one of its types is selected.
    #[must_use]
    pub fn analyze_unit(&self, unit: &SourceUnit) -> LintResult {
        let mut result = LintResult::new();
        result.files_checked = 1;

        let roots = unit.selected_roots(self.require_marker);
        if roots.is_empty() {
            debug!("No roots selected in {}", unit.path.display());
            return result;
        }

        let package = roots.iter().find_map(|&id| unit.tree.package_of(id));

        for checker in &self.checkers {
            if let Some(pkg) = package {
                checker.check_node(unit, pkg, &mut result);
            }
            for &root in &roots {
                debug!(
                    "Running {} on {} in {}",
                    checker.name(),
                    unit.tree.node(root).name,
                    unit.path.display()
                );
                checker.check(unit, root, &mut result);
            }
        }

        result.roots_checked = roots.len();
        result
    }

    /// Discovers all files handled by a registered extractor.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        let mut builder = ignore::WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .git_ignore(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .require_git(false);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry?;
            let path = entry.path();

            if !path.is_file() || !self.extractors.iter().any(|e| e.handles(path)) {
                continue;
            }

            if self.should_exclude(path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    ///
    /// Patterns match the path relative to the root, so directories above
    /// the root never exclude anything.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        self.exclude.iter().any(|p| p.matches_path(relative))
    }
}
