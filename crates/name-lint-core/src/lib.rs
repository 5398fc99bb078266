//! # name-lint-core
//!
//! Core framework for naming-convention linting over declaration trees.
//!
//! This crate provides the foundational traits and types shared by the
//! checkers and the language front-ends:
//!
//! - [`DeclarationTree`] arena of [`DeclarationNode`]s supplied by a host
//! - [`Checker`] trait for per-root tree checks
//! - [`DiagnosticReporter`] sink receiving [`Diagnostic`]s
//! - [`SourceExtractor`] trait for language front-ends
//! - [`Analyzer`] for orchestrating discovery, root selection and checking
//!
//! ## Example
//!
//! ```ignore
//! use name_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src/main/java")
//!     .extractor(JavaExtractor::new())
//!     .checker(NameChecker::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod checker;
mod config;
mod context;
mod snapshot;
mod tree;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use checker::{Checker, CheckerBox, DiagnosticReporter};
pub use config::{AnalyzerConfig, Config, ConfigError, DEFAULT_MARKER};
pub use context::{ExtractError, SourceExtractor, SourceUnit};
pub use snapshot::{NodeSnapshot, SnapshotError, SnapshotKind, TreeSnapshot};
pub use tree::{
    ConstantValue, DeclarationNode, DeclarationTree, Descendants, MethodKind, Modifier, NodeId,
    NodeKind, SourcePosition, TypeKind, VariableKind,
};
pub use types::{Diagnostic, DiagnosticReport, LintResult, Location, Severity, Suggestion};
