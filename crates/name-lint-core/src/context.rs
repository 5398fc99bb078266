//! Host-side inputs: source units and the extractor trait that produces them.

use std::path::{Path, PathBuf};

use crate::tree::{DeclarationTree, NodeId};

/// One compilation unit handed to the checkers.
///
/// Owns the declaration tree for the duration of a checking pass.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Path relative to the project root (or the snapshot path).
    pub path: PathBuf,
    /// Source text, when available, for rich rendering.
    pub content: Option<String>,
    /// Declaration tree of this unit.
    pub tree: DeclarationTree,
}

impl SourceUnit {
    /// Creates a unit without source text.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, tree: DeclarationTree) -> Self {
        Self {
            path: path.into(),
            content: None,
            tree,
        }
    }

    /// Attaches the source text.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Top-level types selected for checking.
    ///
    /// With `require_marker`, only declarations carrying the opt-in marker
    /// are returned.
    #[must_use]
    pub fn selected_roots(&self, require_marker: bool) -> Vec<NodeId> {
        self.tree
            .top_level_types()
            .into_iter()
            .filter(|&id| !require_marker || self.tree.node(id).opt_in)
            .collect()
    }
}

/// Errors produced while turning source text into a [`SourceUnit`].
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The grammar could not be loaded.
    #[error("failed to load {language} grammar: {message}")]
    Grammar {
        /// Language identifier.
        language: &'static str,
        /// Underlying error message.
        message: String,
    },

    /// The source could not be parsed.
    #[error("failed to parse {path}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
    },
}

/// Trait for language-specific front-ends.
///
/// Implement this to feed a new language into the analyzer. The extractor
/// receives raw source text and returns the declaration tree of that file.
pub trait SourceExtractor: Send + Sync {
    /// Language identifier (e.g., `"java"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles (e.g., `&["java"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Builds the declaration tree for one file.
    fn extract(&self, path: &Path, source: &str) -> Result<SourceUnit, ExtractError>;

    /// Returns true if this extractor handles `path`.
    fn handles(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }
}
