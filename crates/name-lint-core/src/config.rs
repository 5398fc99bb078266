//! Configuration types for name-lint.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::Severity;

/// Default name of the opt-in marker annotation.
pub const DEFAULT_MARKER: &str = "CheckName";

/// Top-level configuration for name-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for a failing exit status (default: "error").
    ///
    /// Naming diagnostics are warnings, so the default never fails.
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Effective failure threshold.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Only check top-level declarations carrying the opt-in marker.
    #[serde(default = "default_true")]
    pub require_marker: bool,

    /// Simple name of the opt-in marker annotation.
    #[serde(default = "default_marker")]
    pub marker: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/target/**".to_string(), "**/build/**".to_string()],
            respect_gitignore: true,
            require_marker: true,
            marker: default_marker(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.analyzer.require_marker);
        assert_eq!(config.analyzer.marker, "CheckName");
        assert_eq!(config.fail_on(), Severity::Error);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
fail_on = "warning"

[analyzer]
root = "./src/main/java"
exclude = ["**/generated/**"]
require_marker = false
marker = "Checked"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./src/main/java"));
        assert_eq!(config.analyzer.exclude, vec!["**/generated/**"]);
        assert!(!config.analyzer.require_marker);
        assert!(config.analyzer.respect_gitignore);
        assert_eq!(config.analyzer.marker, "Checked");
        assert_eq!(config.fail_on(), Severity::Warning);
    }

    #[test]
    fn test_parse_rejects_unknown_severity() {
        let err = Config::parse("fail_on = \"fatal\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_from_file_reports_path() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/name-lint.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/name-lint.toml"));
    }
}
