//! Subcommand implementations.

pub mod check;
pub mod check_snapshot;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use name_lint_core::Config;

use crate::config_resolver::ConfigSource;

/// Loads the configuration a resolver pointed at, or defaults.
pub fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}
