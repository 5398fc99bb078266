//! Locates the configuration file for a run.
//!
//! Resolution order:
//!
//! 1. `--config` flag (trusted as-is, existence is checked on load)
//! 2. `name-lint.toml` or `.name-lint.toml` in the checked directory or
//!    the nearest ancestor that has one
//! 3. `config.toml` in the global directory (`$NAME_LINT_CONFIG_DIR`,
//!    else `~/.name-lint/`)
//! 4. Built-in defaults

use std::fmt;
use std::path::{Path, PathBuf};

/// File names recognized in a project directory, in priority order.
const PROJECT_CONFIG_NAMES: &[&str] = &["name-lint.toml", ".name-lint.toml"];

/// File name inside the global directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Environment variable overriding the global directory.
const GLOBAL_DIR_ENV: &str = "NAME_LINT_CONFIG_DIR";

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found in the project directory or one of its ancestors.
    Project(PathBuf),
    /// Found in the global directory.
    Global(PathBuf),
    /// Nothing found; built-in defaults apply.
    Default,
}

impl ConfigSource {
    /// The config file path, unless defaults apply.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` for [`ConfigSource::Global`].
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) => write!(f, "{} (--config)", p.display()),
            Self::Project(p) => write!(f, "{} (project)", p.display()),
            Self::Global(p) => write!(f, "{} (global)", p.display()),
            Self::Default => f.write_str("built-in defaults"),
        }
    }
}

/// Resolves the configuration for a run rooted at `start`.
#[must_use]
pub fn resolve(start: &Path, explicit: Option<&Path>) -> ConfigSource {
    let source = resolve_with(start, explicit, global_config_dir().as_deref());
    tracing::debug!("Configuration: {source}");
    source
}

fn resolve_with(start: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(path) = find_project_config(start) {
        return ConfigSource::Project(path);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// Searches `start` and its ancestors for a project config file.
fn find_project_config(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    start.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// The global config directory: `$NAME_LINT_CONFIG_DIR`, else `~/.name-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(GLOBAL_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".name-lint"))
}
