use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{NotebookError, Result};
use crate::extract::SourceLayout;

/// Environment variable naming a config file to use when `--config` is absent.
pub const CONFIG_ENV: &str = "NBSPLIT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub layout: SourceLayout,
    /// Spaces per indentation level; 0 means compact output
    pub pretty_indent: usize,
    pub log_level: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: SourceLayout::Joined,
            pretty_indent: 0,
            log_level: None,
            config_path: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    layout: Option<SourceLayout>,
    pretty_indent: Option<usize>,
    log_level: Option<String>,
}

impl Config {
    /// Resolve configuration. An explicit path must exist; otherwise
    /// `$NBSPLIT_CONFIG` and then `<config dir>/nbsplit/config.toml` are tried,
    /// falling back to defaults when neither is present.
    pub fn load(provided: Option<&Path>) -> Result<Self> {
        if let Some(explicit) = provided {
            if !explicit.exists() {
                return Err(NotebookError::Config(format!(
                    "config file {} does not exist",
                    explicit.display()
                )));
            }
            return Self::from_file(explicit);
        }

        if let Some(from_env) = env::var_os(CONFIG_ENV).map(PathBuf::from) {
            if from_env.exists() {
                return Self::from_file(&from_env);
            }
            debug!(path = %from_env.display(), "config from environment not found, ignoring");
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| {
            NotebookError::Config(format!("failed to read {}: {err}", path.display()))
        })?;
        let mut config = Self::from_toml(&content).map_err(|err| match err {
            NotebookError::Config(msg) => {
                NotebookError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        config.config_path = Some(path.to_path_buf());
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|err| NotebookError::Config(err.to_string()))?;
        let defaults = Self::default();
        Ok(Self {
            layout: raw.layout.unwrap_or(defaults.layout),
            pretty_indent: raw.pretty_indent.unwrap_or(defaults.pretty_indent),
            log_level: raw.log_level,
            config_path: None,
        })
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nbsplit").join("config.toml"))
}
