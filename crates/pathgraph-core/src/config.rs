//! Configuration for pathgraph (stored in ~/.config/pathgraph/config.toml)
//!
//! Every field has a default, so a missing or empty file is a valid config.
//! Command-line flags take precedence over values loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::RelaxationMode;

const CONFIG_DIR: &str = "pathgraph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHGRAPH_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Relaxation used by path queries
    #[serde(default)]
    pub relaxation: RelaxationMode,

    /// Fail when any edge is rejected instead of dropping it
    #[serde(default)]
    pub strict: bool,

    /// Log filter directive (e.g. "debug" or "pathgraph_core=trace")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file yields [`Config::default`].
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(GraphError::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::from_file(path)
            }
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                Self::from_file(&path)
            }
        }
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), relaxation = %config.relaxation, strict = config.strict, "config_loaded");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
