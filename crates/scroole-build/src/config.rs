//! Driver configuration types

use crate::driver::{FailurePolicy, SourceTree};
use crate::error::{BuildError, BuildResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "scroole.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// scroole.toml configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrooleConfig {
    /// Root of the `*.scroole` declarations
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Root the generated `*.java` files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Write the units that succeeded even when others fail
    #[serde(default)]
    pub keep_going: bool,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("src/main/scroole")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("target/generated-sources/scroole")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ScrooleConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            log_level: default_log_level(),
            keep_going: false,
        }
    }
}

impl ScrooleConfig {
    /// Create a configuration with every default
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> BuildResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text. Empty text yields the defaults.
    pub fn from_toml(content: &str) -> BuildResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| BuildError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, else `scroole.toml` if present, else the defaults.
    ///
    /// An explicitly given file must exist.
    pub fn load(path: Option<&Path>) -> BuildResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(CONFIG_FILE_NAME).is_file() => Self::from_file(CONFIG_FILE_NAME),
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> BuildResult<()> {
        if self.source_dir.as_os_str().is_empty() {
            return Err(BuildError::Config("source_dir cannot be empty".to_string()));
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(BuildError::Config("output_dir cannot be empty".to_string()));
        }

        if !is_valid_log_level(&self.log_level) {
            return Err(BuildError::Config(format!(
                "invalid log_level {:?}, expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::Skip
        } else {
            FailurePolicy::Abort
        }
    }

    /// Open the configured source and output roots.
    pub fn source_tree(&self) -> BuildResult<SourceTree> {
        SourceTree::new(&self.source_dir, &self.output_dir)
    }

    /// Open the configured source root for checking. The output root is not
    /// validated.
    pub fn check_tree(&self) -> BuildResult<SourceTree> {
        SourceTree::for_check(&self.source_dir, &self.output_dir)
    }
}

fn is_valid_log_level(level: &str) -> bool {
    LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
