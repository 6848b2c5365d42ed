use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub clean: CleanConfig,
}

/// One clean run, fully described.
///
/// Roots are plain path strings, relative or absolute, resolved against the
/// current working directory by the collaborators that touch the disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanConfig {
    /// Source tree scanned for current, authoritative input files.
    pub src_root: String,
    /// Destination tree assumed to hold build outputs; the cleanup target.
    pub dest_root: String,
    /// Override for the base "everything under destination" pattern.
    pub base_pattern: Option<String>,
    /// Path to a file-map description; absent means 1:1 pass-through mapping.
    #[serde(rename = "file_map")]
    pub file_map_path: Option<String>,
    /// Irreversible removal instead of the recoverable trash.
    pub permanent: bool,
    /// Emit diagnostic logging.
    pub verbose: bool,
    /// Compute the removal set without mutating the filesystem.
    pub dry_run: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            src_root: "./src".to_string(),
            dest_root: "./dest".to_string(),
            base_pattern: None,
            file_map_path: None,
            permanent: false,
            verbose: false,
            dry_run: false,
        }
    }
}

impl Config {
    /// Load configuration from an optional TOML file; defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reject structurally unusable configurations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clean.src_root.is_empty() {
            return Err(ConfigError::Invalid("source root must not be empty".into()));
        }
        if self.clean.dest_root.is_empty() {
            return Err(ConfigError::Invalid(
                "destination root must not be empty".into(),
            ));
        }
        Ok(())
    }
}
