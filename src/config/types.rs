//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::WiserResult;

use super::loader::{self, ConfigWarning};

/// Default store location, relative to the working directory
pub const DEFAULT_STORE_PATH: &str = ".wiser/publish.toml";

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

/// Publish configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PublishConfig {
    /// User recorded in the audit trail
    #[serde(default)]
    pub user: Option<String>,

    /// Compute and report, but never write
    #[serde(default)]
    pub dry_run: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub json: bool,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            json: false,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Verbosity level, ordered from least to most output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse an override value; unknown values fall back to `Normal`
    pub fn from_override(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        }
    }

    /// Map `-v` occurrences onto a level, never lowering the configured one
    pub fn raised_by(self, count: u8) -> Self {
        let from_flag = match count {
            0 => return self,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        };
        self.max(from_flag)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load the nearest config file, failing on invalid TOML
    pub fn discover(project_root: Option<&Path>) -> WiserResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root)
    }

    /// User recorded in the audit trail when none is given explicitly
    pub fn acting_user(&self) -> String {
        self.publish
            .user
            .clone()
            .filter(|user| !user.trim().is_empty())
            .or_else(|| std::env::var("USER").ok())
            .or_else(|| std::env::var("USERNAME").ok())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
