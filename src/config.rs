//! Editor configuration.
//!
//! Every field has a default, so a partial or missing settings file is fine.

use crate::codec::{MergePolicy, DEFAULT_EXPORT_FILE_NAME};
use crate::paths::{self, PathError};
use crate::sync::DEFAULT_SAVE_TIMEOUT_MS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Trigger given to freshly added entries
pub const DEFAULT_PLACEHOLDER_TRIGGER: &str = "new";

/// Url template given to freshly added entries
pub const DEFAULT_PLACEHOLDER_URL: &str = "https://example.com?q=%s";

/// Where the help button points
pub const DEFAULT_HELP_URL: &str = "https://github.com/psidex/CustomBangSearch#options-page";

/// Error types for configuration loading
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error("Failed to read config: {0}")]
    Read(String),
    #[error("Failed to parse config: {0}")]
    Parse(String),
}

/// Settings for an editing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// How long to wait for the owner process to answer a save
    pub save_timeout_ms: u64,
    /// File name offered when exporting
    pub export_file_name: String,
    /// Trigger for new entries
    pub placeholder_trigger: String,
    /// Url template for new entries
    pub placeholder_url: String,
    /// How imports are folded into the current table
    pub merge_policy: MergePolicy,
    /// Help page location
    pub help_url: String,
    /// Override for the stored table location
    pub storage_file: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            save_timeout_ms: DEFAULT_SAVE_TIMEOUT_MS,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            placeholder_trigger: DEFAULT_PLACEHOLDER_TRIGGER.to_string(),
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
            merge_policy: MergePolicy::default(),
            help_url: DEFAULT_HELP_URL.to_string(),
            storage_file: None,
        }
    }
}

impl EditorConfig {
    /// Load settings from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        crate::debug!("Loading editor config from {:?}", path);

        if !path.exists() {
            crate::debug!("No config file found, using defaults");
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        crate::info!("Loaded editor config from {:?}", path);
        Ok(config)
    }

    /// Load settings from the default config location
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&paths::default_config_path()?)
    }

    /// Save timeout as a duration (builder pattern)
    pub fn with_save_timeout(mut self, timeout: Duration) -> Self {
        self.save_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn save_timeout(&self) -> Duration {
        Duration::from_millis(self.save_timeout_ms)
    }

    /// Location of the stored table: the override, or the default path
    pub fn storage_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.storage_file {
            Some(path) => Ok(path.clone()),
            None => Ok(paths::default_bangs_path()?),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
