//! Default filesystem locations.

use std::path::PathBuf;

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "custombangs";

/// Editor settings file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Stored bang table file name
pub const BANGS_FILE_NAME: &str = "bangs.json";

/// Error types for path resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Per-user config directory for this application
pub fn get_config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(PathError::NoConfigDir)
}

/// Default location of the editor settings file
pub fn default_config_path() -> Result<PathBuf, PathError> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Default location of the stored bang table
pub fn default_bangs_path() -> Result<PathBuf, PathError> {
    Ok(get_config_dir()?.join(BANGS_FILE_NAME))
}
