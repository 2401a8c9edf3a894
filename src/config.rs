use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::version::rule::ClassificationRules;

// =============================================================================
// Release policy constants
// =============================================================================

/// Oldest major version the catalog has data for. PostgreSQL switched to
/// two-part version numbers at 10; older servers are reported as unsupported.
pub const DEFAULT_MINIMUM_SUPPORTED_MAJOR: u32 = 10;

/// Years a major version is supported when no explicit EOL date is recorded
pub const DEFAULT_EOL_SUPPORT_YEARS: u32 = 5;

const APP_DIR: &str = "pg-version-report";

/// Report configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportConfig {
    pub minimum_supported_major: u32,
    pub eol_support_years: u32,
    pub rules: ClassificationRules,
    /// Memoise parsed version strings
    pub parse_cache: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            minimum_supported_major: DEFAULT_MINIMUM_SUPPORTED_MAJOR,
            eol_support_years: DEFAULT_EOL_SUPPORT_YEARS,
            rules: ClassificationRules::default(),
            parse_cache: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is tried and
    /// a missing file there means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let path = config_path();
                if path.exists() {
                    Self::from_path(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the data directory for pg-version-report.
/// Uses $XDG_DATA_HOME/pg-version-report if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/pg-version-report,
/// or ./pg-version-report if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Same lookup as [`data_dir`] with $XDG_CONFIG_HOME and ~/.config.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("pg-version-report.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join(APP_DIR)
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join(APP_DIR)
}
