//! Application configuration.

use std::path::{Path, PathBuf};

use clinic_core::storage::{read_json_file, write_json_file, StorageResult};
use serde::{Deserialize, Serialize};

/// Directory under the home directory holding config and preferences.
pub const APP_DIR: &str = ".clinicbook";

/// Default log level when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn default_config_path() -> PathBuf {
    app_dir().join("config.json")
}

fn default_user_prefs_file_path() -> PathBuf {
    app_dir().join("preferences.json")
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Settings read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_user_prefs_file_path")]
    pub user_prefs_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            user_prefs_file_path: default_user_prefs_file_path(),
        }
    }
}

impl Config {
    /// Read the config file; `None` if it does not exist.
    pub fn read(path: &Path) -> StorageResult<Option<Self>> {
        read_json_file(path)
    }

    pub fn save(&self, path: &Path) -> StorageResult<()> {
        write_json_file(path, self)
    }

    /// Filter directive for this binary and the core library.
    pub fn log_filter(&self) -> String {
        format!("clinic={0},clinic_core={0}", self.log_level)
    }
}
