//! Storage configuration.
//!
//! Clients resolve where SilentPad keeps its namespace files from, in order:
//! an explicit path, the `SILENTPAD_DATA_DIR` environment variable, the
//! platform data directory, and finally `./silentpad`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::util::normalize_text_option;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "SILENTPAD_DATA_DIR";

const APP_DIR_NAME: &str = "silentpad";

/// Where the key-value namespaces are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Resolve from an explicit path, then the environment, then platform defaults
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, std::env::var(DATA_DIR_ENV).ok())
    }

    fn resolve_with(explicit: Option<PathBuf>, env_value: Option<String>) -> Self {
        let data_dir = explicit
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| normalize_text_option(env_value).map(PathBuf::from))
            .unwrap_or_else(default_data_dir);
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

/// Platform data directory for SilentPad (e.g. `~/.local/share/silentpad`)
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
