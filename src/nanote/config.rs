use crate::error::{NanoteError, Result};
use crate::model::DEFAULT_UNTITLED_PREFIX;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_STORAGE_KEY: &str = "nanote-data";
pub const DEFAULT_WELCOME_TITLE: &str = "Welcome to nanote";

/// Configuration for nanote, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NanoteConfig {
    /// Slot the note collection is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Title of the note seeded into an empty store on first start
    #[serde(default = "default_welcome_title")]
    pub welcome_title: String,

    /// Prefix of generated titles (`untitled_2024_01_15_14_30_00`)
    #[serde(default = "default_untitled_prefix")]
    pub untitled_prefix: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_welcome_title() -> String {
    DEFAULT_WELCOME_TITLE.to_string()
}

fn default_untitled_prefix() -> String {
    DEFAULT_UNTITLED_PREFIX.to_string()
}

impl Default for NanoteConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            welcome_title: default_welcome_title(),
            untitled_prefix: default_untitled_prefix(),
        }
    }
}

impl NanoteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NanoteError::Io)?;
        let config: NanoteConfig =
            serde_json::from_str(&content).map_err(NanoteError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NanoteError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NanoteError::Serialization)?;
        fs::write(config_path, content).map_err(NanoteError::Io)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(NanoteError::Config("storage_key must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Per-user data directory, e.g. `~/.local/share/nanote` on Linux.
pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "nanote", "nanote")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NanoteError::Config("Could not determine data dir".to_string()))
}
