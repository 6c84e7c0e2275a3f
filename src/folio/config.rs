//! # Configuration
//!
//! Folio reads an optional `config.json` from its config directory (the OS
//! config location from the `directories` crate, or `--config-dir`). A missing
//! file means defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `posts-file` | unset | JSON posts collection used instead of the built-in blog |
//! | `publications-file` | unset | JSON publications list used as the sync source |
//! | `researcher-id` | unset | ORCID iD of the researcher the publications belong to |

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`FolioConfig::get`] and [`FolioConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["posts-file", "publications-file", "researcher-id"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FolioConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub researcher_id: Option<String>,
}

impl FolioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FolioError::Io)?;
        let config: FolioConfig =
            serde_json::from_str(&content).map_err(FolioError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FolioError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FolioError::Serialization)?;
        fs::write(config_path, content).map_err(FolioError::Io)?;
        Ok(())
    }

    /// Current value of `key` as display text. `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        let unset = || "(unset)".to_string();
        match key {
            "posts-file" => Some(
                self.posts_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(unset),
            ),
            "publications-file" => Some(
                self.publications_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(unset),
            ),
            "researcher-id" => Some(self.researcher_id.clone().unwrap_or_else(unset)),
            _ => None,
        }
    }

    /// Sets `key`. An empty value unsets optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let optional = |v: &str| (!v.is_empty()).then(|| v.to_string());
        match key {
            "posts-file" => self.posts_file = optional(value).map(PathBuf::from),
            "publications-file" => self.publications_file = optional(value).map(PathBuf::from),
            "researcher-id" => self.researcher_id = optional(value),
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }

    /// `(key, value)` pairs for display.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}
