// Settings for the browser - sort preferences and the home bookmark.
// Loads from a TOML file, falls back to defaults when it's missing.

use crate::browser::sort::{FileSortOrder, FolderSortOrder};
use anyhow::Result;
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not locate a config directory")]
    NoConfigDir,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub folder_sort_order: FolderSortOrder,
    pub file_sort_order: FileSortOrder,
    pub folders_ascending: bool,
    pub files_ascending: bool,
    /// The bookmarked home directory; `None` (or empty) means unset.
    pub home_directory: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folder_sort_order: FolderSortOrder::default(),
            file_sort_order: FileSortOrder::default(),
            folders_ascending: true,
            files_ascending: true,
            home_directory: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let settings_path = Self::settings_path()?;

        if settings_path.exists() {
            let content = fs::read_to_string(&settings_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save()?;
            Ok(settings)
        }
    }

    pub fn save(&self) -> Result<()> {
        let settings_path = Self::settings_path()?;

        if let Some(parent) = settings_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(settings_path, content)?;

        Ok(())
    }

    fn settings_path() -> Result<PathBuf> {
        let config_dir = config_dir()
            .ok_or(SettingsError::NoConfigDir)?
            .join("ampbrowse");

        Ok(config_dir.join("settings.toml"))
    }
}
