use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::password::CharacterClassSelection;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Returns the base data directory for PassGen, creating it if needed.
pub fn data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "PassGen", "PassGen") {
        let dir = proj_dirs.data_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            log::warn!("Could not create data directory {}: {e}", dir.display());
        }
        dir.to_path_buf()
    } else {
        PathBuf::from(".")
    }
}

/// User preferences persisted between runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Clipboard clear timeout in seconds (10-120, default 30)
    pub clipboard_clear_seconds: u32,
    /// Restore the character class toggles on next launch
    pub remember_selection: bool,
    pub saved_selection: CharacterClassSelection,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            clipboard_clear_seconds: 30,
            remember_selection: false,
            saved_selection: CharacterClassSelection::default(),
        }
    }
}

impl AppSettings {
    fn settings_path() -> PathBuf {
        data_dir().join("settings.json")
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    /// Load settings from `path`; a missing or unreadable file yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        let mut settings: Self = serde_json::from_str(&data)?;
        // Hand-edited files may be out of range
        settings.set_clipboard_timeout(settings.clipboard_clear_seconds);
        Ok(settings)
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::settings_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    /// Validate and clamp clipboard timeout to allowed range
    pub fn set_clipboard_timeout(&mut self, seconds: u32) {
        self.clipboard_clear_seconds = seconds.clamp(10, 120);
    }

    /// Get clipboard timeout as u64 for comparison with Instant
    pub fn clipboard_timeout_u64(&self) -> u64 {
        self.clipboard_clear_seconds as u64
    }

    /// Toggles to start the form with
    pub fn initial_selection(&self) -> CharacterClassSelection {
        if self.remember_selection {
            self.saved_selection
        } else {
            CharacterClassSelection::default()
        }
    }
}
