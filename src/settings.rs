//! Viewer settings
//!
//! Persisted as JSON next to the per-account directories.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_MAX_AGE_DAYS;
use crate::error::Result;

/// Settings consumed by the data stores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Days a recent-people entry survives without a new interaction
    pub recent_people_max_age_days: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recent_people_max_age_days: DEFAULT_MAX_AGE_DAYS,
        }
    }
}

impl Settings {
    /// Settings file name under the storage root
    pub const FILE_NAME: &'static str = "settings.json";

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if let Ok(json) = fs::read_to_string(path) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(&dir.path().join(Settings::FILE_NAME));
        assert_eq!(settings.recent_people_max_age_days, 30);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(Settings::FILE_NAME);
        fs::write(&path, "{ max age: ten }").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(Settings::FILE_NAME);
        fs::write(&path, "{}").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(Settings::FILE_NAME);
        let settings = Settings {
            recent_people_max_age_days: 7,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).recent_people_max_age_days, 7);
    }
}
