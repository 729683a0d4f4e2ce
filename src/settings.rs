//! User settings stored as settings.json in the app data directory

use crate::constants::SETTINGS_FILE;
use crate::theme::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    /// Explicit theme choice. `None` means follow the system.
    #[serde(deserialize_with = "lenient_theme")]
    pub theme: Option<ThemeMode>,
}

/// Only `"dark"` selects dark; any other non-empty string is light, so a
/// hand-edited value never discards the rest of the file.
fn lenient_theme<'de, D>(deserializer: D) -> Result<Option<ThemeMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw.as_ref().and_then(serde_json::Value::as_str) {
        Some("dark") => Some(ThemeMode::Dark),
        Some("") | None => None,
        Some(_) => Some(ThemeMode::Light),
    })
}

/// Errors that can occur while writing settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Failed to write settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), SettingsError> {
        let path = data_dir.join(SETTINGS_FILE);
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        debug!(path = %path.display(), "Settings saved");
        Ok(())
    }
}
