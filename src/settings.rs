//! Game settings and preferences
//!
//! Read from a JSON file at startup. Every field has a default, so a partial
//! file only overrides what it names. Gameplay constants are not configurable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable naming an alternative settings file
pub const SETTINGS_ENV: &str = "BRICKBAR_SETTINGS";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

const MIN_WINDOW_SCALE: f32 = 0.5;
const MAX_WINDOW_SCALE: f32 = 4.0;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sync presentation to the display. Off by default: the frame driver
    /// paces itself at the simulation rate.
    pub vsync: bool,
    /// Pause a running game when the window loses focus
    pub pause_on_blur: bool,
    /// Log the measured frame rate once per second (debug level)
    pub show_fps: bool,
    /// Physical window size multiplier; the playfield is always 800x600
    pub window_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vsync: false,
            pause_on_blur: true,
            show_fps: false,
            window_scale: 1.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Where settings are read from: `$BRICKBAR_SETTINGS`, else `settings.json`
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Load from `path`, falling back to defaults when the file is missing or
    /// broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings: {e}");
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if !self.window_scale.is_finite() {
            self.window_scale = 1.0;
        }
        self.window_scale = self.window_scale.clamp(MIN_WINDOW_SCALE, MAX_WINDOW_SCALE);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.vsync);
        assert!(settings.pause_on_blur);
        assert!(!settings.show_fps);
        assert_eq!(settings.window_scale, 1.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "vsync": true }"#).unwrap();
        assert!(settings.vsync);
        assert!(settings.pause_on_blur);
        assert_eq!(settings.window_scale, 1.0);

        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_window_scale_clamped() {
        let settings = Settings::from_json(r#"{ "window_scale": 10.0 }"#).unwrap();
        assert_eq!(settings.window_scale, MAX_WINDOW_SCALE);

        let settings = Settings::from_json(r#"{ "window_scale": 0.1 }"#).unwrap();
        assert_eq!(settings.window_scale, MIN_WINDOW_SCALE);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ vsync: yes"),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "vsync": "maybe" }"#),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("brickbar-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "show_fps": true, "pause_on_blur": false }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert!(settings.show_fps);
        assert!(!settings.pause_on_blur);
        assert_eq!(Settings::load_or_default(&path), settings);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("brickbar-settings-does-not-exist.json");
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io { .. })));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = Settings {
            vsync: true,
            window_scale: 2.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
