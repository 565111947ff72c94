//! Application settings persistence
//!
//! Handles loading the initial ring configuration and host window layout.
//! Progress is only read from here at startup, never written back.

use std::path::{Path, PathBuf};

use iced::{Color, Size};
use serde::{Deserialize, Serialize};

use crate::ui::primitives::progress_ring::{DEFAULT_LINE_WIDTH_RATIO, DEFAULT_PROGRESS};
use crate::ui::theme;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Initial ring appearance
    #[serde(default)]
    pub ring: RingSettings,
    /// Host window layout
    #[serde(default)]
    pub window: WindowSettings,
}

/// Initial state applied to the progress ring at boot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSettings {
    /// Progress value (clamped to 0.0 - 1.0 when applied)
    #[serde(default = "default_progress")]
    pub progress: f32,
    /// Stroke width; `None` uses 10% of the ring size
    #[serde(default)]
    pub line_width: Option<f32>,
    /// Progress arc color as `#RRGGBB` or `#RRGGBBAA`
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_progress() -> f32 {
    DEFAULT_PROGRESS
}

fn default_color() -> String {
    theme::to_hex(theme::ACCENT_CORNFLOWER)
}

/// Host window layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    /// Host surface width
    #[serde(default = "default_window_extent")]
    pub width: f32,
    /// Host surface height
    #[serde(default = "default_window_extent")]
    pub height: f32,
    /// Edge length of the square ring frame
    #[serde(default = "default_ring_size")]
    pub ring_size: f32,
    /// Offset of the ring frame from the top-left corner
    #[serde(default = "default_ring_offset")]
    pub ring_offset: f32,
}

fn default_window_extent() -> f32 {
    200.0
}

fn default_ring_size() -> f32 {
    100.0
}

fn default_ring_offset() -> f32 {
    50.0
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            progress: default_progress(),
            line_width: None,
            color: default_color(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_extent(),
            height: default_window_extent(),
            ring_size: default_ring_size(),
            ring_offset: default_ring_offset(),
        }
    }
}

impl RingSettings {
    /// Stroke width for a ring frame of the given edge length
    pub fn line_width_for(&self, ring_size: f32) -> f32 {
        self.line_width
            .filter(|width| width.is_finite() && *width >= 0.0)
            .unwrap_or(ring_size * DEFAULT_LINE_WIDTH_RATIO)
    }

    /// Parsed progress arc color, falling back to the default accent
    pub fn accent(&self) -> Color {
        theme::parse_hex(&self.color).unwrap_or_else(|| {
            tracing::warn!("Invalid ring color {:?}, using default", self.color);
            theme::ACCENT_CORNFLOWER
        })
    }
}

impl WindowSettings {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn ring_frame(&self) -> Size {
        Size::new(self.ring_size, self.ring_size)
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "circle-progress", "CircleProgress")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the default file, writing defaults on first run
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };
        Self::load_or_init(&path)
    }

    /// Load settings from `path`; a missing file is created with defaults and
    /// an unreadable one is left alone
    pub fn load_or_init(path: &Path) -> Self {
        if !path.exists() {
            let settings = Self::default();
            match settings.save_to_file(path) {
                Ok(()) => tracing::info!("Wrote default settings to {:?}", path),
                Err(e) => tracing::warn!("Failed to write default settings: {}", e),
            }
            return settings;
        }

        match Self::load_from_file(path) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let settings = Settings::default();
        assert_eq!(settings.ring.progress, 0.75);
        assert_eq!(settings.ring.color, "#6495ED");
        assert_eq!(settings.window.size(), Size::new(200.0, 200.0));
        assert_eq!(settings.window.ring_frame(), Size::new(100.0, 100.0));
        assert_eq!(settings.window.ring_offset, 50.0);
    }

    #[test]
    fn test_line_width_falls_back_to_ratio() {
        let mut ring = RingSettings::default();
        assert!((ring.line_width_for(100.0) - 10.0).abs() < 1e-6);

        ring.line_width = Some(4.0);
        assert_eq!(ring.line_width_for(100.0), 4.0);

        ring.line_width = Some(-1.0);
        assert!((ring.line_width_for(100.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_color_uses_default() {
        let ring = RingSettings {
            color: "not a color".to_string(),
            ..Default::default()
        };
        assert_eq!(ring.accent(), theme::ACCENT_CORNFLOWER);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "ring": { "progress": 0.4 } }"#).unwrap();
        assert_eq!(settings.ring.progress, 0.4);
        assert_eq!(settings.ring.line_width, None);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.ring.line_width = Some(6.0);
        settings.ring.color = "#FF0000".to_string();
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings::load_or_init(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_or_init_keeps_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert_eq!(Settings::load_or_init(&path), Settings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
    }
}
