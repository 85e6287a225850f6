//! Game settings and preferences
//!
//! Persisted separately from everything else as a small JSON file.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::persistence;

/// Visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    Neon,
    #[default]
    Bold,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Neon => "Neon",
            Theme::Bold => "Bold",
        }
    }

    /// Prefix an asset path with the theme directory
    pub fn file_path(&self, path: &str) -> String {
        format!("{}/{}", self.as_str(), path)
    }

    /// Background color (RGB)
    pub fn background_color(&self) -> [f32; 3] {
        match self {
            Theme::Neon => [0.05, 0.06, 0.12],
            Theme::Bold => [1.0, 1.0, 1.0],
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neon" => Ok(Theme::Neon),
            "bold" => Ok(Theme::Bold),
            _ => Err(format!("unknown theme '{s}' (expected neon or bold)")),
        }
    }
}

/// Player settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Background music on/off
    pub music_enabled: bool,
    /// Asset theme
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            theme: Theme::Bold,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults if missing or unreadable
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }
        match persistence::read_json(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings; failures are logged, not fatal
    pub fn save(&self, path: &Path) {
        match persistence::write_json(path, self) {
            Ok(()) => log::info!("Settings saved"),
            Err(e) => log::warn!("Failed to save settings to {}: {e}", path.display()),
        }
    }
}
