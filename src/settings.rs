//! Session settings
//!
//! Read from an optional JSON file; any field left out keeps its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, ENEMIES, INITIAL_SIZE, MARGIN, MAX_SPEED};
use crate::sim::Arena;

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f64,
    pub arena_height: f64,
    /// Random life forms besides the player
    pub enemies: usize,
    /// Player's starting mass
    pub player_mass: f64,

    // === Session ===
    /// RNG seed for population generation
    pub seed: u64,
    /// Initial ticks per frame
    pub speed: u32,
    /// Show the debug console
    pub debug: bool,

    // === Headless runs ===
    /// Frames the headless binary runs before stopping
    pub frames: u64,
    /// Log the debug console every this many frames (0 = never)
    pub report_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            enemies: ENEMIES,
            player_mass: INITIAL_SIZE,

            seed: 0x05_AB_50_12,
            speed: 1,
            debug: true,

            frames: 3600,
            report_every: 600,
        }
    }
}

impl Settings {
    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{err}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.arena_width > 2.0 * MARGIN && self.arena_height > 2.0 * MARGIN) {
            return Err(SettingsError::Invalid(format!(
                "arena {}x{} must exceed {} in both dimensions",
                self.arena_width,
                self.arena_height,
                2.0 * MARGIN
            )));
        }
        if !(self.player_mass > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "player mass {} must be positive",
                self.player_mass
            )));
        }
        if self.speed == 0 || self.speed > MAX_SPEED {
            return Err(SettingsError::Invalid(format!(
                "speed {} must be within 1..={}",
                self.speed, MAX_SPEED
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.arena(), Arena::new(800.0, 600.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "enemies": 3, "seed": 7 }"#).unwrap();
        assert_eq!(settings.enemies, 3);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.arena_width, ARENA_WIDTH);
        assert_eq!(settings.player_mass, INITIAL_SIZE);
    }

    #[test]
    fn test_round_trip_through_json() {
        let settings = Settings {
            enemies: 40,
            debug: false,
            ..Settings::default()
        };
        assert_eq!(Settings::from_json(&settings.to_json()).unwrap(), settings);
    }

    #[test]
    fn test_rejects_tiny_arena() {
        let err = Settings::from_json(r#"{ "arena_width": 15 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_massless_player() {
        let err = Settings::from_json(r#"{ "player_mass": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_speed() {
        let err = Settings::from_json(r#"{ "speed": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ enemies: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/osmos-settings.json");
        assert!(matches!(Settings::load_from(path), Err(SettingsError::Io { .. })));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }
}
