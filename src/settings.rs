//! Game settings
//!
//! Loaded from an optional JSON file; anything missing falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FPS, MAX_FPS, MIN_FPS};
use crate::input::{KeyBinding, KeyBindings};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub fps: f64,
    /// Fixed RNG seed (time-seeded when absent)
    pub seed: Option<u64>,
    /// Key overrides layered on top of the default layout
    pub bindings: Vec<KeyBinding>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fps: FPS,
            seed: None,
            bindings: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Default layout with configured overrides applied
    pub fn key_bindings(&self) -> KeyBindings {
        let mut keys = KeyBindings::default();
        keys.apply(&self.bindings);
        keys
    }

    fn sanitize(&mut self) {
        if !(MIN_FPS..=MAX_FPS).contains(&self.fps) {
            log::warn!("Ignoring fps {}, using {}", self.fps, FPS);
            self.fps = FPS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSymbol;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_full() {
        let settings = Settings::from_json(
            r#"{ "fps": 30.0, "seed": 42, "bindings": [ { "key": "r", "symbol": "Start" } ] }"#,
        )
        .unwrap();
        assert_eq!(settings.fps, 30.0);
        assert_eq!(settings.seed, Some(42));
        let keys = settings.key_bindings();
        assert_eq!(keys.lookup('r'), Some(InputSymbol::Start));
        assert_eq!(keys.lookup(' '), Some(InputSymbol::Start));
    }

    #[test]
    fn test_bad_fps_falls_back() {
        let settings = Settings::from_json(r#"{ "fps": -5.0 }"#).unwrap();
        assert_eq!(settings.fps, FPS);
    }

    #[test]
    fn test_out_of_range_fps_falls_back() {
        for fps in ["1e-300", "0.5", "0.0", "1e300", "5000.0"] {
            let settings = Settings::from_json(&format!(r#"{{ "fps": {fps} }}"#)).unwrap();
            assert_eq!(settings.fps, FPS, "fps {fps}");
        }
        // The frame clock built from sanitized settings has a sleepable step
        let settings = Settings::from_json(r#"{ "fps": 1e-300 }"#).unwrap();
        let clock = crate::FrameClock::new(settings.fps);
        assert!(clock.step() <= 1.0 / MIN_FPS);
    }

    #[test]
    fn test_bounds_are_accepted() {
        assert_eq!(Settings::from_json(r#"{ "fps": 1.0 }"#).unwrap().fps, MIN_FPS);
        assert_eq!(Settings::from_json(r#"{ "fps": 1000.0 }"#).unwrap().fps, MAX_FPS);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ fps: ").is_err());
        assert!(Settings::from_json(r#"{ "bindings": [ { "key": "q", "symbol": "Nope" } ] }"#).is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = Settings::load(Path::new("/nonexistent/football-juggling.json"));
        assert_eq!(settings, Settings::default());
    }
}
