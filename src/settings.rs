//! Game settings and preferences
//!
//! Stored as JSON next to the binary. Missing fields take their defaults, so
//! older files keep loading as options are added.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::MatchTuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Gameplay ===
    /// Ball, paddle and sweep tuning
    pub tuning: MatchTuning,
    /// Serve RNG seed (`None` seeds from the clock)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: MatchTuning::default(),
            seed: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Volume a sound effect should play at
    pub fn effective_sfx_volume(&self) -> f32 {
        (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
    }

    /// Seed for the next match: the configured one, else derived from the clock
    pub fn match_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0x5eed)
        })
    }

    /// Settings with out-of-range tuning replaced by defaults
    pub fn sanitized(self) -> Self {
        Self {
            tuning: self.tuning.sanitized(),
            ..self
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings, writing the defaults out first if the file is missing
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            return Self::load_from(path);
        }
        let settings = Self::default();
        if let Err(e) = settings.save_to(path) {
            log::warn!("Could not write default settings to {}: {}", path.display(), e);
        }
        settings
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("edge-pong-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "seed": 9, "tuning": { "ball_speed": 250.0 } }"#).unwrap();

        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.tuning.ball_speed, 250.0);
        assert_eq!(settings.tuning.paddle_height, MatchTuning::default().paddle_height);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.match_seed(), 9);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/edge-pong/settings.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_tuning_values_fall_back_per_field() {
        let defaults = MatchTuning::default();
        let cases = [
            (r#"{ "tuning": { "max_sweep_iterations": 0 } }"#, "max_sweep_iterations"),
            (r#"{ "tuning": { "ball_speed": -400.0 } }"#, "ball_speed"),
            (r#"{ "tuning": { "ball_speed": 0.0 } }"#, "ball_speed"),
            (r#"{ "tuning": { "ball_diameter": -30.0 } }"#, "ball_diameter"),
            (r#"{ "tuning": { "paddle_width": 0.0 } }"#, "paddle_width"),
            (r#"{ "tuning": { "paddle_height": -1.0 } }"#, "paddle_height"),
            (r#"{ "tuning": { "paddle_speed": -400.0 } }"#, "paddle_speed"),
            (r#"{ "tuning": { "paddle_inset": -10.0 } }"#, "paddle_inset"),
        ];

        for (index, (json, field)) in cases.iter().enumerate() {
            let path = temp_path(&format!("invalid-{}", index));
            std::fs::write(&path, json).unwrap();
            let loaded = Settings::load_from(&path);
            let _ = std::fs::remove_file(&path);

            assert_eq!(loaded.tuning, defaults, "{} was not replaced", field);
        }
    }

    #[test]
    fn test_valid_tuning_survives_load() {
        let path = temp_path("valid-tuning");
        let json = r#"{
            "tuning": { "ball_speed": 250.0, "paddle_inset": 0.0, "max_sweep_iterations": 1 }
        }"#;
        std::fs::write(&path, json).unwrap();
        let loaded = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.tuning.ball_speed, 250.0);
        assert_eq!(loaded.tuning.paddle_inset, 0.0);
        assert_eq!(loaded.tuning.max_sweep_iterations, 1);
    }

    #[test]
    fn test_non_finite_tuning_is_replaced() {
        let mut tuning = MatchTuning::default();
        tuning.ball_speed = f32::NAN;
        tuning.ball_diameter = f32::INFINITY;
        tuning.paddle_speed = f32::NEG_INFINITY;

        assert_eq!(tuning.sanitized(), MatchTuning::default());
    }

    #[test]
    fn test_load_or_create_writes_defaults_once() {
        let path = temp_path("created");
        let _ = std::fs::remove_file(&path);

        let created = Settings::load_or_create(&path);
        assert_eq!(created, Settings::default());
        assert!(path.exists());

        let mut edited = Settings::default();
        edited.show_fps = true;
        edited.save_to(&path).unwrap();
        let reloaded = Settings::load_or_create(&path);
        let _ = std::fs::remove_file(&path);

        assert!(reloaded.show_fps);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved");
        let mut settings = Settings::default();
        settings.seed = Some(1234);
        settings.tuning.max_sweep_iterations = 12;
        settings.sfx_volume = 0.5;

        settings.save_to(&path).unwrap();
        let loaded = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, settings);
        assert!((loaded.effective_sfx_volume() - 0.4).abs() < 1e-6);
    }
}
