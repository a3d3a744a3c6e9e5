//! Simulation tuning and RNG seed
//!
//! Every constant the update pass reads lives here so sessions can be
//! reproduced (and tests can shrink the world) without touching code.
//! Missing fields in a JSON file fall back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Most grass blades a strip may hold
pub const MAX_GRASS_BLADES: f32 = 4096.0;

/// Most stars or clouds a session may keep alive
pub const MAX_POPULATION: usize = 256;

/// Finite and strictly greater than zero (false for NaN)
#[inline]
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// All simulation tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the single simulation RNG
    pub seed: u64,

    // === Canvas ===
    pub width: f32,
    pub height: f32,

    // === Player ===
    pub player_size: f32,
    pub player_speed: f32,
    pub player_jump: f32,
    pub gravity: f32,

    // === Bullets ===
    pub bullet_size: f32,
    pub bullet_speed: f32,

    // === Enemy ===
    pub enemy_size: f32,
    pub enemy_speed: f32,

    // === Stars ===
    pub star_size: f32,
    pub star_count: usize,

    // === Clouds ===
    pub cloud_count: usize,
    pub cloud_drift: f32,
    pub cloud_min_size: f32,
    pub cloud_size_range: f32,

    // === Particles ===
    /// Per-bullet, per-frame emission probability
    pub particle_chance: f32,
    pub particle_lifetime: u32,
    pub particle_min_size: f32,
    pub particle_size_range: f32,
    pub particle_color: u32,

    // === Grass ===
    pub grass_height: f32,
    pub grass_spacing: f32,
    pub grass_variation: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,

            width: WIDTH,
            height: HEIGHT,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_jump: PLAYER_JUMP,
            gravity: GRAVITY,

            bullet_size: BULLET_SIZE,
            bullet_speed: BULLET_SPEED,

            enemy_size: ENEMY_SIZE,
            enemy_speed: ENEMY_SPEED,

            star_size: STAR_SIZE,
            star_count: STAR_COUNT,

            cloud_count: CLOUD_COUNT,
            cloud_drift: CLOUD_DRIFT,
            cloud_min_size: CLOUD_MIN_SIZE,
            cloud_size_range: CLOUD_SIZE_RANGE,

            particle_chance: PARTICLE_CHANCE,
            particle_lifetime: PARTICLE_LIFETIME,
            particle_min_size: PARTICLE_MIN_SIZE,
            particle_size_range: PARTICLE_SIZE_RANGE,
            particle_color: PARTICLE_COLOR,

            grass_height: GRASS_HEIGHT,
            grass_spacing: GRASS_SPACING,
            grass_variation: GRASS_VARIATION,
        }
    }
}

impl SimConfig {
    /// Default tuning with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to load config {}: {} (using defaults)",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Reject values the update pass cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(is_positive(self.width) && is_positive(self.height)) {
            return Err(ConfigError::Invalid(format!(
                "canvas must be positive and finite, got {}x{}",
                self.width, self.height
            )));
        }

        let sizes = [
            ("player_size", self.player_size),
            ("bullet_size", self.bullet_size),
            ("enemy_size", self.enemy_size),
            ("star_size", self.star_size),
        ];
        for (name, size) in sizes {
            if !is_positive(size) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {size}")));
            }
            if size > self.width || size > self.height {
                return Err(ConfigError::Invalid(format!(
                    "{name} ({size}) does not fit in the canvas"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.particle_chance) {
            return Err(ConfigError::Invalid(format!(
                "particle_chance must be in [0, 1], got {}",
                self.particle_chance
            )));
        }
        if self.particle_lifetime == 0 {
            return Err(ConfigError::Invalid("particle_lifetime must be at least 1".into()));
        }
        if !is_positive(self.grass_spacing) || self.width / self.grass_spacing > MAX_GRASS_BLADES {
            return Err(ConfigError::Invalid(format!(
                "grass_spacing must be positive with at most {} blades across {}, got {}",
                MAX_GRASS_BLADES, self.width, self.grass_spacing
            )));
        }
        if self.star_count > MAX_POPULATION || self.cloud_count > MAX_POPULATION {
            return Err(ConfigError::Invalid(format!(
                "star_count ({}) and cloud_count ({}) must not exceed {}",
                self.star_count, self.cloud_count, MAX_POPULATION
            )));
        }
        let cloud_sizes_ok = [self.cloud_min_size, self.cloud_size_range]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if !cloud_sizes_ok {
            return Err(ConfigError::Invalid("cloud sizes must be finite and not negative".into()));
        }
        Ok(())
    }

    /// Highest y the player can rest at (ground line)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - self.player_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_consts() {
        let config = SimConfig::default();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 600.0);
        assert_eq!(config.star_count, 5);
        assert_eq!(config.cloud_count, 5);
        assert_eq!(config.ground_y(), 560.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json_str(r#"{ "seed": 7, "enemy_speed": 4.5 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.enemy_speed, 4.5);
        assert_eq!(config.player_size, PLAYER_SIZE);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = SimConfig::from_json_str("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = SimConfig::from_json_str(r#"{ "player_size": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SimConfig::from_json_str(r#"{ "particle_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SimConfig::from_json_str(r#"{ "width": 20.0, "player_size": 40.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_unbounded_populations() {
        let err = SimConfig::from_json_str(r#"{ "grass_spacing": 1e-30 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SimConfig::from_json_str(r#"{ "star_count": 100000000 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SimConfig::from_json_str(r#"{ "cloud_count": 100000000 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_non_finite_canvas() {
        let config = SimConfig {
            width: f32::INFINITY,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = SimConfig {
            height: f32::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = SimConfig {
            player_size: f32::NAN,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = SimConfig::load_or_default("/nonexistent/star-collector.json");
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!("star-collector-{}.json", std::process::id()));
        let config = SimConfig::with_seed(42);
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        let loaded = SimConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }
}
