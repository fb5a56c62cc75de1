//! Emitter configuration values.
//!
//! Plain data with serde derives; TOML and JSON helpers mirror the usual
//! config-file flow. The contract for every numeric field is "sanitize,
//! don't fail": out-of-range values are clamped at the point of assignment
//! (see the setters on `ParticleEmitter`) and [`EmitterConfig::sanitize`]
//! applies the same clamps after deserialization.

use crate::render::Color;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors for file/string loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    ParseError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// All tunable values of one emitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitterConfig {
    /// Spawn-region origin in world space.
    pub position: Vec2,
    /// Spawn-region extent; components below zero clamp to zero.
    pub size: Vec2,
    /// Texture path handed to the loader at `load_content`.
    pub texture_path: String,
    /// Pool capacity. Fixed once content is loaded; changing it afterwards
    /// only takes effect on the next `load_content`.
    pub max_particles: usize,
    /// Particles spawned per emission burst.
    pub particles_per_emit: u32,
    /// Interval between bursts in milliseconds; non-positive values mean a
    /// burst on every update.
    pub time_per_emit_ms: f32,
    /// Base velocity copied (or negated) into each particle at spawn.
    pub velocity: Vec2,
    /// Base angular velocity, radians per second.
    pub angular_velocity: f32,
    /// Base lifetime budget in milliseconds.
    pub lifetime_ms: f32,
    /// Upper bound of the random lifetime jitter added at spawn. Zero makes
    /// lifetimes exact, which deterministic tests rely on.
    pub lifetime_jitter_ms: f32,
    /// Tint applied to particles when `random_color` is off.
    pub color: Color,
    /// Give each particle a random near-opaque color instead of the tint.
    pub random_color: bool,
    /// Flip the base velocity with probability 1/2 at spawn.
    pub random_direction: bool,
    /// Gates both emission and simulation.
    pub enabled: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Vec2::ZERO,
            texture_path: String::new(),
            max_particles: 256,
            particles_per_emit: 1,
            time_per_emit_ms: 16.0,
            velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            lifetime_ms: 1000.0,
            lifetime_jitter_ms: 500.0,
            color: Color::WHITE,
            random_color: false,
            random_direction: false,
            enabled: true,
        }
    }
}

impl EmitterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamps every numeric field into its valid range.
    pub fn sanitize(&mut self) {
        self.size.x = self.size.x.max(0.0);
        self.size.y = self.size.y.max(0.0);
        self.time_per_emit_ms = if self.time_per_emit_ms > 0.0 {
            self.time_per_emit_ms
        } else {
            0.0
        };
        self.lifetime_ms = self.lifetime_ms.max(0.0);
        self.lifetime_jitter_ms = self.lifetime_jitter_ms.max(0.0);
    }

    /// Loads a sanitized config from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses a sanitized config from a TOML string.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.sanitize();
        Ok(config)
    }

    /// Loads a sanitized config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parses a sanitized config from a JSON string.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let mut config: Self =
            serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.sanitize();
        Ok(config)
    }

    /// Saves the config as pretty TOML.
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// Saves the config as pretty JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_clamps_numeric_fields() {
        let mut config = EmitterConfig {
            size: Vec2::new(-10.0, -1.0),
            time_per_emit_ms: -5.0,
            lifetime_ms: -100.0,
            lifetime_jitter_ms: -1.0,
            ..Default::default()
        };
        config.sanitize();
        assert_eq!(config.size, Vec2::ZERO);
        assert_eq!(config.time_per_emit_ms, 0.0);
        assert_eq!(config.lifetime_ms, 0.0);
        assert_eq!(config.lifetime_jitter_ms, 0.0);
    }

    #[test]
    fn test_toml_round_trip_sanitizes() {
        let toml = r#"
            position = [10.0, 20.0]
            size = [-4.0, 8.0]
            texture_path = "spark.png"
            max_particles = 64
            particles_per_emit = 3
            time_per_emit_ms = 33.0
            velocity = [0.0, -40.0]
            angular_velocity = 1.5
            lifetime_ms = 750.0
            lifetime_jitter_ms = 250.0
            color = { r = 255, g = 128, b = 0, a = 255 }
            random_color = false
            random_direction = true
            enabled = true
        "#;
        let config = EmitterConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.size, Vec2::new(0.0, 8.0));
        assert_eq!(config.max_particles, 64);
        assert_eq!(config.texture_path, "spark.png");
        assert!(config.random_direction);
    }

    #[test]
    fn test_json_parse_error_is_reported() {
        assert!(matches!(
            EmitterConfig::from_json_str("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
