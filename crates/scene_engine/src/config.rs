//! Engine tuning configuration
//!
//! All gameplay constants live here as serde-backed structs with defaults
//! tuned for a 60 Hz background scene. Speeds and rates are per second;
//! sizes and distances are scene pixels.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Frame timing settings
    pub timing: TimingConfig,

    /// Ship steering settings
    pub ship: ShipConfig,

    /// Cannon settings
    pub firing: FiringConfig,

    /// Target spawning settings
    pub targets: TargetConfig,

    /// Explosion particle settings
    pub particles: ParticleConfig,

    /// Population limits
    pub limits: LimitConfig,
}

/// Frame timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Upper bound applied to elapsed time per tick, in seconds.
    ///
    /// Keeps the simulation from jumping after a stall (background tab,
    /// debugger pause).
    pub max_frame_delta: f32,
}

/// Ship steering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Hull width
    pub width: f32,

    /// Hull height
    pub height: f32,

    /// Distance of the ship center above the bottom edge
    pub bottom_anchor: f32,

    /// Horizontal margin the steering target keeps from either edge
    pub edge_margin: f32,

    /// Expected steering-target changes per second
    pub retarget_rate: f32,

    /// Per-second exponential smoothing rate toward the steering target
    pub steering_rate: f32,

    /// Minimum engine flame height
    pub flame_min: f32,

    /// Random flame height added on top of the minimum
    pub flame_span: f32,
}

/// Cannon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FiringConfig {
    /// Minimum interval between volleys, in seconds
    pub cooldown: f32,

    /// Chance that a volley also fires the two wing cannons
    pub side_cannon_chance: f32,

    /// Nose bullet speed, straight up
    pub bullet_speed: f32,

    /// Nose bullet width
    pub bullet_width: f32,

    /// Nose bullet height
    pub bullet_height: f32,

    /// Vertical distance from ship center to the nose muzzle
    pub nose_offset: f32,

    /// Wing bullet upward speed
    pub side_bullet_speed: f32,

    /// Wing bullet outward horizontal speed
    pub side_bullet_drift: f32,

    /// Wing bullet width
    pub side_bullet_width: f32,

    /// Wing bullet height
    pub side_bullet_height: f32,

    /// Horizontal distance from ship center to each wing muzzle
    pub side_offset_x: f32,

    /// Vertical offset from ship center to the wing muzzles
    pub side_offset_y: f32,

    /// How far above the top edge a bullet may travel before removal
    pub top_margin: f32,
}

/// Target spawning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Expected spawns per second while below the live cap
    pub spawn_rate: f32,

    /// Maximum number of live targets
    pub max_live: usize,

    /// Target width
    pub width: f32,

    /// Target height
    pub height: f32,

    /// Spawn distance above the top edge
    pub spawn_height: f32,

    /// Maximum lateral drift speed, either direction
    pub drift_x: f32,

    /// Minimum fall speed
    pub fall_min: f32,

    /// Random fall speed added on top of the minimum
    pub fall_span: f32,

    /// How far below the bottom edge a target may travel before removal
    pub despawn_margin: f32,
}

/// Explosion particle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles spawned per destroyed target
    pub burst_count: usize,

    /// Maximum outward speed per axis, either direction
    pub max_speed: f32,

    /// Minimum particle side length
    pub size_min: f32,

    /// Random side length added on top of the minimum
    pub size_span: f32,

    /// Life drained per second; life starts at 1.0
    pub decay_rate: f32,
}

/// Population limit configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Hard cap on total entity count
    pub max_entities: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            max_frame_delta: 0.05,
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 60.0,
            bottom_anchor: 80.0,
            edge_margin: 50.0,
            retarget_rate: 1.2,
            steering_rate: 3.0,
            flame_min: 10.0,
            flame_span: 10.0,
        }
    }
}

impl Default for FiringConfig {
    fn default() -> Self {
        Self {
            cooldown: 0.25,
            side_cannon_chance: 0.3,
            bullet_speed: 720.0,
            bullet_width: 4.0,
            bullet_height: 15.0,
            nose_offset: 30.0,
            side_bullet_speed: 600.0,
            side_bullet_drift: 60.0,
            side_bullet_width: 3.0,
            side_bullet_height: 10.0,
            side_offset_x: 25.0,
            side_offset_y: 10.0,
            top_margin: 20.0,
        }
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            spawn_rate: 1.2,
            max_live: 12,
            width: 40.0,
            height: 40.0,
            spawn_height: 50.0,
            drift_x: 45.0,
            fall_min: 48.0,
            fall_span: 30.0,
            despawn_margin: 50.0,
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            burst_count: 12,
            max_speed: 180.0,
            size_min: 1.0,
            size_span: 3.0,
            decay_rate: 1.8,
        }
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self { max_entities: 150 }
    }
}

impl SceneConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: SceneConfig = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, falling back to defaults when it is absent or bad
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {:?}, using defaults", path.as_ref());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring config at {:?}: {}", path.as_ref(), e);
                Self::default()
            }
        }
    }

    /// Check tuning values for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timing.max_frame_delta <= 0.0 {
            return Err(ConfigError::Invalid(
                "timing.max_frame_delta must be positive".to_string(),
            ));
        }
        if self.firing.cooldown <= 0.0 {
            return Err(ConfigError::Invalid(
                "firing.cooldown must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.firing.side_cannon_chance) {
            return Err(ConfigError::Invalid(
                "firing.side_cannon_chance must be within [0, 1]".to_string(),
            ));
        }
        if self.targets.max_live == 0 {
            return Err(ConfigError::Invalid(
                "targets.max_live must be at least 1".to_string(),
            ));
        }
        if self.particles.burst_count == 0 {
            return Err(ConfigError::Invalid(
                "particles.burst_count must be at least 1".to_string(),
            ));
        }
        if self.particles.decay_rate <= 0.0 {
            return Err(ConfigError::Invalid(
                "particles.decay_rate must be positive".to_string(),
            ));
        }
        if self.limits.max_entities == 0 {
            return Err(ConfigError::Invalid(
                "limits.max_entities must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or type error
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values fail validation
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_cooldown_rejected() {
        let mut config = SceneConfig::default();
        config.firing.cooldown = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_entity_cap_rejected() {
        let mut config = SceneConfig::default();
        config.limits.max_entities = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let config: SceneConfig = toml::from_str(
            r#"
            [firing]
            cooldown = 0.5

            [limits]
            max_entities = 64
            "#,
        )
        .unwrap();
        assert_eq!(config.firing.cooldown, 0.5);
        assert_eq!(config.limits.max_entities, 64);
        // Untouched sections keep their defaults.
        assert_eq!(config.targets.max_live, 12);
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = SceneConfig::load_or_default("does/not/exist.toml");
        assert_eq!(config.limits.max_entities, 150);
    }
}
