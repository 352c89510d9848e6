//! World configuration
//!
//! Read-only for a session. Loaded from JSON on native builds, defaults otherwise.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable movement constants (all in per-frame units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Upward impulse applied when a grounded actor jumps
    pub jump_height: f32,
    /// Velocity scale applied every frame (1.0 = frictionless)
    pub friction: f32,
    /// Downward acceleration added every frame
    pub gravity: f32,
    /// Horizontal nudge per frame while a direction is held
    pub base_speed: f32,
    /// Extra downward acceleration while holding down in the air
    pub descend_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            jump_height: JUMP_HEIGHT,
            friction: FRICTION,
            gravity: GRAVITY,
            base_speed: BASE_SPEED,
            descend_speed: BASE_SPEED,
        }
    }
}

/// Session-wide world configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub default_tile_size: f32,

    /// Zero vertical speed when an actor touches the side of a block.
    /// Off by default: grazing a wall while falling keeps the fall going.
    pub stop_vertical_momentum: bool,

    pub movement: MovementTuning,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            default_tile_size: DEFAULT_TILE_SIZE,
            stop_vertical_momentum: false,
            movement: MovementTuning::default(),
        }
    }
}

impl WorldConfig {
    /// Far corner of the playable area; the near corner is the origin
    pub fn world_bounds(&self) -> Vec2 {
        Vec2::new(self.viewport_width, self.viewport_height)
    }

    /// Parse and validate a configuration document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(config)
    }

    /// Reject worlds an actor can't fit in and non-finite tuning
    pub fn validate(&self) -> Result<(), &'static str> {
        let m = &self.movement;
        let values = [
            self.viewport_width,
            self.viewport_height,
            self.default_tile_size,
            m.jump_height,
            m.friction,
            m.gravity,
            m.base_speed,
            m.descend_speed,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err("non-finite value");
        }
        if self.viewport_width < HERO_WIDTH || self.viewport_height < HERO_HEIGHT {
            return Err("viewport smaller than the hero");
        }
        if self.default_tile_size <= 0.0 {
            return Err("tile size must be positive");
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load configuration from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Invalid config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
