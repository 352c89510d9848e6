//! The Plague - a tile-based 2D platformer
//!
//! Core modules:
//! - `sim`: Movement and collision core (gravity, friction, jumping, block resolution)
//! - `animation`: Per-state sprite frame bookkeeping fed by the core
//! - `settings`: World configuration

pub mod animation;
pub mod settings;
pub mod sim;

pub use animation::{AnimationClip, AnimationSet};
pub use settings::{MovementTuning, WorldConfig};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed frame timestep (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Viewport / world dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;
    pub const DEFAULT_TILE_SIZE: f32 = 32.0;

    /// Hero defaults (32px sprite drawn at 2x)
    pub const HERO_WIDTH: f32 = 64.0;
    pub const HERO_HEIGHT: f32 = 64.0;
    pub const HERO_SPAWN_X: f32 = 300.0;
    pub const HERO_SPAWN_Y: f32 = 300.0;

    /// Movement defaults (per-frame units)
    pub const JUMP_HEIGHT: f32 = 10.0;
    pub const FRICTION: f32 = 1.0;
    pub const GRAVITY: f32 = 0.8;
    pub const BASE_SPEED: f32 = 4.0;

    /// Sprite sheet cell size
    pub const SPRITE_CELL: f32 = 32.0;
    /// Animation playback rate (frames per second)
    pub const ANIMATION_FPS: f32 = 12.0;
}

/// Whether a vector holds only finite components
#[inline]
pub fn is_finite_vec(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

/// Whether every axis of a direction is one of -1, 0, 1
#[inline]
pub fn is_discrete_direction(v: Vec2) -> bool {
    let ok = |a: f32| a == -1.0 || a == 0.0 || a == 1.0;
    ok(v.x) && ok(v.y)
}
