//! Movement and collision core
//!
//! All per-frame actor logic lives here. This module must stay deterministic:
//! - One update per actor per frame
//! - Blocks are read-only while actors move
//! - Block resolution follows registry order
//! - No rendering or platform dependencies

pub mod classify;
pub mod collision;
pub mod input;
pub mod movement;
pub mod rect;
pub mod state;
pub mod tick;

pub use classify::classify;
pub use collision::{CollisionAxis, CollisionResult, clamp_to_bounds, resolve_block, resolve_blocks};
pub use input::{InputSource, NoInput, RandomInput, ScriptedInput};
pub use movement::MovementManager;
pub use rect::BoundingBox;
pub use state::{Block, BlockSet, BlockSource, Facing, Hero, Movable, MovableState};
pub use tick::{World, tick};
