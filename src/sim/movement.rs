//! Per-frame movement integrator
//!
//! Order matters, later steps override earlier ones:
//! 1. grounded check
//! 2. vertical input (fast-fall in the air, jump from rest on the ground)
//! 3. horizontal nudge from input
//! 4. translate by speed
//! 5. friction
//! 6. gravity
//! 7. world bounds + block overlap clamp
//! 8. grounded actors drop downward speed
//! 9. state classification

use glam::Vec2;

use super::classify::classify;
use super::collision::{clamp_to_bounds, resolve_blocks};
use super::state::{BlockSource, Movable};
use crate::settings::{MovementTuning, WorldConfig};
use crate::{is_discrete_direction, is_finite_vec};

/// Moves actors through one world's bounds and obstacles
#[derive(Debug, Clone)]
pub struct MovementManager {
    /// Far corner of the world; the near corner is the origin
    pub bounds: Vec2,
    pub tuning: MovementTuning,
    /// Zero vertical speed on side contact with a block
    pub stop_vertical_momentum: bool,
}

impl MovementManager {
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            bounds: config.world_bounds(),
            tuning: config.movement,
            stop_vertical_momentum: config.stop_vertical_momentum,
        }
    }

    /// Resting on the world floor or flush on top of a block
    pub fn is_grounded<M, B>(&self, movable: &M, blocks: &B) -> bool
    where
        M: Movable + ?Sized,
        B: BlockSource + ?Sized,
    {
        if movable.position().y == self.bounds.y - movable.size().y {
            return true;
        }

        let actor = movable.bounding_box();
        blocks.all_blocks().iter().any(|block| {
            actor.intersects(&block.bounds.inflate(0.0, 1.0))
                && actor.bottom() == block.bounds.top()
        })
    }

    /// Advance `movable` by one frame for the given input direction
    pub fn update<M, B>(&self, movable: &mut M, direction: Vec2, blocks: &B)
    where
        M: Movable + ?Sized,
        B: BlockSource + ?Sized,
    {
        debug_assert!(
            is_discrete_direction(direction),
            "input direction must be discrete, got {direction:?}"
        );
        debug_assert!(is_finite_vec(movable.position()), "non-finite position");
        debug_assert!(is_finite_vec(movable.speed()), "non-finite speed");

        let t = &self.tuning;

        let grounded = self.is_grounded(movable, blocks);
        if direction.y == 1.0 && !grounded {
            accelerate(movable, Vec2::new(0.0, t.descend_speed));
        } else if direction.y == -1.0 && movable.speed().y == 0.0 && grounded {
            accelerate(movable, Vec2::new(0.0, -t.jump_height));
        }

        if direction.x == -1.0 {
            translate(movable, Vec2::new(-t.base_speed, 0.0));
        } else if direction.x == 1.0 {
            translate(movable, Vec2::new(t.base_speed, 0.0));
        }

        let momentum = movable.speed();
        translate(movable, momentum);
        movable.set_speed(movable.speed() * t.friction);
        accelerate(movable, Vec2::new(0.0, t.gravity));

        clamp_to_bounds(movable, self.bounds);
        resolve_blocks(movable, blocks.all_blocks(), self.stop_vertical_momentum);

        if self.is_grounded(movable, blocks) {
            let speed = movable.speed();
            movable.set_speed(Vec2::new(speed.x, speed.y.min(0.0)));
        }

        movable.set_state(classify(movable.speed(), direction));

        log::trace!(
            "move dir={:?} pos={:?} speed={:?} state={:?}",
            direction,
            movable.position(),
            movable.speed(),
            movable.state()
        );
    }
}

#[inline]
fn accelerate<M: Movable + ?Sized>(movable: &mut M, accel: Vec2) {
    movable.set_speed(movable.speed() + accel);
}

#[inline]
fn translate<M: Movable + ?Sized>(movable: &mut M, delta: Vec2) {
    movable.set_position(movable.position() + delta);
}
