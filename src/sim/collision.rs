//! Bounds clamping and block overlap resolution
//!
//! Two passes run after integration: first the actor is pushed back inside
//! the world, then every overlapping block is resolved on its shallow axis.
//! Blocks are resolved one at a time in registry order; a later block may
//! overwrite an earlier correction.

use glam::Vec2;

use super::rect::BoundingBox;
use super::state::{Block, Movable};

/// Which axis a block overlap was resolved on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionAxis {
    /// Landed on top or bumped the underside
    Vertical,
    /// Touched a side
    Horizontal,
}

/// Outcome of resolving one block overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    pub axis: CollisionAxis,
    /// Overlapping region before correction
    pub overlap: BoundingBox,
    /// Whether the actor was moved
    pub corrected: bool,
}

/// Collision axis for an intersection rectangle. Ties go horizontal.
#[inline]
pub fn collision_axis(overlap: &BoundingBox) -> CollisionAxis {
    if overlap.width > overlap.height {
        CollisionAxis::Vertical
    } else {
        CollisionAxis::Horizontal
    }
}

/// Keep the actor inside `(0, 0)..bounds`, killing velocity that points further out
pub fn clamp_to_bounds<M: Movable + ?Sized>(movable: &mut M, bounds: Vec2) {
    // A world narrower than the actor pins it to the origin on that axis
    let max = (bounds - movable.size()).max(Vec2::ZERO);
    let pos = movable.position();

    if pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= max.x && pos.y <= max.y {
        return;
    }

    let mut speed = movable.speed();
    if pos.x < 0.0 {
        speed.x = speed.x.max(0.0);
    } else if pos.x > max.x {
        speed.x = speed.x.min(0.0);
    }
    if pos.y < 0.0 {
        speed.y = speed.y.max(0.0);
    } else if pos.y > max.y {
        speed.y = speed.y.min(0.0);
    }

    movable.set_speed(speed);
    movable.set_position(Vec2::new(pos.x.clamp(0.0, max.x), pos.y.clamp(0.0, max.y)));
}

/// Resolve the actor against a single block, if they overlap
pub fn resolve_block<M: Movable + ?Sized>(
    movable: &mut M,
    block: &Block,
    stop_vertical_momentum: bool,
) -> Option<CollisionResult> {
    let actor = movable.bounding_box();
    let target = block.bounds;
    let overlap = actor.intersection(&target)?;
    let axis = collision_axis(&overlap);

    let mut pos = movable.position();
    let mut speed = movable.speed();
    let mut corrected = true;

    match axis {
        CollisionAxis::Vertical => {
            if actor.bottom() > target.top() && actor.bottom() < target.bottom() {
                // Landing on top
                speed.y = speed.y.min(0.0);
                pos.y = target.top() - actor.height;
            } else if actor.top() < target.bottom() && actor.top() > target.top() {
                // Head against the underside
                speed.y = speed.y.max(0.0);
                pos.y = target.bottom();
            } else {
                corrected = false;
            }
        }
        CollisionAxis::Horizontal => {
            let speed_y = if stop_vertical_momentum { 0.0 } else { speed.y };
            if actor.left() < target.right() && actor.left() > target.left() {
                // Actor is to the right of the block
                speed = Vec2::new(speed.x.max(0.0), speed_y);
                pos.x = target.right();
            } else if actor.right() > target.left() && actor.right() < target.right() {
                // Actor is to the left of the block
                speed = Vec2::new(speed.x.min(0.0), speed_y);
                pos.x = target.left() - actor.width;
            } else {
                corrected = false;
            }
        }
    }

    if corrected {
        log::trace!("{:?} collision with block at {:?}", axis, target);
        movable.set_speed(speed);
        movable.set_position(pos);
    }

    Some(CollisionResult {
        axis,
        overlap,
        corrected,
    })
}

/// Resolve the actor against every block in order
pub fn resolve_blocks<M: Movable + ?Sized>(
    movable: &mut M,
    blocks: &[Block],
    stop_vertical_momentum: bool,
) -> usize {
    let mut hits = 0;
    for block in blocks {
        if resolve_block(movable, block, stop_vertical_momentum).is_some() {
            hits += 1;
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::{InputSource, NoInput};
    use crate::sim::state::MovableState;

    /// Bare actor for exercising the passes directly
    struct Body {
        pos: Vec2,
        vel: Vec2,
        input: NoInput,
    }

    impl Movable for Body {
        fn position(&self) -> Vec2 {
            self.pos
        }
        fn set_position(&mut self, position: Vec2) {
            self.pos = position;
        }
        fn speed(&self) -> Vec2 {
            self.vel
        }
        fn set_speed(&mut self, speed: Vec2) {
            self.vel = speed;
        }
        fn state(&self) -> MovableState {
            MovableState::Idle
        }
        fn set_state(&mut self, _state: MovableState) {}
        fn size(&self) -> Vec2 {
            Vec2::splat(64.0)
        }
        fn input_mut(&mut self) -> &mut dyn InputSource {
            &mut self.input
        }
    }

    fn body(x: f32, y: f32, vx: f32, vy: f32) -> Body {
        Body {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            input: NoInput,
        }
    }

    fn block(x: f32, y: f32, w: f32, h: f32) -> Block {
        Block::new(BoundingBox::new(x, y, w, h), 1)
    }

    #[test]
    fn test_axis_tie_is_horizontal() {
        let square = BoundingBox::new(0.0, 0.0, 5.0, 5.0);
        assert_eq!(collision_axis(&square), CollisionAxis::Horizontal);
        let flat = BoundingBox::new(0.0, 0.0, 6.0, 5.0);
        assert_eq!(collision_axis(&flat), CollisionAxis::Vertical);
    }

    #[test]
    fn test_clamp_floor() {
        let mut p = body(100.0, 430.0, 2.0, 6.0);
        clamp_to_bounds(&mut p, Vec2::new(800.0, 480.0));
        assert_eq!(p.pos, Vec2::new(100.0, 416.0));
        assert_eq!(p.vel, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_clamp_keeps_velocity_pointing_back_inside() {
        let mut p = body(-5.0, -3.0, 3.0, 1.0);
        clamp_to_bounds(&mut p, Vec2::new(800.0, 480.0));
        assert_eq!(p.pos, Vec2::ZERO);
        assert_eq!(p.vel, Vec2::new(3.0, 1.0));

        let mut p = body(-5.0, -3.0, -3.0, -1.0);
        clamp_to_bounds(&mut p, Vec2::new(800.0, 480.0));
        assert_eq!(p.vel, Vec2::ZERO);

        let mut p = body(750.0, 0.0, 5.0, 0.0);
        clamp_to_bounds(&mut p, Vec2::new(800.0, 480.0));
        assert_eq!(p.pos.x, 736.0);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_clamp_in_world_narrower_than_actor() {
        let mut p = body(10.0, 100.0, 3.0, 2.0);
        clamp_to_bounds(&mut p, Vec2::new(50.0, 480.0));
        assert_eq!(p.pos, Vec2::new(0.0, 100.0));
        assert_eq!(p.vel, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_clamp_inside_is_noop() {
        let mut p = body(10.0, 10.0, -4.0, 4.0);
        clamp_to_bounds(&mut p, Vec2::new(800.0, 480.0));
        assert_eq!(p.pos, Vec2::new(10.0, 10.0));
        assert_eq!(p.vel, Vec2::new(-4.0, 4.0));
    }

    #[test]
    fn test_land_on_block() {
        let mut p = body(310.0, 240.0, 1.0, 9.0);
        let result = resolve_block(&mut p, &block(300.0, 300.0, 100.0, 32.0), false).unwrap();
        assert_eq!(result.axis, CollisionAxis::Vertical);
        assert_eq!(result.overlap, BoundingBox::new(310.0, 300.0, 64.0, 4.0));
        assert!(result.corrected);
        assert_eq!(p.pos.y, 236.0);
        assert_eq!(p.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_bump_underside() {
        let mut p = body(310.0, 130.0, 0.0, -8.0);
        resolve_block(&mut p, &block(300.0, 100.0, 100.0, 32.0), false).unwrap();
        assert_eq!(p.pos.y, 132.0);
        assert_eq!(p.vel.y, 0.0);
    }

    #[test]
    fn test_side_hit_from_left() {
        let mut p = body(342.0, 200.0, 8.0, 3.0);
        let result = resolve_block(&mut p, &block(400.0, 150.0, 100.0, 200.0), false).unwrap();
        assert_eq!(result.axis, CollisionAxis::Horizontal);
        assert_eq!(p.pos.x, 336.0);
        assert_eq!(p.vel, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_side_hit_from_right_with_momentum_kill() {
        let mut p = body(495.0, 200.0, -6.0, 3.0);
        resolve_block(&mut p, &block(400.0, 150.0, 100.0, 200.0), true).unwrap();
        assert_eq!(p.pos.x, 500.0);
        assert_eq!(p.vel, Vec2::ZERO);
    }

    #[test]
    fn test_no_overlap_no_result() {
        let mut p = body(0.0, 0.0, 1.0, 1.0);
        assert!(resolve_block(&mut p, &block(64.0, 0.0, 10.0, 10.0), false).is_none());
        assert_eq!(p.pos, Vec2::ZERO);
    }

    #[test]
    fn test_later_block_overwrites_earlier() {
        // Two blocks each demand a different vertical snap; the last one wins
        let blocks = [block(300.0, 300.0, 100.0, 32.0), block(300.0, 290.0, 100.0, 100.0)];
        let mut p = body(310.0, 240.0, 0.0, 5.0);
        let hits = resolve_blocks(&mut p, &blocks, false);
        assert_eq!(hits, 2);
        assert_eq!(p.pos.y, 226.0);
    }
}
