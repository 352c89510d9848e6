//! Motion state classification
//!
//! Runs last in a movement step, from the resulting speed and the input that
//! produced it.

use glam::Vec2;

use super::state::MovableState;

/// Derive the motion state for a frame
pub fn classify(speed: Vec2, direction: Vec2) -> MovableState {
    if speed == Vec2::ZERO {
        // Holding down while at rest plays the falling (duck) pose
        if direction.y == 1.0 {
            MovableState::Falling
        } else {
            MovableState::Idle
        }
    } else if speed.y == 0.0 {
        MovableState::Walking
    } else if speed.y < 0.0 {
        MovableState::Jumping
    } else {
        MovableState::Falling
    }
}
