//! Sprite frame bookkeeping per motion state
//!
//! One clip per `MovableState`, stored in an array indexed by the variant.
//! The core only assigns states; this table notices the change and rewinds
//! the newly active clip.

use crate::consts::{ANIMATION_FPS, SPRITE_CELL};
use crate::sim::{BoundingBox, MovableState};

/// Frame cursor over one row of the sprite sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    /// Sprite sheet row (0-based)
    pub row: u32,
    pub frame_count: u32,
    pub frame: u32,
    elapsed: f32,
}

impl AnimationClip {
    pub const fn new(row: u32, frame_count: u32) -> Self {
        Self {
            row,
            frame_count,
            frame: 0,
            elapsed: 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.frame = 0;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt: f32) {
        if self.frame_count == 0 {
            return;
        }
        let frame_time = 1.0 / ANIMATION_FPS;
        self.elapsed += dt;
        while self.elapsed >= frame_time {
            self.elapsed -= frame_time;
            self.frame = (self.frame + 1) % self.frame_count;
        }
    }

    /// Sheet cell of the current frame
    pub fn source_rect(&self) -> BoundingBox {
        BoundingBox::new(
            self.frame as f32 * SPRITE_CELL,
            self.row as f32 * SPRITE_CELL,
            SPRITE_CELL,
            SPRITE_CELL,
        )
    }
}

/// Hero animation table
#[derive(Debug, Clone)]
pub struct AnimationSet {
    clips: [AnimationClip; MovableState::COUNT],
    current: MovableState,
}

impl Default for AnimationSet {
    fn default() -> Self {
        Self::hero()
    }
}

impl AnimationSet {
    /// Layout of the hero sprite sheet
    pub fn hero() -> Self {
        let mut clips = [AnimationClip::new(0, 1); MovableState::COUNT];
        clips[MovableState::Idle.index()] = AnimationClip::new(1, 12);
        clips[MovableState::Walking.index()] = AnimationClip::new(2, 8);
        clips[MovableState::Running.index()] = AnimationClip::new(2, 8);
        clips[MovableState::Jumping.index()] = AnimationClip::new(2, 2);
        clips[MovableState::Falling.index()] = AnimationClip::new(5, 4);
        Self {
            clips,
            current: MovableState::Idle,
        }
    }

    pub fn current(&self) -> MovableState {
        self.current
    }

    pub fn clip(&self, state: MovableState) -> &AnimationClip {
        &self.clips[state.index()]
    }

    /// Switch to `state`, rewinding its clip if it wasn't already active
    pub fn set_state(&mut self, state: MovableState) {
        if state != self.current {
            log::trace!("animation {:?} -> {:?}", self.current, state);
            self.clips[state.index()].reset();
        }
        self.current = state;
    }

    pub fn advance(&mut self, dt: f32) {
        self.clips[self.current.index()].advance(dt);
    }

    pub fn source_rect(&self) -> BoundingBox {
        self.clip(self.current).source_rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;

    #[test]
    fn test_clip_wraps() {
        let mut clip = AnimationClip::new(2, 2);
        clip.advance(1.0 / ANIMATION_FPS + 0.001);
        assert_eq!(clip.frame, 1);
        clip.advance(1.0 / ANIMATION_FPS);
        assert_eq!(clip.frame, 0);
    }

    #[test]
    fn test_state_change_rewinds_new_clip() {
        let mut anims = AnimationSet::hero();
        anims.set_state(MovableState::Falling);
        for _ in 0..15 {
            anims.advance(FRAME_DT);
        }
        assert_ne!(anims.clip(MovableState::Falling).frame, 0);

        anims.set_state(MovableState::Idle);
        anims.set_state(MovableState::Falling);
        assert_eq!(anims.clip(MovableState::Falling).frame, 0);
    }

    #[test]
    fn test_same_state_keeps_frame() {
        let mut anims = AnimationSet::hero();
        for _ in 0..10 {
            anims.advance(FRAME_DT);
        }
        let frame = anims.clip(MovableState::Idle).frame;
        assert_ne!(frame, 0);
        anims.set_state(MovableState::Idle);
        assert_eq!(anims.clip(MovableState::Idle).frame, frame);
    }

    #[test]
    fn test_source_rect_uses_row_and_frame() {
        let mut anims = AnimationSet::hero();
        anims.set_state(MovableState::Falling);
        assert_eq!(anims.source_rect(), BoundingBox::new(0.0, 160.0, 32.0, 32.0));
    }
}
