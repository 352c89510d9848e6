//! Input sources
//!
//! Every source yields a direction whose axes are each -1, 0 or 1.
//! Screen convention: `y = -1` is up (jump), `y = 1` is down.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Something that can be polled once per frame for a direction
pub trait InputSource {
    fn read_input(&mut self) -> Vec2;
}

/// Never pressed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn read_input(&mut self) -> Vec2 {
        Vec2::ZERO
    }
}

/// Replays a fixed sequence of directions, then reports no input
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec2>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Hold `dir` for `frames` frames after whatever is already queued
    pub fn hold(mut self, dir: Vec2, frames: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(dir, frames));
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_input(&mut self) -> Vec2 {
        self.frames.pop_front().unwrap_or(Vec2::ZERO)
    }
}

/// Seeded random presses, held for a few frames each (demo / soak runs)
#[derive(Debug, Clone)]
pub struct RandomInput {
    rng: Pcg32,
    current: Vec2,
    hold_frames: u32,
}

impl RandomInput {
    /// Longest run of frames a single direction is held
    const MAX_HOLD: u32 = 30;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            current: Vec2::ZERO,
            hold_frames: 0,
        }
    }
}

impl InputSource for RandomInput {
    fn read_input(&mut self) -> Vec2 {
        if self.hold_frames == 0 {
            let x = self.rng.random_range(-1i32..=1) as f32;
            let y = self.rng.random_range(-1i32..=1) as f32;
            self.current = Vec2::new(x, y);
            self.hold_frames = self.rng.random_range(1..=Self::MAX_HOLD);
        }
        self.hold_frames -= 1;
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_discrete_direction;

    #[test]
    fn test_scripted_input_replays_then_idles() {
        let mut input = ScriptedInput::new([Vec2::new(1.0, 0.0)]).hold(Vec2::new(0.0, -1.0), 2);
        assert_eq!(input.remaining(), 3);
        assert_eq!(input.read_input(), Vec2::new(1.0, 0.0));
        assert_eq!(input.read_input(), Vec2::new(0.0, -1.0));
        assert_eq!(input.read_input(), Vec2::new(0.0, -1.0));
        assert_eq!(input.read_input(), Vec2::ZERO);
    }

    #[test]
    fn test_random_input_is_discrete_and_seeded() {
        let mut a = RandomInput::new(42);
        let mut b = RandomInput::new(42);
        for _ in 0..500 {
            let dir = a.read_input();
            assert!(is_discrete_direction(dir), "got {dir:?}");
            assert_eq!(dir, b.read_input());
        }
    }
}
