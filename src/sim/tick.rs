//! Frame step
//!
//! Advances every actor once against the same block snapshot. Blocks are
//! never touched during a frame, so actors don't observe each other.

use glam::Vec2;

use super::input::InputSource;
use super::movement::MovementManager;
use super::state::{BlockSet, Hero};
use crate::settings::WorldConfig;

/// One loaded level and the actors in it
#[derive(Debug)]
pub struct World {
    pub config: WorldConfig,
    pub blocks: BlockSet,
    pub actors: Vec<Hero>,
    pub mover: MovementManager,
    /// Frames advanced so far
    pub frame: u64,
}

impl World {
    pub fn new(config: WorldConfig, blocks: BlockSet) -> Self {
        log::debug!(
            "World {}x{} with {} blocks",
            config.viewport_width,
            config.viewport_height,
            blocks.len()
        );
        let mover = MovementManager::new(&config);
        Self {
            config,
            blocks,
            actors: Vec::new(),
            mover,
            frame: 0,
        }
    }

    /// Spawn a default-sized hero, returning its index
    pub fn spawn_hero(&mut self, position: Vec2, input: Box<dyn InputSource>) -> usize {
        use crate::consts::{HERO_HEIGHT, HERO_WIDTH};
        let size = Vec2::new(HERO_WIDTH, HERO_HEIGHT);
        self.actors.push(Hero::new(position, size, input));
        self.actors.len() - 1
    }
}

/// Advance the world by one frame
pub fn tick(world: &mut World, dt: f32) {
    let World {
        blocks,
        actors,
        mover,
        ..
    } = world;

    for actor in actors.iter_mut() {
        actor.update(&*mover, &*blocks, dt);
    }
    world.frame += 1;
}
