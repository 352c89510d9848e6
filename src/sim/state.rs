//! Actors, blocks, and the block registry
//!
//! Actors are mutated only by the movement integrator; blocks are immutable
//! for the lifetime of a map.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::input::InputSource;
use super::movement::MovementManager;
use super::rect::BoundingBox;
use crate::animation::AnimationSet;
use crate::settings::WorldConfig;

/// Discrete motion state, exactly one active per actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MovableState {
    #[default]
    Idle,
    Walking,
    Running,
    Jumping,
    Falling,
}

impl MovableState {
    pub const COUNT: usize = 5;

    pub const ALL: [MovableState; Self::COUNT] = [
        MovableState::Idle,
        MovableState::Walking,
        MovableState::Running,
        MovableState::Jumping,
        MovableState::Falling,
    ];

    /// Slot in per-state tables
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            MovableState::Idle => 0,
            MovableState::Walking => 1,
            MovableState::Running => 2,
            MovableState::Jumping => 3,
            MovableState::Falling => 4,
        }
    }
}

/// Sprite mirroring hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Capability set of anything the integrator can move
pub trait Movable {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    fn speed(&self) -> Vec2;
    fn set_speed(&mut self, speed: Vec2);
    fn state(&self) -> MovableState;
    fn set_state(&mut self, state: MovableState);
    /// Fixed width/height of the actor
    fn size(&self) -> Vec2;
    /// Where this actor's per-frame direction comes from
    fn input_mut(&mut self) -> &mut dyn InputSource;

    /// Always derived from the current position
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_position(self.position(), self.size())
    }
}

/// A static obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub bounds: BoundingBox,
    /// Tile id from the map grid (drawing only)
    pub tile: u8,
}

impl Block {
    pub fn new(bounds: BoundingBox, tile: u8) -> Self {
        Self { bounds, tile }
    }
}

/// Read-only view of the obstacles for the current frame
pub trait BlockSource {
    fn all_blocks(&self) -> &[Block];
}

impl BlockSource for [Block] {
    fn all_blocks(&self) -> &[Block] {
        self
    }
}

impl BlockSource for Vec<Block> {
    fn all_blocks(&self) -> &[Block] {
        self
    }
}

/// Flat, ordered collection of blocks for one map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockSet {
    blocks: Vec<Block>,
}

impl BlockSet {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Build blocks from a row-major tile grid (0 = empty).
    ///
    /// Columns split the viewport width evenly; rows are `default_tile_size`
    /// tall and stack upward from the world floor, so the bottom row's top
    /// edge lies on the floor line.
    pub fn from_grid(grid: &[Vec<u8>], config: &WorldConfig) -> Self {
        let rows = grid.len();
        let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            return Self::default();
        }

        let tile_width = config.viewport_width / columns as f32;
        let tile_height = config.default_tile_size;

        let mut blocks = Vec::new();
        for (row, cells) in grid.iter().enumerate() {
            let row_from_bottom = (rows - 1 - row) as f32;
            let y = config.viewport_height - tile_height * row_from_bottom;
            for (col, &tile) in cells.iter().enumerate() {
                if tile == 0 {
                    continue;
                }
                let x = col as f32 * tile_width;
                blocks.push(Block::new(
                    BoundingBox::new(x, y, tile_width, tile_height),
                    tile,
                ));
            }
        }

        log::debug!("Built {} blocks from {}x{} grid", blocks.len(), columns, rows);
        Self { blocks }
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl BlockSource for BlockSet {
    fn all_blocks(&self) -> &[Block] {
        &self.blocks
    }
}

/// The player character
pub struct Hero {
    position: Vec2,
    speed: Vec2,
    size: Vec2,
    state: MovableState,
    pub facing: Facing,
    pub animations: AnimationSet,
    input: Box<dyn InputSource>,
}

impl std::fmt::Debug for Hero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hero")
            .field("position", &self.position)
            .field("speed", &self.speed)
            .field("size", &self.size)
            .field("state", &self.state)
            .field("facing", &self.facing)
            .finish_non_exhaustive()
    }
}

impl Hero {
    /// Spawn at rest, idle and facing right
    pub fn new(position: Vec2, size: Vec2, input: Box<dyn InputSource>) -> Self {
        Self {
            position,
            speed: Vec2::ZERO,
            size,
            state: MovableState::Idle,
            facing: Facing::Right,
            animations: AnimationSet::hero(),
            input,
        }
    }

    /// Poll input once, move, and step the animation
    pub fn update(&mut self, mover: &MovementManager, blocks: &dyn BlockSource, dt: f32) {
        let direction = self.input_mut().read_input();

        if direction.x == 1.0 {
            self.facing = Facing::Right;
        } else if direction.x == -1.0 {
            self.facing = Facing::Left;
        }

        mover.update(self, direction, blocks);
        self.animations.advance(dt);
    }
}

impl Movable for Hero {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn speed(&self) -> Vec2 {
        self.speed
    }

    fn set_speed(&mut self, speed: Vec2) {
        self.speed = speed;
    }

    fn state(&self) -> MovableState {
        self.state
    }

    fn set_state(&mut self, state: MovableState) {
        if state != self.state {
            log::debug!("hero state {:?} -> {:?}", self.state, state);
        }
        self.animations.set_state(state);
        self.state = state;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn input_mut(&mut self) -> &mut dyn InputSource {
        &mut *self.input
    }
}
