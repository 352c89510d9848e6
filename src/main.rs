//! The Plague entry point
//!
//! Headless native runner: builds the reference level, drives the hero with
//! seeded random input, and logs what the movement core does.
//!
//! Usage: `plague [config.json] [frames] [seed]`

#[cfg(not(target_arch = "wasm32"))]
use glam::Vec2;

#[cfg(not(target_arch = "wasm32"))]
use plague::WorldConfig;
#[cfg(not(target_arch = "wasm32"))]
use plague::consts::*;
#[cfg(not(target_arch = "wasm32"))]
use plague::sim::{BlockSet, Movable, MovableState, RandomInput, World, tick};

/// Reference level: floor strip along the bottom row plus one floating platform
#[cfg(not(target_arch = "wasm32"))]
fn reference_grid() -> Vec<Vec<u8>> {
    let mut grid = vec![vec![0u8; 8]; 8];
    grid[4][3] = 2;
    grid[7] = vec![1; 8];
    grid
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("The Plague (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => WorldConfig::load(&path),
        _ => WorldConfig::default(),
    };
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);

    let blocks = BlockSet::from_grid(&reference_grid(), &config);
    let mut world = World::new(config, blocks);
    let hero = world.spawn_hero(
        Vec2::new(HERO_SPAWN_X, HERO_SPAWN_Y),
        Box::new(RandomInput::new(seed)),
    );

    log::info!(
        "Running {} frames with seed {} ({}x{}, stop_vertical_momentum={})",
        frames,
        seed,
        world.config.viewport_width,
        world.config.viewport_height,
        world.config.stop_vertical_momentum
    );

    let mut last_state = MovableState::Idle;
    for _ in 0..frames {
        tick(&mut world, FRAME_DT);
        let actor = &world.actors[hero];
        if actor.state() != last_state {
            log::info!(
                "frame {:>5}: {:?} -> {:?} at ({:.1}, {:.1})",
                world.frame,
                last_state,
                actor.state(),
                actor.position().x,
                actor.position().y
            );
            last_state = actor.state();
        }
    }

    let actor = &world.actors[hero];
    println!(
        "after {} frames: position=({:.2}, {:.2}) speed=({:.2}, {:.2}) state={:?} facing={:?}",
        world.frame,
        actor.position().x,
        actor.position().y,
        actor.speed().x,
        actor.speed().y,
        actor.state(),
        actor.facing
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The movement core has no browser front end
}
