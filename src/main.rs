//! Headless demo driver: runs the simulation at a synthetic 60 FPS with
//! scripted input and prints the final HUD snapshot as JSON.
//!
//! Usage: `neon-horde [seed] [seconds]`

use glam::Vec2;

use neon_horde::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use neon_horde::sim::{create_player, drawables, hud_snapshot, DirectionSet};
use neon_horde::{Scheduler, TickInput, World};

fn scripted_input(frame: u32) -> TickInput {
    // Sweep the aim around a circle while strafing one edge at a time
    let directions = match (frame / 120) % 4 {
        0 => DirectionSet::RIGHT,
        1 => DirectionSet::DOWN,
        2 => DirectionSet::LEFT,
        _ => DirectionSet::UP,
    };
    let center = Vec2::new(PLAYFIELD_WIDTH * 0.5, PLAYFIELD_HEIGHT * 0.5);
    let angle = frame as f32 * 0.05;
    TickInput {
        directions,
        firing: true,
        pointer: Some(center + Vec2::from_angle(angle) * 200.0),
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xBADC0DE);
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(30.0);

    let mut world = World::with_seed(seed);
    create_player(
        &mut world,
        PLAYFIELD_WIDTH * 0.5,
        PLAYFIELD_HEIGHT * 0.5,
    )
    .expect("empty world cannot be at capacity");

    let mut scheduler = Scheduler::new();
    let frame_dt = 1.0 / 60.0;
    let frames = (seconds * 60.0) as u32;
    let mut total_ticks = 0u32;
    let mut total_events = 0usize;

    log::info!("running {seconds}s at 60 FPS with seed {seed:#x}");
    for frame in 0..frames {
        let input = scripted_input(frame);
        total_ticks += scheduler.advance(&mut world, &input, frame_dt);
        total_events += world.take_events().len();
    }

    log::info!(
        "{total_ticks} ticks, {} live entities, {} drawables, {total_events} visual events",
        world.live_count(),
        drawables(&world).len()
    );
    match serde_json::to_string_pretty(&hud_snapshot(&world)) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("snapshot serialization failed: {err}"),
    }
}
