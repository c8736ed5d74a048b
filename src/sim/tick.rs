//! Per-tick input and the fixed-order pipeline driver.

use bitflags::bitflags;
use glam::Vec2;

use super::systems;
use super::world::World;

bitflags! {
    /// Movement directions held this tick, screen coordinates (y grows down).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DirectionSet: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl DirectionSet {
    /// Unit movement vector for the held set; opposing directions cancel
    /// and diagonals are normalized so they are no faster than cardinals.
    pub fn as_vec(self) -> Vec2 {
        let mut v = Vec2::ZERO;
        if self.contains(Self::UP) {
            v.y -= 1.0;
        }
        if self.contains(Self::DOWN) {
            v.y += 1.0;
        }
        if self.contains(Self::LEFT) {
            v.x -= 1.0;
        }
        if self.contains(Self::RIGHT) {
            v.x += 1.0;
        }
        v.normalize_or_zero()
    }
}

/// Everything the simulation may read about the outside world for one tick.
/// Captured by the caller before ticking; the pipeline never polls devices.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    pub directions: DirectionSet,
    pub firing: bool,
    /// Aim point in playfield coordinates, if a pointer is available.
    pub pointer: Option<Vec2>,
}

/// Advance the world by exactly one step of `dt` seconds.
///
/// Systems run in a fixed order; reordering them changes observable
/// behavior (a seeker spawned this tick is already re-aimed before it
/// first moves next tick, and an enemy destroyed by contact never reaches
/// the despawn pass).
pub fn tick(world: &mut World, input: &TickInput, dt: f32) {
    systems::player_control(world, input);
    systems::movement(world, dt);
    systems::spawn(world, dt);
    systems::shooting(world, input, dt);
    systems::enemy_ai(world);
    systems::lifetime(world, dt);
    systems::collision(world);
    systems::despawn(world);
    systems::progression(world);

    world.state_mut().time += dt;
    world.sync_player_state();
}
