//! Discrete visual events emitted by the systems pipeline.
//!
//! The particle and screen-shake collaborators drain these once per frame
//! via [`World::take_events`](super::world::World::take_events). They hold
//! no gameplay state and cannot affect simulation outcomes.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualEvent {
    /// Muzzle flash at the bullet spawn point.
    MuzzleFlash { pos: Vec2 },
    /// Hit burst where a bullet or contact landed, tinted like the victim.
    HitBurst { pos: Vec2, color: [u8; 3] },
    /// Enemy death explosion.
    Explosion { pos: Vec2, color: [u8; 3] },
    /// Camera shake impulse.
    Shake { magnitude: f32 },
}
