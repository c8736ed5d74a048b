//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (owned by the [`World`])
//! - Stable iteration order (entity creation order)
//! - No rendering or platform dependencies
//!
//! Data flows one direction per tick: scheduler -> systems (in fixed order)
//! -> world mutation -> external renderer/HUD read the post-tick snapshot.

pub mod collision;
pub mod components;
pub mod entity;
pub mod events;
pub mod factory;
pub mod scheduler;
pub mod store;
pub mod systems;
pub mod tick;
pub mod view;
pub mod world;

pub use components::{
    Component, ComponentSet, Damage, Health, Lifetime, Position, Render, Rotation, Seeker, Size,
    Velocity,
};
pub use entity::{Entity, WorldError};
pub use events::VisualEvent;
pub use factory::{create_bullet, create_enemy, create_player};
pub use scheduler::Scheduler;
pub use tick::{DirectionSet, TickInput, tick};
pub use view::{Drawable, HudSnapshot, drawables, hud_snapshot};
pub use world::{GameState, World};
