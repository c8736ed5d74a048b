//! The closed set of gameplay components.
//!
//! Each component is a plain struct stored in its own typed column; the
//! Player/Enemy/Bullet tags are zero-sized markers that exist only as mask
//! bits. The [`Component`] trait ties a type to its flag and column, so a
//! query's capability set is checked at compile time rather than by a
//! runtime existence probe.

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::store::{Column, ComponentStore};

bitflags! {
    /// Capability mask: which components an entity carries.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ComponentSet: u16 {
        const POSITION = 1 << 0;
        const VELOCITY = 1 << 1;
        const SIZE = 1 << 2;
        const HEALTH = 1 << 3;
        const RENDER = 1 << 4;
        const LIFETIME = 1 << 5;
        const DAMAGE = 1 << 6;
        const SEEKER = 1 << 7;
        const ROTATION = 1 << 8;
        // Tag markers: mask bits with no column behind them
        const PLAYER = 1 << 9;
        const ENEMY = 1 << 10;
        const BULLET = 1 << 11;
    }
}

/// World position. `z` is reserved and unused by gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Velocity in units/second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
    pub vz: f32,
}

impl Velocity {
    pub fn new(vx: f32, vy: f32) -> Self {
        Self { vx, vy, vz: 0.0 }
    }

    pub fn xy(&self) -> Vec2 {
        Vec2::new(self.vx, self.vy)
    }

    pub fn set_xy(&mut self, v: Vec2) {
        self.vx = v.x;
        self.vy = v.y;
    }
}

/// Axis-aligned bounding-box extents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn extents(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Health pool. Systems clamp `current` to `0..=max`; the store never does.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }
}

/// Presentation-only color; consumed by the renderer, never by gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Render {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Render {
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            alpha: 1.0,
        }
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Seconds remaining; the entity self-destructs on expiry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lifetime {
    pub time_left: f32,
}

/// Damage carried by bullet-like entities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Damage {
    pub amount: f32,
}

/// Homing speed for AI-steered entities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Seeker {
    pub speed: f32,
}

/// Facing direction in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub angle: f32,
}

/// Binds a component type to its mask bit and its column in the store.
///
/// The set is closed: only the impls below exist.
pub trait Component: Sized {
    const FLAG: ComponentSet;

    fn column(store: &ComponentStore) -> &Column<Self>;
    fn column_mut(store: &mut ComponentStore) -> &mut Column<Self>;
}

macro_rules! impl_component {
    ($ty:ident, $flag:ident, $field:ident) => {
        impl Component for $ty {
            const FLAG: ComponentSet = ComponentSet::$flag;

            fn column(store: &ComponentStore) -> &Column<Self> {
                &store.$field
            }

            fn column_mut(store: &mut ComponentStore) -> &mut Column<Self> {
                &mut store.$field
            }
        }
    };
}

impl_component!(Position, POSITION, positions);
impl_component!(Velocity, VELOCITY, velocities);
impl_component!(Size, SIZE, sizes);
impl_component!(Health, HEALTH, healths);
impl_component!(Render, RENDER, renders);
impl_component!(Lifetime, LIFETIME, lifetimes);
impl_component!(Damage, DAMAGE, damages);
impl_component!(Seeker, SEEKER, seekers);
impl_component!(Rotation, ROTATION, rotations);
