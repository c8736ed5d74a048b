//! Read-only projections for external consumers.
//!
//! The renderer and HUD never touch the World directly; they consume the
//! plain-data snapshots built here, so simulation internals can change
//! without breaking them.

use glam::Vec2;
use serde::Serialize;

use super::components::{ComponentSet, Health, Position, Render, Rotation, Size, Velocity};
use super::entity::Entity;
use super::world::{GameState, World};

/// Everything a renderer needs for one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub entity: Entity,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [u8; 3],
    pub alpha: f32,
    /// Facing angle in radians, for entities that have one.
    pub rotation: Option<f32>,
    /// For motion-stretch effects on fast movers.
    pub velocity: Option<Vec2>,
    /// `(current, max)` for health-bar overlays.
    pub health: Option<(f32, f32)>,
}

/// Snapshot of every renderable entity, in creation order.
pub fn drawables(world: &World) -> Vec<Drawable> {
    world
        .query(ComponentSet::POSITION | ComponentSet::SIZE | ComponentSet::RENDER)
        .into_iter()
        .map(|entity| {
            let render = world
                .get::<Render>(entity)
                .expect("queried entity missing Render");
            Drawable {
                entity,
                pos: world
                    .get::<Position>(entity)
                    .expect("queried entity missing Position")
                    .xy(),
                size: world
                    .get::<Size>(entity)
                    .expect("queried entity missing Size")
                    .extents(),
                color: render.rgb(),
                alpha: render.alpha,
                rotation: world.get::<Rotation>(entity).map(|r| r.angle),
                velocity: world.get::<Velocity>(entity).map(Velocity::xy),
                health: world.get::<Health>(entity).map(|h| (h.current, h.max)),
            }
        })
        .collect()
}

/// Scalar HUD state, serializable for overlays and debug dumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HudSnapshot {
    pub score: u64,
    pub wave: u32,
    pub level: u32,
    pub time: f32,
    pub player_health: f32,
    pub player_max_health: f32,
}

pub fn hud_snapshot(world: &World) -> HudSnapshot {
    let GameState {
        score,
        wave,
        level,
        time,
        player_health,
        player_max_health,
    } = *world.state();
    HudSnapshot {
        score,
        wave,
        level,
        time,
        player_health,
        player_max_health,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PLAYER_MAX_HEALTH, PLAYER_SIZE};
    use crate::sim::factory::{create_bullet, create_enemy, create_player};

    #[test]
    fn test_player_drawable_carries_optional_fields() {
        let mut world = World::new();
        let player = create_player(&mut world, 400.0, 300.0).unwrap();

        let all = drawables(&world);
        assert_eq!(all.len(), 1);
        let d = &all[0];
        assert_eq!(d.entity, player);
        assert_eq!(d.pos, Vec2::new(400.0, 300.0));
        assert_eq!(d.size, Vec2::splat(PLAYER_SIZE));
        assert_eq!(d.color, [0, 255, 255]);
        assert_eq!(d.rotation, Some(0.0));
        assert_eq!(d.health, Some((PLAYER_MAX_HEALTH, PLAYER_MAX_HEALTH)));
    }

    #[test]
    fn test_drawables_follow_creation_order() {
        let mut world = World::new();
        let enemy = create_enemy(&mut world, 0.0, 0.0, 40.0, false).unwrap();
        let bullet = create_bullet(&mut world, 1.0, 1.0, 0.0, 0.0, 5.0).unwrap();
        let player = create_player(&mut world, 2.0, 2.0).unwrap();

        let order: Vec<Entity> = drawables(&world).iter().map(|d| d.entity).collect();
        assert_eq!(order, vec![enemy, bullet, player]);

        // Bullets have no rotation or health to project
        let b = drawables(&world)[1];
        assert_eq!(b.rotation, None);
        assert_eq!(b.health, None);
    }

    #[test]
    fn test_hud_snapshot_mirrors_state() {
        let mut world = World::new();
        create_player(&mut world, 0.0, 0.0).unwrap();
        world.state_mut().score = 230;
        world.state_mut().wave = 2;

        let hud = hud_snapshot(&world);
        assert_eq!(hud.score, 230);
        assert_eq!(hud.wave, 2);
        assert_eq!(hud.player_health, PLAYER_MAX_HEALTH);
    }

    #[test]
    fn test_hud_snapshot_serializes() {
        let world = World::new();
        let json = serde_json::to_string(&hud_snapshot(&world)).unwrap();
        assert!(json.contains("\"score\":0"));
        assert!(json.contains("\"wave\":1"));
    }
}
