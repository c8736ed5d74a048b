//! Entity factories: fully-formed player/enemy/bullet archetypes.
//!
//! Factories are the only place entities are assembled, so the archetype
//! invariants (a bullet always carries Damage, an enemy always carries
//! Health, at most one player) hold by construction. Only the world's
//! capacity limit can make them fail.

use crate::consts::*;
use crate::hsl_to_rgb;

use super::components::{
    ComponentSet, Damage, Health, Lifetime, Position, Render, Rotation, Seeker, Size, Velocity,
};
use super::entity::{Entity, WorldError};
use super::world::World;

/// Spawn the player at `(x, y)` and register it as the world's player.
///
/// The health snapshot in the global state is mirrored immediately.
pub fn create_player(world: &mut World, x: f32, y: f32) -> Result<Entity, WorldError> {
    let e = world.create_entity()?;
    world.attach(e, Position::new(x, y));
    world.attach(e, Velocity::new(0.0, 0.0));
    world.attach(e, Size::square(PLAYER_SIZE));
    world.attach(e, Health::full(PLAYER_MAX_HEALTH));
    world.attach(e, Render::opaque(0, 255, 255));
    world.attach(e, Rotation::default());
    world.tag(e, ComponentSet::PLAYER);
    world.set_player(e);
    world.sync_player_state();
    Ok(e)
}

/// Spawn an enemy at `(x, y)` drifting toward negative x.
///
/// Color comes from the world's rotating hue, fully saturated at 50%
/// lightness. When `homing` is set a [`Seeker`] is attached and the AI
/// system re-aims the velocity every tick.
pub fn create_enemy(
    world: &mut World,
    x: f32,
    y: f32,
    speed: f32,
    homing: bool,
) -> Result<Entity, WorldError> {
    let e = world.create_entity()?;
    world.attach(e, Position::new(x, y));
    world.attach(e, Velocity::new(-speed, 0.0));
    world.attach(e, Size::square(ENEMY_SIZE));
    world.attach(e, Health::full(ENEMY_MAX_HEALTH));
    let [r, g, b] = hsl_to_rgb(world.next_enemy_hue(), 1.0, 0.5);
    world.attach(e, Render::opaque(r, g, b));
    world.tag(e, ComponentSet::ENEMY);
    if homing {
        world.attach(e, Seeker { speed });
    }
    Ok(e)
}

/// Spawn a bullet at `(x, y)` with the given velocity and damage.
///
/// Bullets are lifetime-limited and consumed on their first hit.
pub fn create_bullet(
    world: &mut World,
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    damage: f32,
) -> Result<Entity, WorldError> {
    let e = world.create_entity()?;
    world.attach(e, Position::new(x, y));
    world.attach(e, Velocity::new(vx, vy));
    world.attach(e, Size::square(BULLET_SIZE));
    world.attach(e, Render::opaque(255, 220, 120));
    world.attach(e, Lifetime {
        time_left: BULLET_LIFETIME,
    });
    world.attach(e, Damage { amount: damage });
    world.tag(e, ComponentSet::BULLET);
    Ok(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_archetype_and_registration() {
        let mut world = World::new();
        let player = create_player(&mut world, 100.0, 200.0).unwrap();

        assert_eq!(world.player(), Some(player));
        let mask = world.mask(player);
        for flag in [
            ComponentSet::POSITION,
            ComponentSet::VELOCITY,
            ComponentSet::SIZE,
            ComponentSet::HEALTH,
            ComponentSet::RENDER,
            ComponentSet::ROTATION,
            ComponentSet::PLAYER,
        ] {
            assert!(mask.contains(flag));
        }
        let health = world.get::<Health>(player).unwrap();
        assert_eq!((health.current, health.max), (100.0, 100.0));
        assert_eq!(world.state().player_health, 100.0);
        assert_eq!(world.get::<Render>(player).unwrap().rgb(), [0, 255, 255]);
    }

    #[test]
    fn test_enemy_archetype_with_optional_seeker() {
        let mut world = World::new();
        let drifter = create_enemy(&mut world, 10.0, 20.0, 50.0, false).unwrap();
        let seeker = create_enemy(&mut world, 30.0, 40.0, 60.0, true).unwrap();

        assert!(world.mask(drifter).contains(ComponentSet::ENEMY));
        assert!(!world.mask(drifter).contains(ComponentSet::SEEKER));
        assert_eq!(world.get::<Velocity>(drifter).unwrap().vx, -50.0);

        assert!(world.mask(seeker).contains(ComponentSet::SEEKER));
        assert_eq!(world.get::<Seeker>(seeker).unwrap().speed, 60.0);
    }

    #[test]
    fn test_enemy_hue_rotates() {
        let mut world = World::new();
        let a = create_enemy(&mut world, 0.0, 0.0, 40.0, false).unwrap();
        let b = create_enemy(&mut world, 0.0, 0.0, 40.0, false).unwrap();
        assert_ne!(
            world.get::<Render>(a).unwrap().rgb(),
            world.get::<Render>(b).unwrap().rgb()
        );
    }

    #[test]
    fn test_bullet_archetype_invariant() {
        let mut world = World::new();
        let bullet = create_bullet(&mut world, 5.0, 6.0, 400.0, 0.0, 5.0).unwrap();

        let mask = world.mask(bullet);
        for flag in [
            ComponentSet::POSITION,
            ComponentSet::VELOCITY,
            ComponentSet::SIZE,
            ComponentSet::RENDER,
            ComponentSet::LIFETIME,
            ComponentSet::DAMAGE,
            ComponentSet::BULLET,
        ] {
            assert!(mask.contains(flag));
        }
        assert_eq!(world.get::<Lifetime>(bullet).unwrap().time_left, 2.0);
        assert_eq!(world.get::<Damage>(bullet).unwrap().amount, 5.0);
    }
}
