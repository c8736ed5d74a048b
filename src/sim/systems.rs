//! The ordered systems pipeline.
//!
//! [`tick`](super::tick::tick) runs these in a fixed order every step.
//! Systems never call each other; all communication goes through world
//! state. A missing player degrades the systems that need one to no-ops.
//! A queried entity missing a component its tag set guarantees is a
//! world-construction bug and panics.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

use super::collision::aabb_overlap;
use super::components::{
    ComponentSet, Damage, Health, Lifetime, Position, Render, Rotation, Seeker, Size, Velocity,
};
use super::entity::Entity;
use super::events::VisualEvent;
use super::factory::{create_bullet, create_enemy};
use super::tick::TickInput;
use super::world::World;

fn position_of(world: &World, entity: Entity) -> Vec2 {
    world
        .get::<Position>(entity)
        .expect("queried entity missing Position")
        .xy()
}

fn extents_of(world: &World, entity: Entity) -> Vec2 {
    world
        .get::<Size>(entity)
        .expect("queried entity missing Size")
        .extents()
}

/// 1. Player control: velocity is set directly from the held directions
/// (unit vector times `PLAYER_SPEED`, zero when nothing is held - no
/// inertia), and rotation faces the pointer when one is supplied.
pub fn player_control(world: &mut World, input: &TickInput) {
    let Some(player) = world.player() else { return };

    let vel = input.directions.as_vec() * PLAYER_SPEED;
    world
        .get_mut::<Velocity>(player)
        .expect("player missing Velocity")
        .set_xy(vel);

    if let Some(pointer) = input.pointer {
        let pos = position_of(world, player);
        let aim = pointer - pos;
        world
            .get_mut::<Rotation>(player)
            .expect("player missing Rotation")
            .angle = aim.y.atan2(aim.x);
    }
}

/// 2. Movement: pure Euler integration, no collision response here.
pub fn movement(world: &mut World, dt: f32) {
    for entity in world.query(ComponentSet::POSITION | ComponentSet::VELOCITY) {
        let vel = *world
            .get::<Velocity>(entity)
            .expect("queried entity missing Velocity");
        let pos = world
            .get_mut::<Position>(entity)
            .expect("queried entity missing Position");
        pos.x += vel.vx * dt;
        pos.y += vel.vy * dt;
        pos.z += vel.vz * dt;
    }
}

/// 3. Spawn: one enemy on a uniformly chosen playfield edge whenever the
/// wave-scaled interval elapses. The interval shrinks as waves climb; the
/// spawn point sits `SPAWN_MARGIN` outside the visible playfield.
pub fn spawn(world: &mut World, dt: f32) {
    world.spawn_timer += dt;
    let wave = world.state().wave;
    let interval = (SPAWN_INTERVAL_BASE - wave as f32 * SPAWN_INTERVAL_PER_WAVE)
        .max(SPAWN_INTERVAL_MIN);
    if world.spawn_timer < interval {
        return;
    }
    world.spawn_timer = 0.0;

    let rng = world.rng_mut();
    let side = rng.random_range(0..4u32);
    let along = rng.random_range(0.0..1.0f32);
    let (x, y) = match side {
        0 => (along * PLAYFIELD_WIDTH, -SPAWN_MARGIN),
        1 => (PLAYFIELD_WIDTH + SPAWN_MARGIN, along * PLAYFIELD_HEIGHT),
        2 => (along * PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT + SPAWN_MARGIN),
        _ => (-SPAWN_MARGIN, along * PLAYFIELD_HEIGHT),
    };
    let speed = ENEMY_BASE_SPEED
        + rng.random_range(0.0..ENEMY_SPEED_JITTER)
        + wave as f32 * ENEMY_SPEED_PER_WAVE;
    let homing = rng.random_bool(ENEMY_HOMING_CHANCE);

    if let Err(err) = create_enemy(world, x, y, speed, homing) {
        log::warn!("enemy spawn skipped: {err}");
    }
}

/// 4. Shooting: while the firing input is held and the cooldown has
/// elapsed, spawn a bullet from the player's muzzle along the aim
/// direction (pointer if available, else the facing axis), then emit a
/// muzzle flash and a small shake impulse.
pub fn shooting(world: &mut World, input: &TickInput, dt: f32) {
    if world.shoot_cooldown > 0.0 {
        world.shoot_cooldown -= dt;
    }
    if !input.firing || world.shoot_cooldown > 0.0 {
        return;
    }
    let Some(player) = world.player() else { return };

    let pos = position_of(world, player);
    let aim = match input.pointer {
        Some(pointer) => (pointer - pos).normalize_or_zero(),
        None => {
            let angle = world
                .get::<Rotation>(player)
                .expect("player missing Rotation")
                .angle;
            Vec2::from_angle(angle)
        }
    };
    // Pointer sitting exactly on the player gives no direction; fire along +x
    let aim = if aim == Vec2::ZERO { Vec2::X } else { aim };

    let muzzle = pos + aim * MUZZLE_OFFSET;
    let vel = aim * BULLET_SPEED;
    match create_bullet(world, muzzle.x, muzzle.y, vel.x, vel.y, BULLET_DAMAGE) {
        Ok(_) => {
            world.shoot_cooldown = SHOOT_COOLDOWN;
            world.push_event(VisualEvent::MuzzleFlash { pos: muzzle });
            world.push_event(VisualEvent::Shake {
                magnitude: SHAKE_MUZZLE,
            });
        }
        Err(err) => log::warn!("bullet spawn skipped: {err}"),
    }
}

/// 5. Enemy AI: every seeker re-aims its velocity as a unit vector toward
/// the player scaled by its homing speed - continuous pure pursuit, not
/// pathfinding. No-op when there is no player.
pub fn enemy_ai(world: &mut World) {
    let Some(player) = world.player() else { return };
    let target = position_of(world, player);

    let seekers = world.query(
        ComponentSet::ENEMY
            | ComponentSet::SEEKER
            | ComponentSet::POSITION
            | ComponentSet::VELOCITY,
    );
    for entity in seekers {
        let pos = position_of(world, entity);
        let speed = world
            .get::<Seeker>(entity)
            .expect("queried entity missing Seeker")
            .speed;
        let vel = (target - pos).normalize_or_zero() * speed;
        world
            .get_mut::<Velocity>(entity)
            .expect("queried entity missing Velocity")
            .set_xy(vel);
    }
}

/// 6. Lifetime: decrement every timer and destroy entities whose timer has
/// crossed below zero. An entity created with 2.0s and stepped at 1.0s dies
/// on the third step, not the second.
pub fn lifetime(world: &mut World, dt: f32) {
    for entity in world.query(ComponentSet::LIFETIME) {
        let lifetime = world
            .get_mut::<Lifetime>(entity)
            .expect("queried entity missing Lifetime");
        lifetime.time_left -= dt;
        if lifetime.time_left < 0.0 {
            world.destroy_entity(entity);
        }
    }
}

/// 7. Collision: bullet-enemy, then player-enemy, both plain AABB overlap.
///
/// A bullet damages exactly one enemy - the first overlap in query order -
/// and is consumed; it never double-hits. Player contact chips the player
/// by `CONTACT_DAMAGE` and destroys the enemy outright, with no score
/// awarded (scoring belongs to the despawn pass, which never sees the
/// removed enemy).
pub fn collision(world: &mut World) {
    let enemies = world.query(
        ComponentSet::ENEMY | ComponentSet::POSITION | ComponentSet::SIZE | ComponentSet::HEALTH,
    );

    let bullets = world.query(
        ComponentSet::BULLET | ComponentSet::POSITION | ComponentSet::SIZE | ComponentSet::DAMAGE,
    );
    for bullet in bullets {
        let b_pos = position_of(world, bullet);
        let b_size = extents_of(world, bullet);
        for &enemy in &enemies {
            if !world.contains(enemy) {
                continue;
            }
            let e_pos = position_of(world, enemy);
            if !aabb_overlap(b_pos, b_size, e_pos, extents_of(world, enemy)) {
                continue;
            }

            let amount = world
                .get::<Damage>(bullet)
                .expect("bullet missing Damage")
                .amount;
            let color = world
                .get::<Render>(enemy)
                .expect("enemy missing Render")
                .rgb();
            let health = world
                .get_mut::<Health>(enemy)
                .expect("queried entity missing Health");
            health.current = (health.current - amount).max(0.0);

            world.push_event(VisualEvent::HitBurst { pos: e_pos, color });
            world.push_event(VisualEvent::Shake {
                magnitude: SHAKE_HIT,
            });
            world.destroy_entity(bullet);
            break; // first hit wins; the bullet is spent
        }
    }

    let Some(player) = world.player() else { return };
    let p_pos = position_of(world, player);
    let p_size = extents_of(world, player);
    for &enemy in &enemies {
        if !world.contains(enemy) {
            continue;
        }
        let e_pos = position_of(world, enemy);
        if !aabb_overlap(p_pos, p_size, e_pos, extents_of(world, enemy)) {
            continue;
        }

        let color = world
            .get::<Render>(enemy)
            .expect("enemy missing Render")
            .rgb();
        let health = world
            .get_mut::<Health>(player)
            .expect("player missing Health");
        health.current = (health.current - CONTACT_DAMAGE).max(0.0);

        world.push_event(VisualEvent::HitBurst { pos: e_pos, color });
        world.push_event(VisualEvent::Shake {
            magnitude: SHAKE_PLAYER_HIT,
        });
        // Contact is lethal to the enemy, independent of its Health field
        world.destroy_entity(enemy);
    }
}

/// 8. Damage & despawn: enemies driven to zero health explode and score.
pub fn despawn(world: &mut World) {
    for enemy in world.query(ComponentSet::ENEMY | ComponentSet::HEALTH) {
        let current = world
            .get::<Health>(enemy)
            .expect("queried entity missing Health")
            .current;
        if current > 0.0 {
            continue;
        }
        let pos = position_of(world, enemy);
        let color = world
            .get::<Render>(enemy)
            .expect("enemy missing Render")
            .rgb();
        world.push_event(VisualEvent::Explosion { pos, color });
        world.push_event(VisualEvent::Shake {
            magnitude: SHAKE_EXPLOSION,
        });
        world.destroy_entity(enemy);
        world.state_mut().score += KILL_SCORE;
    }
}

/// 9. Progression: wave and level are pure functions of score, recomputed
/// every tick and never independently mutated.
pub fn progression(world: &mut World) {
    let score = world.state().score;
    let wave = wave_for_score(score);
    let level = level_for_score(score);

    let state = world.state_mut();
    if wave != state.wave {
        log::info!("wave {wave} reached (score {score})");
    }
    state.wave = wave;
    state.level = level;
}

/// `wave = 1 + floor(score / 200)`
pub fn wave_for_score(score: u64) -> u32 {
    (1 + score / SCORE_PER_WAVE) as u32
}

/// `level = 1 + floor(score / 500)`
pub fn level_for_score(score: u64) -> u32 {
    (1 + score / SCORE_PER_LEVEL) as u32
}
