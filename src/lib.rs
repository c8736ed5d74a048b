//! Neon Horde - deterministic simulation core for a top-down arcade shooter
//!
//! Core module:
//! - `sim`: ECS world, entity factories, the ordered systems pipeline, and
//!   the fixed-timestep scheduler
//!
//! Rendering, audio, HUD text, and raw input capture live outside this
//! crate. Collaborators feed a [`sim::TickInput`] per tick and read back
//! [`sim::Drawable`]s, a [`sim::HudSnapshot`], and drained
//! [`sim::VisualEvent`]s after the tick loop fully drains.

pub mod sim;

pub use sim::{Scheduler, TickInput, World};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Real-delta clamp; a stalled frame never triggers runaway catch-up ticks
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Playfield dimensions (world units, origin top-left)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// How far outside the visible playfield enemies spawn
    pub const SPAWN_MARGIN: f32 = 24.0;

    /// Bounded entity capacity; creation past this is rejected
    pub const MAX_ENTITIES: usize = 1000;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 180.0;
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 16.0;
    pub const ENEMY_MAX_HEALTH: f32 = 10.0;
    pub const ENEMY_BASE_SPEED: f32 = 40.0;
    pub const ENEMY_SPEED_JITTER: f32 = 40.0;
    pub const ENEMY_SPEED_PER_WAVE: f32 = 2.0;
    /// Probability that a spawned enemy homes on the player
    pub const ENEMY_HOMING_CHANCE: f64 = 0.65;
    /// Contact damage dealt to the player per overlapping enemy
    pub const CONTACT_DAMAGE: f32 = 15.0;

    /// Spawn pacing: `interval = max(MIN, BASE - wave * PER_WAVE)`
    pub const SPAWN_INTERVAL_BASE: f32 = 1.2;
    pub const SPAWN_INTERVAL_PER_WAVE: f32 = 0.05;
    pub const SPAWN_INTERVAL_MIN: f32 = 0.3;

    /// Bullet defaults
    pub const BULLET_SIZE: f32 = 4.0;
    pub const BULLET_SPEED: f32 = 400.0;
    pub const BULLET_DAMAGE: f32 = 5.0;
    pub const BULLET_LIFETIME: f32 = 2.0;
    /// Muzzle distance from the player center along the aim direction
    pub const MUZZLE_OFFSET: f32 = 16.0;
    pub const SHOOT_COOLDOWN: f32 = 0.15;

    /// Score awarded per enemy destroyed by damage
    pub const KILL_SCORE: u64 = 10;
    /// Score thresholds for the derived difficulty counters
    pub const SCORE_PER_WAVE: u64 = 200;
    pub const SCORE_PER_LEVEL: u64 = 500;

    /// Shake impulse magnitudes, consumed by the screen-shake collaborator
    pub const SHAKE_MUZZLE: f32 = 1.5;
    pub const SHAKE_HIT: f32 = 2.5;
    pub const SHAKE_PLAYER_HIT: f32 = 6.0;
    pub const SHAKE_EXPLOSION: f32 = 4.0;
}

/// Convert HSL (hue in degrees, saturation/lightness in `0..=1`) to 8-bit RGB.
///
/// Used by the enemy factory to derive colors from a rotating hue.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [u8; 3] {
    let h = hue.rem_euclid(360.0) / 360.0;
    let (s, l) = (saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return [v, v, v];
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |mut t: f32| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round() as u8
    };

    [channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primary_hues() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(180.0, 1.0, 0.5), [0, 255, 255]);
    }

    #[test]
    fn test_hsl_zero_saturation_is_gray() {
        assert_eq!(hsl_to_rgb(57.0, 0.0, 0.5), [128, 128, 128]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), [255, 255, 255]);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), [0, 0, 0]);
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
        assert_eq!(hsl_to_rgb(-120.0, 1.0, 0.5), hsl_to_rgb(240.0, 1.0, 0.5));
    }
}
