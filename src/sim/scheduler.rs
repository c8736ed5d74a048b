//! Fixed-timestep scheduler.
//!
//! Rendering runs at whatever rate the host manages; simulation always
//! advances in exact `SIM_DT` steps. Frame time is banked in an
//! accumulator and spent one tick at a time, so a fast machine and a slow
//! machine fed the same inputs produce the same world.

use crate::consts::{MAX_FRAME_DT, SIM_DT};

use super::tick::{tick, TickInput};
use super::world::World;

pub struct Scheduler {
    step: f32,
    accumulator: f32,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_step(SIM_DT)
    }

    pub fn with_step(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
        }
    }

    /// Bank `real_dt` seconds of wall time and run as many fixed ticks as
    /// it pays for, returning how many ran. The delta is clamped to
    /// `MAX_FRAME_DT` first, so a long stall (debugger pause, suspended
    /// laptop) slows the game down instead of triggering a spiral of death.
    pub fn advance(&mut self, world: &mut World, input: &TickInput, real_dt: f32) -> u32 {
        self.accumulator += real_dt.clamp(0.0, MAX_FRAME_DT);
        let mut ticks = 0;
        while self.accumulator >= self.step {
            tick(world, input, self.step);
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }

    /// Leftover banked time, always in `[0, step)` after an advance.
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
