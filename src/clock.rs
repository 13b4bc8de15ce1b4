//! Fixed-rate frame clock
//!
//! Turns wall-clock deltas into a whole number of simulation ticks. Each
//! fixed interval is consumed exactly once; leftover time carries over.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f64,
    accumulator: f64,
    max_substeps: u32,
}

impl FrameClock {
    pub fn new(fps: f64) -> Self {
        Self {
            step: 1.0 / fps,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Add elapsed wall time and return how many ticks are due
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        // Clamp to prevent huge catch-up after a stall
        let elapsed = elapsed.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += elapsed;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks > 1 {
            log::debug!("Frame clock catching up: {} ticks", ticks);
        }
        ticks
    }
}
