//! Fixed-rate timer
//!
//! Turns the host's irregular frame times into whole simulation ticks.

use crate::consts::MAX_SUBSTEPS;

/// Longest frame gap honored in one update (seconds)
pub const MAX_FRAME_DT: f32 = 0.1;

/// Accumulator clock firing fixed steps
#[derive(Debug, Clone)]
pub struct FixedClock {
    step: f32,
    accumulator: f32,
    running: bool,
    total_ticks: u64,
}

impl FixedClock {
    /// Clock firing `tick_rate` times per second (rates below 1 are treated as 1)
    pub fn new(tick_rate: u32) -> Self {
        Self {
            step: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
            running: true,
            total_ticks: 0,
        }
    }

    /// Step length in seconds
    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Add elapsed time and return how many ticks are due now
    ///
    /// Never more than `MAX_SUBSTEPS`; time left over after a capped update is
    /// dropped, partial steps carry over. A stopped clock and non-finite frame
    /// times fire nothing.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if !self.running || !dt.is_finite() {
            return 0;
        }

        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut due = 0;
        while self.accumulator >= self.step && due < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            due += 1;
        }
        if self.accumulator >= self.step {
            log::debug!("Dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        self.total_ticks += due as u64;
        due
    }

    /// Halt for good (window closed)
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Timer stopped after {} ticks", self.total_ticks);
        }
        self.running = false;
        self.accumulator = 0.0;
    }
}
