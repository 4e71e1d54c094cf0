//! The ghost mode state machine.
//!
//! Scatter and chase oscillate on a timer the controller owns; freight and
//! spawn are overrides entered and left only through explicit calls by the
//! game rules. The oscillation clock freezes while an override is active and
//! resumes where it left off.

use strum_macros::Display;
use tracing::debug;

use crate::constants::{CHASE_TIME, SCATTER_TIME};

/// A ghost's behavioral state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Scatter,
    Chase,
    Freight,
    Spawn,
}

/// Durations of the scatter/chase oscillation phases, injectable per ghost.
#[derive(Debug, Clone, Copy)]
pub struct ModeTimings {
    pub scatter: f32,
    pub chase: f32,
}

impl Default for ModeTimings {
    fn default() -> Self {
        ModeTimings {
            scatter: SCATTER_TIME,
            chase: CHASE_TIME,
        }
    }
}

/// Per-ghost mode controller. Mutated only by its owning ghost.
#[derive(Debug, Clone)]
pub struct ModeController {
    current: Mode,
    /// The scatter/chase phase to resume when an override ends.
    resume: Mode,
    timer: f32,
    timings: ModeTimings,
}

impl ModeController {
    pub fn new(timings: ModeTimings) -> Self {
        ModeController {
            current: Mode::Scatter,
            resume: Mode::Scatter,
            timer: 0.0,
            timings,
        }
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    fn phase_duration(&self) -> f32 {
        match self.resume {
            Mode::Scatter => self.timings.scatter,
            _ => self.timings.chase,
        }
    }

    /// Advances the scatter/chase clock. No effect while an override mode is
    /// active; freight and spawn never time out on their own.
    pub fn update(&mut self, dt: f32) {
        if !matches!(self.current, Mode::Scatter | Mode::Chase) {
            return;
        }

        self.timer += dt;
        if self.timer >= self.phase_duration() {
            self.timer = 0.0;
            self.resume = match self.resume {
                Mode::Scatter => Mode::Chase,
                _ => Mode::Scatter,
            };
            self.current = self.resume;
            debug!(mode = %self.current, "mode oscillation");
        }
    }

    pub fn set_freight(&mut self) {
        self.current = Mode::Freight;
    }

    pub fn set_spawn(&mut self) {
        self.current = Mode::Spawn;
    }

    /// Leaves any override and resumes the interrupted scatter/chase phase.
    pub fn set_normal(&mut self) {
        self.current = self.resume;
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new(ModeTimings::default())
    }
}
