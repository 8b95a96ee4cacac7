//! Frame clock and timestep policy.
//!
//! The demonstrator is single-threaded and frame-driven: an external frame
//! source calls into the clock exactly once per rendering frame. Wall-clock
//! timesteps are clamped before they reach a beam, because a large time
//! jump would let photons skip past arrival detection in a single hop and a
//! non-positive timestep would freeze motion. One clamping policy covers
//! both simulation configurations: non-positive or non-finite timesteps are
//! replaced by the nominal frame time, oversized ones are capped at
//! [`MAX_DT`].

use crate::constants::{MAX_DT, NOMINAL_FRAME_DT};

/// Clamp a frame timestep into the range the beams can integrate safely.
///
/// # Arguments
/// * `dt` - Proposed timestep in seconds
///
/// # Returns
/// `dt` unchanged when it lies in `(0, MAX_DT]`; [`NOMINAL_FRAME_DT`] when
/// `dt` is non-positive or non-finite; [`MAX_DT`] when `dt` exceeds it.
pub fn clamp_dt(dt: f64) -> f64 {
    if !dt.is_finite() || dt <= 0.0 {
        NOMINAL_FRAME_DT
    } else if dt > MAX_DT {
        MAX_DT
    } else {
        dt
    }
}

/// Seam between the frame driver and a simulation configuration.
pub trait Steppable {
    /// Advance by a frame timestep (clamped internally).
    fn step(&mut self, dt: f64);

    /// Advance exactly one nominal 60 Hz frame, regardless of play state.
    fn manual_step(&mut self);

    /// Discard all in-flight state and restore defaults.
    fn reset(&mut self);
}

/// Drives a simulation from an external frame source, either continuously
/// or one nominal frame at a time.
#[derive(Debug, Default)]
pub struct SimulationClock {
    frames: u64,
}

impl SimulationClock {
    pub fn new() -> Self {
        SimulationClock { frames: 0 }
    }

    /// Number of frames delivered since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Deliver one continuous frame of `dt` seconds.
    pub fn tick(&mut self, sim: &mut dyn Steppable, dt: f64) {
        sim.step(dt);
        self.frames += 1;
    }

    /// Deliver exactly one nominal 60 Hz frame (the step button).
    pub fn step_frame(&mut self, sim: &mut dyn Steppable) {
        sim.manual_step();
        self.frames += 1;
    }
}
