//! The RGB configuration: three independent bulbs mixing additively.
//!
//! Channel intensities are independent; the only cross-channel coupling is
//! the final additive mix. The three beams have different lengths (a layout
//! asymmetry, kept as configuration) but always observe the same timestep
//! per frame, so the mix stays phase-consistent.

use crate::beam::RgbPhotonBeam;
use crate::clock::{clamp_dt, Steppable};
use crate::config::{Channel, HeadMode, ViewMode};
use crate::constants::{
    BLUE_BEAM_LENGTH, GREEN_BEAM_LENGTH, NOMINAL_FRAME_DT, RED_BEAM_LENGTH,
};
use crate::photometry::{mix_channels, Rgba};

/// Model for the three-bulb screen.
#[derive(Debug)]
pub struct RgbSimulation {
    red_intensity: f64,
    green_intensity: f64,
    blue_intensity: f64,
    view_mode: ViewMode,
    head_mode: HeadMode,
    playing: bool,
    red_beam: RgbPhotonBeam,
    green_beam: RgbPhotonBeam,
    blue_beam: RgbPhotonBeam,
}

impl RgbSimulation {
    /// Create a simulation in its default configuration with
    /// entropy-seeded beams.
    pub fn new() -> Self {
        Self::with_beams(
            RgbPhotonBeam::new(Channel::Red, RED_BEAM_LENGTH),
            RgbPhotonBeam::new(Channel::Green, GREEN_BEAM_LENGTH),
            RgbPhotonBeam::new(Channel::Blue, BLUE_BEAM_LENGTH),
        )
    }

    /// Create a simulation whose photon creation is deterministic.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_beams(
            RgbPhotonBeam::with_seed(Channel::Red, RED_BEAM_LENGTH, seed),
            RgbPhotonBeam::with_seed(Channel::Green, GREEN_BEAM_LENGTH, seed.wrapping_add(1)),
            RgbPhotonBeam::with_seed(Channel::Blue, BLUE_BEAM_LENGTH, seed.wrapping_add(2)),
        )
    }

    fn with_beams(red: RgbPhotonBeam, green: RgbPhotonBeam, blue: RgbPhotonBeam) -> Self {
        RgbSimulation {
            red_intensity: 0.0,
            green_intensity: 0.0,
            blue_intensity: 0.0,
            view_mode: ViewMode::Photon,
            head_mode: HeadMode::Brain,
            playing: true,
            red_beam: red,
            green_beam: green,
            blue_beam: blue,
        }
    }

    /// Configured intensity for a channel, normalized to `[0, 1]`.
    pub fn intensity(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Red => self.red_intensity,
            Channel::Green => self.green_intensity,
            Channel::Blue => self.blue_intensity,
        }
    }

    /// Set a channel's intensity, clamped into `[0, 1]`.
    pub fn set_intensity(&mut self, channel: Channel, intensity: f64) {
        let clamped = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };
        match channel {
            Channel::Red => self.red_intensity = clamped,
            Channel::Green => self.green_intensity = clamped,
            Channel::Blue => self.blue_intensity = clamped,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn head_mode(&self) -> HeadMode {
        self.head_mode
    }

    pub fn set_head_mode(&mut self, head_mode: HeadMode) {
        self.head_mode = head_mode;
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// A channel's photon beam, read-only.
    pub fn beam(&self, channel: Channel) -> &RgbPhotonBeam {
        match channel {
            Channel::Red => &self.red_beam,
            Channel::Green => &self.green_beam,
            Channel::Blue => &self.blue_beam,
        }
    }

    /// The intensity the observer perceives on one channel.
    ///
    /// In beam view this is the configured intensity directly; in photon
    /// view it is whatever last struck the eye on that channel (0 until a
    /// first arrival).
    pub fn perceived_intensity(&self, channel: Channel) -> f64 {
        match self.view_mode {
            ViewMode::Beam => self.intensity(channel),
            ViewMode::Photon => self.beam(channel).last_arrival_intensity(),
        }
    }

    /// The additive mix of the three perceived channel intensities.
    pub fn perceived_color(&self) -> Rgba {
        mix_channels(
            self.perceived_intensity(Channel::Red),
            self.perceived_intensity(Channel::Green),
            self.perceived_intensity(Channel::Blue),
        )
    }

    /// Advance the simulation, if it is playing.
    ///
    /// All three beams observe the same clamped `dt`; there is no
    /// per-channel time skew.
    pub fn step(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        let dt = clamp_dt(dt);
        self.red_beam.step(dt, self.red_intensity);
        self.green_beam.step(dt, self.green_intensity);
        self.blue_beam.step(dt, self.blue_intensity);
    }

    /// Advance exactly one nominal 60 Hz frame, regardless of play state.
    pub fn manual_step(&mut self) {
        self.red_beam.step(NOMINAL_FRAME_DT, self.red_intensity);
        self.green_beam.step(NOMINAL_FRAME_DT, self.green_intensity);
        self.blue_beam.step(NOMINAL_FRAME_DT, self.blue_intensity);
    }

    /// Restore every configuration field to its default and clear all
    /// three beams.
    pub fn reset(&mut self) {
        self.red_intensity = 0.0;
        self.green_intensity = 0.0;
        self.blue_intensity = 0.0;
        self.view_mode = ViewMode::Photon;
        self.head_mode = HeadMode::Brain;
        self.playing = true;
        self.red_beam.reset();
        self.green_beam.reset();
        self.blue_beam.reset();
    }
}

impl Default for RgbSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Steppable for RgbSimulation {
    fn step(&mut self, dt: f64) {
        RgbSimulation::step(self, dt);
    }

    fn manual_step(&mut self) {
        RgbSimulation::manual_step(self);
    }

    fn reset(&mut self) {
        RgbSimulation::reset(self);
    }
}
