//! The single-bulb configuration: one flashlight, one filter, one eye.
//!
//! The perceived color is always a pure function of the configuration
//! fields plus the beam's last eye arrival. It is recomputed on every read
//! rather than cached, so there is no staleness window and no write path to
//! a derived value.

use crate::beam::{SingleBulbPhotonBeam, SingleBulbSource};
use crate::clock::{clamp_dt, Steppable};
use crate::config::{HeadMode, LightType, ViewMode};
use crate::constants::{FILTER_X, GAUSSIAN_WIDTH_NM, NOMINAL_FRAME_DT, SINGLE_BEAM_LENGTH};
use crate::photometry::{clamp_to_visible, transmission_percent, wavelength_to_color, Rgba};

/// Default wavelength for both the flashlight and the filter, in nanometers.
const DEFAULT_WAVELENGTH_NM: f64 = 570.0;

/// Model for the single-bulb screen.
#[derive(Debug)]
pub struct SingleBulbSimulation {
    light_type: LightType,
    view_mode: ViewMode,
    flashlight_wavelength: f64,
    flashlight_on: bool,
    filter_wavelength: f64,
    filter_visible: bool,
    head_mode: HeadMode,
    playing: bool,
    beam: SingleBulbPhotonBeam,
}

impl SingleBulbSimulation {
    /// Create a simulation in its default configuration with an
    /// entropy-seeded beam.
    pub fn new() -> Self {
        Self::with_beam(SingleBulbPhotonBeam::new(SINGLE_BEAM_LENGTH, FILTER_X))
    }

    /// Create a simulation whose photon creation is deterministic.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_beam(SingleBulbPhotonBeam::with_seed(
            SINGLE_BEAM_LENGTH,
            FILTER_X,
            seed,
        ))
    }

    fn with_beam(beam: SingleBulbPhotonBeam) -> Self {
        SingleBulbSimulation {
            light_type: LightType::Colored,
            view_mode: ViewMode::Beam,
            flashlight_wavelength: DEFAULT_WAVELENGTH_NM,
            flashlight_on: false,
            filter_wavelength: DEFAULT_WAVELENGTH_NM,
            filter_visible: false,
            head_mode: HeadMode::Brain,
            playing: true,
            beam,
        }
    }

    pub fn light_type(&self) -> LightType {
        self.light_type
    }

    pub fn set_light_type(&mut self, light_type: LightType) {
        self.light_type = light_type;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn flashlight_wavelength(&self) -> f64 {
        self.flashlight_wavelength
    }

    /// Set the flashlight wavelength, clamped to the visible range.
    pub fn set_flashlight_wavelength(&mut self, wavelength_nm: f64) {
        self.flashlight_wavelength = clamp_to_visible(wavelength_nm);
    }

    pub fn flashlight_on(&self) -> bool {
        self.flashlight_on
    }

    pub fn set_flashlight_on(&mut self, on: bool) {
        self.flashlight_on = on;
    }

    pub fn filter_wavelength(&self) -> f64 {
        self.filter_wavelength
    }

    /// Set the filter's center wavelength, clamped to the visible range.
    pub fn set_filter_wavelength(&mut self, wavelength_nm: f64) {
        self.filter_wavelength = clamp_to_visible(wavelength_nm);
    }

    pub fn filter_visible(&self) -> bool {
        self.filter_visible
    }

    pub fn set_filter_visible(&mut self, visible: bool) {
        self.filter_visible = visible;
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

    /// The photon beam, read-only.
    pub fn beam(&self) -> &SingleBulbPhotonBeam {
        &self.beam
    }

    /// The color the observer perceives right now.
    ///
    /// The branches are evaluated in a fixed priority order; several of the
    /// conditions can hold simultaneously and the first match wins:
    ///
    /// 1. Photon view: whatever last struck the eye, verbatim.
    /// 2. Flashlight off: black.
    /// 3. Filter on colored light: the flashlight color at the filter's
    ///    transmission percentage.
    /// 4. Filter on white light: the filter's own transmission color.
    /// 5. Unfiltered white light: white.
    /// 6. Unfiltered colored light: the flashlight color.
    pub fn perceived_color(&self) -> Rgba {
        if self.view_mode == ViewMode::Photon {
            self.beam.last_photon_color()
        } else if !self.flashlight_on {
            Rgba::BLACK
        } else if self.filter_visible && self.light_type == LightType::Colored {
            let percent = transmission_percent(
                self.flashlight_wavelength,
                self.filter_wavelength,
                GAUSSIAN_WIDTH_NM,
            );
            wavelength_to_color(self.flashlight_wavelength).with_alpha(percent)
        } else if self.filter_visible && self.light_type == LightType::White {
            wavelength_to_color(self.filter_wavelength)
        } else if self.light_type == LightType::White {
            Rgba::WHITE
        } else {
            wavelength_to_color(self.flashlight_wavelength)
        }
    }

    /// Advance the simulation, if it is playing. `dt` is clamped before it
    /// reaches the beam.
    pub fn step(&mut self, dt: f64) {
        if !self.playing {
            return;
        }
        let dt = clamp_dt(dt);
        let source = self.source();
        self.beam.step(dt, &source);
    }

    /// Advance exactly one nominal 60 Hz frame, regardless of play state.
    pub fn manual_step(&mut self) {
        let source = self.source();
        self.beam.step(NOMINAL_FRAME_DT, &source);
    }

    /// Restore every configuration field to its default and clear the beam.
    pub fn reset(&mut self) {
        self.light_type = LightType::Colored;
        self.view_mode = ViewMode::Beam;
        self.flashlight_wavelength = DEFAULT_WAVELENGTH_NM;
        self.flashlight_on = false;
        self.filter_wavelength = DEFAULT_WAVELENGTH_NM;
        self.filter_visible = false;
        self.head_mode = HeadMode::Brain;
        self.playing = true;
        self.beam.reset();
    }

    fn source(&self) -> SingleBulbSource {
        SingleBulbSource {
            flashlight_on: self.flashlight_on,
            light_type: self.light_type,
            flashlight_wavelength: self.flashlight_wavelength,
            filter_visible: self.filter_visible,
            filter_wavelength: self.filter_wavelength,
        }
    }
}

impl Default for SingleBulbSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Steppable for SingleBulbSimulation {
    fn step(&mut self, dt: f64) {
        SingleBulbSimulation::step(self, dt);
    }

    fn manual_step(&mut self) {
        SingleBulbSimulation::manual_step(self);
    }

    fn reset(&mut self) {
        SingleBulbSimulation::reset(self);
    }
}
