//! Photon beam channels: creation, advancement, filtering, and eye arrivals.
//!
//! A beam owns an ordered collection of live photons confined to a 1-D
//! channel of fixed length. Each frame it advances every photon, retires the
//! ones that leave the channel, records the most recent photon to reach the
//! terminal boundary (the observer's eye), and creates at most one new
//! photon at a rate proportional to the source intensity.
//!
//! The single-bulb beam additionally models the filter plane: a photon
//! crossing it while the filter is visible is resolved exactly once, either
//! surviving with a reduced intensity or being absorbed. Colored photons
//! survive with probability equal to the filter's transmission at their
//! wavelength; white photons survive at a fixed rate and take on the
//! filter's wavelength when they do.
//!
//! Beams are mutated only through their own `step`, from a single thread;
//! simulations and external collaborators read them through the accessors.

use log::trace;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{Channel, LightType};
use crate::constants::{
    BEAM_HEIGHT, FAN_OUT_SPEED, GAUSSIAN_WIDTH_NM, PHOTON_SPEED, VISIBLE_MAX_NM, VISIBLE_MIN_NM,
    WHITE_PASS_PROBABILITY,
};
use crate::photometry::{transmission_percent, Rgba};
use crate::photon::{RgbPhoton, SingleBulbPhoton};

/// Per-frame source and filter state sampled by the single-bulb beam.
///
/// Captured from the simulation's live configuration at every step, so a
/// configuration write between frames is visible to the very next frame.
#[derive(Debug, Clone, Copy)]
pub struct SingleBulbSource {
    pub flashlight_on: bool,
    pub light_type: LightType,
    pub flashlight_wavelength: f64,
    pub filter_visible: bool,
    pub filter_wavelength: f64,
}

/// The photon channel between the single bulb and the eye.
#[derive(Debug)]
pub struct SingleBulbPhotonBeam {
    photons: Vec<SingleBulbPhoton>,
    length: f64,
    filter_x: f64,
    last_photon_color: Rgba,
    rng: StdRng,
}

impl SingleBulbPhotonBeam {
    /// Create an empty beam with an entropy-seeded photon generator.
    pub fn new(length: f64, filter_x: f64) -> Self {
        Self::with_rng(length, filter_x, StdRng::from_entropy())
    }

    /// Create an empty beam with a fixed seed for deterministic stepping.
    pub fn with_seed(length: f64, filter_x: f64, seed: u64) -> Self {
        Self::with_rng(length, filter_x, StdRng::seed_from_u64(seed))
    }

    fn with_rng(length: f64, filter_x: f64, rng: StdRng) -> Self {
        SingleBulbPhotonBeam {
            photons: Vec::new(),
            length,
            filter_x,
            last_photon_color: Rgba::TRANSPARENT,
            rng,
        }
    }

    /// Live photons in creation order.
    pub fn photons(&self) -> &[SingleBulbPhoton] {
        &self.photons
    }

    /// Channel length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Color and intensity of the most recent photon to reach the eye, or
    /// [`Rgba::TRANSPARENT`] if none has arrived since the last reset.
    pub fn last_photon_color(&self) -> Rgba {
        self.last_photon_color
    }

    /// Advance one frame.
    ///
    /// `dt` must already be clamped by the caller; the beam does not bound
    /// it. Photons that cross the filter plane are resolved, photons that
    /// leave the channel are retired, and at most one new photon is created
    /// at the bulb.
    pub fn step(&mut self, dt: f64, source: &SingleBulbSource) {
        let mut i = 0;
        while i < self.photons.len() {
            self.photons[i].advance(dt);

            if source.filter_visible
                && !self.photons[i].passed_filter
                && self.photons[i].position.x >= self.filter_x
            {
                if !self.resolve_filter(i, source) {
                    self.photons.remove(i);
                    continue;
                }
            }

            if self.photons[i].position.x > self.length {
                let photon = self.photons.remove(i);
                self.last_photon_color = photon.color();
                trace!(
                    "photon arrived at eye: wavelength {:.1} nm, intensity {:.2}",
                    photon.wavelength,
                    photon.intensity
                );
                continue;
            }

            i += 1;
        }

        if let Some(photon) = self.create_photon(source) {
            self.photons.push(photon);
        }
    }

    /// Clear all live photons and restore the no-light sentinel.
    pub fn reset(&mut self) {
        self.photons.clear();
        self.last_photon_color = Rgba::TRANSPARENT;
    }

    /// Resolve the filter plane for the photon at `index`.
    ///
    /// Returns false when the photon is absorbed. Survivors are flagged so
    /// the filter is never applied to them again.
    fn resolve_filter(&mut self, index: usize, source: &SingleBulbSource) -> bool {
        let draw: f64 = self.rng.gen();
        let photon = &mut self.photons[index];

        if photon.is_white {
            // White photons pass at a fixed rate and leave the filter
            // carrying its color.
            if draw >= WHITE_PASS_PROBABILITY {
                return false;
            }
            photon.wavelength = source.filter_wavelength;
            photon.is_white = false;
            photon.intensity = 1.0;
        } else {
            let percent = transmission_percent(
                photon.wavelength,
                source.filter_wavelength,
                GAUSSIAN_WIDTH_NM,
            );
            if draw >= percent {
                return false;
            }
            photon.intensity = percent;
        }

        photon.passed_filter = true;
        true
    }

    /// Create this frame's photon, if the flashlight is on.
    ///
    /// The color tag is captured now: retuning the flashlight later never
    /// alters photons already in flight.
    fn create_photon(&mut self, source: &SingleBulbSource) -> Option<SingleBulbPhoton> {
        if !source.flashlight_on {
            return None;
        }

        let is_white = source.light_type == LightType::White;
        let wavelength = if is_white {
            self.rng.gen_range(VISIBLE_MIN_NM..VISIBLE_MAX_NM)
        } else {
            source.flashlight_wavelength
        };

        Some(SingleBulbPhoton {
            position: Vector2::new(0.0, self.rng.gen_range(-BEAM_HEIGHT / 2.0..BEAM_HEIGHT / 2.0)),
            velocity: Vector2::new(
                PHOTON_SPEED,
                self.rng.gen_range(-FAN_OUT_SPEED..FAN_OUT_SPEED),
            ),
            wavelength,
            intensity: 1.0,
            is_white,
            passed_filter: false,
        })
    }
}

/// One of the three photon channels in the RGB configuration.
#[derive(Debug)]
pub struct RgbPhotonBeam {
    photons: Vec<RgbPhoton>,
    channel: Channel,
    length: f64,
    last_arrival_intensity: f64,
    rng: StdRng,
}

impl RgbPhotonBeam {
    /// Create an empty channel beam with an entropy-seeded generator.
    pub fn new(channel: Channel, length: f64) -> Self {
        Self::with_rng(channel, length, StdRng::from_entropy())
    }

    /// Create an empty channel beam with a fixed seed.
    pub fn with_seed(channel: Channel, length: f64, seed: u64) -> Self {
        Self::with_rng(channel, length, StdRng::seed_from_u64(seed))
    }

    fn with_rng(channel: Channel, length: f64, rng: StdRng) -> Self {
        RgbPhotonBeam {
            photons: Vec::new(),
            channel,
            length,
            last_arrival_intensity: 0.0,
            rng,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Live photons in creation order.
    pub fn photons(&self) -> &[RgbPhoton] {
        &self.photons
    }

    /// Intensity of the most recent photon to reach the eye, or 0 if none
    /// has arrived since the last reset.
    pub fn last_arrival_intensity(&self) -> f64 {
        self.last_arrival_intensity
    }

    /// Advance one frame under the channel's current source intensity.
    ///
    /// `dt` must already be clamped by the caller.
    pub fn step(&mut self, dt: f64, intensity: f64) {
        let mut i = 0;
        while i < self.photons.len() {
            self.photons[i].advance(dt);

            if self.photons[i].position.x > self.length {
                let photon = self.photons.remove(i);
                self.last_arrival_intensity = photon.intensity;
                trace!(
                    "{} photon arrived at eye: intensity {:.2}",
                    photon.channel,
                    photon.intensity
                );
                continue;
            }

            i += 1;
        }

        if let Some(photon) = self.create_photon(intensity) {
            self.photons.push(photon);
        }
    }

    /// Clear all live photons and restore the no-light sentinel.
    pub fn reset(&mut self) {
        self.photons.clear();
        self.last_arrival_intensity = 0.0;
    }

    /// Create this frame's photon with probability equal to the normalized
    /// source intensity.
    fn create_photon(&mut self, intensity: f64) -> Option<RgbPhoton> {
        if intensity <= 0.0 || self.rng.gen::<f64>() >= intensity {
            return None;
        }

        Some(RgbPhoton {
            position: Vector2::new(0.0, self.rng.gen_range(-BEAM_HEIGHT / 2.0..BEAM_HEIGHT / 2.0)),
            velocity: Vector2::new(
                PHOTON_SPEED,
                self.rng.gen_range(-FAN_OUT_SPEED..FAN_OUT_SPEED),
            ),
            channel: self.channel,
            intensity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FILTER_X, NOMINAL_FRAME_DT, RED_BEAM_LENGTH, SINGLE_BEAM_LENGTH};
    use crate::photometry::wavelength_to_color;
    use approx::assert_relative_eq;

    fn colored_source(on: bool) -> SingleBulbSource {
        SingleBulbSource {
            flashlight_on: on,
            light_type: LightType::Colored,
            flashlight_wavelength: 570.0,
            filter_visible: false,
            filter_wavelength: 570.0,
        }
    }

    #[test]
    fn test_no_creation_while_off() {
        let mut beam = SingleBulbPhotonBeam::with_seed(SINGLE_BEAM_LENGTH, FILTER_X, 7);
        let source = colored_source(false);
        for _ in 0..200 {
            beam.step(NOMINAL_FRAME_DT, &source);
        }
        assert!(beam.photons().is_empty());
        assert_eq!(beam.last_photon_color(), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_beam_drains_after_light_turned_off() {
        let mut beam = SingleBulbPhotonBeam::with_seed(SINGLE_BEAM_LENGTH, FILTER_X, 7);
        for _ in 0..30 {
            beam.step(NOMINAL_FRAME_DT, &colored_source(true));
        }
        assert!(!beam.photons().is_empty());

        // Transit takes ~70 frames at nominal speed; give it plenty
        for _ in 0..200 {
            beam.step(NOMINAL_FRAME_DT, &colored_source(false));
        }
        assert!(beam.photons().is_empty());
    }

    #[test]
    fn test_live_photons_stay_in_channel() {
        let mut beam = SingleBulbPhotonBeam::with_seed(SINGLE_BEAM_LENGTH, FILTER_X, 11);
        let source = colored_source(true);
        for _ in 0..300 {
            beam.step(NOMINAL_FRAME_DT, &source);
            for photon in beam.photons() {
                assert!(photon.position.x >= 0.0);
                assert!(photon.position.x <= SINGLE_BEAM_LENGTH);
            }
        }
    }

    #[test]
    fn test_boundary_arrival_updates_last_color_exactly_once() {
        let mut beam = SingleBulbPhotonBeam::with_seed(SINGLE_BEAM_LENGTH, FILTER_X, 3);

        // Create exactly one photon, then shut the light off
        beam.step(NOMINAL_FRAME_DT, &colored_source(true));
        assert_eq!(beam.photons().len(), 1);

        let off = colored_source(false);
        let mut arrival_frames = Vec::new();
        for frame in 0..200 {
            beam.step(NOMINAL_FRAME_DT, &off);
            if beam.photons().is_empty() && arrival_frames.is_empty() {
                arrival_frames.push(frame);
            }
        }

        // Removed in the same frame the arrival was recorded
        assert_eq!(arrival_frames.len(), 1);
        assert_eq!(beam.last_photon_color(), wavelength_to_color(570.0));

        // The photon needs length / (speed * dt) hops to cross the boundary
        let hops = (SINGLE_BEAM_LENGTH / (PHOTON_SPEED * NOMINAL_FRAME_DT)).floor() as i64;
        assert!((arrival_frames[0] as i64 - hops).abs() <= 1);
    }

    #[test]
    fn test_out_of_band_filter_absorbs_everything() {
        let mut beam = SingleBulbPhotonBeam::with_seed(SINGLE_BEAM_LENGTH, FILTER_X, 5);
        let source = SingleBulbSource {
            flashlight_on: true,
            light_type: LightType::Colored,
            flashlight_wavelength: 570.0,
            filter_visible: true,
            filter_wavelength: 420.0,
        };

        for _ in 0..400 {
            beam.step(NOMINAL_FRAME_DT, &source);
            // Nothing survives the filter plane
            for photon in beam.photons() {
                assert!(photon.position.x < FILTER_X);
            }
        }
        assert_eq!(beam.last_photon_color(), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_matching_filter_passes_fully() {
        let mut beam = SingleBulbPhotonBeam::with_seed(SINGLE_BEAM_LENGTH, FILTER_X, 5);
        let source = SingleBulbSource {
            flashlight_on: true,
            light_type: LightType::Colored,
            flashlight_wavelength: 570.0,
            filter_visible: true,
            filter_wavelength: 570.0,
        };

        for _ in 0..200 {
            beam.step(NOMINAL_FRAME_DT, &source);
        }

        // Transmission is 1.0 at an exact match, so arrivals are full strength
        assert_eq!(beam.last_photon_color(), wavelength_to_color(570.0));
        assert_eq!(beam.last_photon_color().a, 1.0);
    }

    #[test]
    fn test_partial_filter_scales_intensity() {
        let mut beam = SingleBulbPhotonBeam::with_seed(SINGLE_BEAM_LENGTH, FILTER_X, 5);
        let source = SingleBulbSource {
            flashlight_on: true,
            light_type: LightType::Colored,
            flashlight_wavelength: 570.0,
            filter_visible: true,
            filter_wavelength: 575.0,
        };

        for _ in 0..400 {
            beam.step(NOMINAL_FRAME_DT, &source);
        }

        // Survivors carry the transmission percentage as intensity
        let expected = transmission_percent(570.0, 575.0, GAUSSIAN_WIDTH_NM);
        for photon in beam.photons() {
            if photon.passed_filter {
                assert_relative_eq!(photon.intensity, expected);
            }
        }
        assert_relative_eq!(beam.last_photon_color().a, expected);
    }

    #[test]
    fn test_white_photons_take_filter_color() {
        let mut beam = SingleBulbPhotonBeam::with_seed(SINGLE_BEAM_LENGTH, FILTER_X, 13);
        let source = SingleBulbSource {
            flashlight_on: true,
            light_type: LightType::White,
            flashlight_wavelength: 570.0,
            filter_visible: true,
            filter_wavelength: 640.0,
        };

        for _ in 0..300 {
            beam.step(NOMINAL_FRAME_DT, &source);
            for photon in beam.photons() {
                if photon.passed_filter {
                    assert!(!photon.is_white);
                    assert_eq!(photon.wavelength, 640.0);
                }
            }
        }
    }

    #[test]
    fn test_color_tag_captured_at_creation() {
        let mut beam = SingleBulbPhotonBeam::with_seed(SINGLE_BEAM_LENGTH, FILTER_X, 3);
        beam.step(NOMINAL_FRAME_DT, &colored_source(true));

        // Retune the flashlight; the in-flight photon keeps its wavelength
        let mut retuned = colored_source(true);
        retuned.flashlight_wavelength = 430.0;
        beam.step(NOMINAL_FRAME_DT, &retuned);

        assert_eq!(beam.photons()[0].wavelength, 570.0);
        assert_eq!(beam.photons()[1].wavelength, 430.0);
    }

    #[test]
    fn test_reset_clears_photons_and_sentinel() {
        let mut beam = SingleBulbPhotonBeam::with_seed(SINGLE_BEAM_LENGTH, FILTER_X, 3);
        for _ in 0..120 {
            beam.step(NOMINAL_FRAME_DT, &colored_source(true));
        }
        assert!(!beam.photons().is_empty());
        assert_ne!(beam.last_photon_color(), Rgba::TRANSPARENT);

        beam.reset();
        assert!(beam.photons().is_empty());
        assert_eq!(beam.last_photon_color(), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_rgb_beam_zero_intensity_creates_nothing() {
        let mut beam = RgbPhotonBeam::with_seed(Channel::Red, RED_BEAM_LENGTH, 9);
        for _ in 0..200 {
            beam.step(NOMINAL_FRAME_DT, 0.0);
        }
        assert!(beam.photons().is_empty());
        assert_eq!(beam.last_arrival_intensity(), 0.0);
    }

    #[test]
    fn test_rgb_beam_full_intensity_creates_every_frame() {
        let mut beam = RgbPhotonBeam::with_seed(Channel::Green, 250.0, 9);
        for frame in 1..=20 {
            beam.step(NOMINAL_FRAME_DT, 1.0);
            assert_eq!(beam.photons().len(), frame);
        }
    }

    #[test]
    fn test_rgb_beam_arrival_records_intensity() {
        let mut beam = RgbPhotonBeam::with_seed(Channel::Blue, 100.0, 9);
        for _ in 0..100 {
            beam.step(NOMINAL_FRAME_DT, 1.0);
        }
        assert_eq!(beam.last_arrival_intensity(), 1.0);
    }
}
