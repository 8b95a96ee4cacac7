//! Read-only snapshots of simulation state for external tooling.
//!
//! Every configuration field and derived value is exposed under a stable
//! name so instrumentation clients and renderers can consume the model
//! without reaching into it. Snapshots are plain values: taking one cannot
//! mutate the simulation, and derived fields (`perceived_color`, perceived
//! intensities) exist here only as outputs; there is no path to set them.

use serde::Serialize;

use crate::config::{Channel, HeadMode, LightType, ViewMode};
use crate::photometry::Rgba;
use crate::sims::{RgbSimulation, SingleBulbSimulation};

/// Position and display color of one live photon.
#[derive(Debug, Clone, Serialize)]
pub struct PhotonState {
    pub x: f64,
    pub y: f64,
    pub color: Rgba,
}

/// Complete observable state of the single-bulb configuration.
#[derive(Debug, Clone, Serialize)]
pub struct SingleBulbSnapshot {
    pub light_type: LightType,
    pub view_mode: ViewMode,
    pub flashlight_wavelength: f64,
    pub flashlight_on: bool,
    pub filter_wavelength: f64,
    pub filter_visible: bool,
    pub head_mode: HeadMode,
    pub playing: bool,
    pub last_photon_color: Rgba,
    pub perceived_color: Rgba,
    pub photons: Vec<PhotonState>,
}

impl SingleBulbSnapshot {
    pub fn capture(sim: &SingleBulbSimulation) -> Self {
        SingleBulbSnapshot {
            light_type: sim.light_type(),
            view_mode: sim.view_mode(),
            flashlight_wavelength: sim.flashlight_wavelength(),
            flashlight_on: sim.flashlight_on(),
            filter_wavelength: sim.filter_wavelength(),
            filter_visible: sim.filter_visible(),
            head_mode: sim.head_mode(),
            playing: sim.playing(),
            last_photon_color: sim.beam().last_photon_color(),
            perceived_color: sim.perceived_color(),
            photons: sim
                .beam()
                .photons()
                .iter()
                .map(|photon| PhotonState {
                    x: photon.position.x,
                    y: photon.position.y,
                    color: photon.color(),
                })
                .collect(),
        }
    }
}

/// Observable state of one RGB channel.
#[derive(Debug, Clone, Serialize)]
pub struct RgbChannelSnapshot {
    pub intensity: f64,
    pub perceived_intensity: f64,
    pub photons: Vec<PhotonState>,
}

/// Complete observable state of the RGB configuration.
#[derive(Debug, Clone, Serialize)]
pub struct RgbSnapshot {
    pub view_mode: ViewMode,
    pub head_mode: HeadMode,
    pub playing: bool,
    pub red: RgbChannelSnapshot,
    pub green: RgbChannelSnapshot,
    pub blue: RgbChannelSnapshot,
    pub perceived_color: Rgba,
}

impl RgbSnapshot {
    pub fn capture(sim: &RgbSimulation) -> Self {
        RgbSnapshot {
            view_mode: sim.view_mode(),
            head_mode: sim.head_mode(),
            playing: sim.playing(),
            red: channel_snapshot(sim, Channel::Red),
            green: channel_snapshot(sim, Channel::Green),
            blue: channel_snapshot(sim, Channel::Blue),
            perceived_color: sim.perceived_color(),
        }
    }
}

fn channel_snapshot(sim: &RgbSimulation, channel: Channel) -> RgbChannelSnapshot {
    RgbChannelSnapshot {
        intensity: sim.intensity(channel),
        perceived_intensity: sim.perceived_intensity(channel),
        photons: sim
            .beam(channel)
            .photons()
            .iter()
            .map(|photon| PhotonState {
                x: photon.position.x,
                y: photon.position.y,
                color: channel_color(channel, photon.intensity),
            })
            .collect(),
    }
}

/// Display color of a channel photon: the channel primary at the photon's
/// intensity.
fn channel_color(channel: Channel, intensity: f64) -> Rgba {
    match channel {
        Channel::Red => Rgba::new(1.0, 0.0, 0.0, intensity),
        Channel::Green => Rgba::new(0.0, 1.0, 0.0, intensity),
        Channel::Blue => Rgba::new(0.0, 0.0, 1.0, intensity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NOMINAL_FRAME_DT;

    #[test]
    fn test_single_bulb_snapshot_reflects_state() {
        let mut sim = SingleBulbSimulation::with_seed(1);
        sim.set_light_type(LightType::White);
        sim.set_flashlight_on(true);
        for _ in 0..5 {
            sim.step(NOMINAL_FRAME_DT);
        }

        let snapshot = SingleBulbSnapshot::capture(&sim);
        assert_eq!(snapshot.light_type, LightType::White);
        assert!(snapshot.flashlight_on);
        assert_eq!(snapshot.photons.len(), sim.beam().photons().len());
        assert_eq!(snapshot.perceived_color, sim.perceived_color());
    }

    #[test]
    fn test_single_bulb_snapshot_field_names_are_stable() {
        let sim = SingleBulbSimulation::with_seed(1);
        let value = serde_json::to_value(SingleBulbSnapshot::capture(&sim)).unwrap();
        for key in [
            "light_type",
            "view_mode",
            "flashlight_wavelength",
            "flashlight_on",
            "filter_wavelength",
            "filter_visible",
            "head_mode",
            "playing",
            "last_photon_color",
            "perceived_color",
            "photons",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }

    #[test]
    fn test_rgb_snapshot_reflects_state() {
        let mut sim = RgbSimulation::with_seed(1);
        sim.set_intensity(Channel::Red, 0.5);
        sim.step(NOMINAL_FRAME_DT);

        let snapshot = RgbSnapshot::capture(&sim);
        assert_eq!(snapshot.red.intensity, 0.5);
        assert_eq!(snapshot.perceived_color, sim.perceived_color());
        assert_eq!(
            snapshot.blue.photons.len(),
            sim.beam(Channel::Blue).photons().len()
        );
    }

    #[test]
    fn test_capture_does_not_mutate() {
        let mut sim = RgbSimulation::with_seed(1);
        sim.set_intensity(Channel::Green, 1.0);
        for _ in 0..10 {
            sim.step(NOMINAL_FRAME_DT);
        }

        let before = sim.beam(Channel::Green).photons().len();
        let _ = RgbSnapshot::capture(&sim);
        let _ = RgbSnapshot::capture(&sim);
        assert_eq!(sim.beam(Channel::Green).photons().len(), before);
    }
}
