//! Light particle types.
//!
//! A photon's color tag is captured when its beam creates it and is never
//! rewritten by later configuration changes; a flashlight retuned mid-flight
//! leaves in-flight photons untouched. The filter plane is the one exception
//! for single-bulb photons, and it resolves each photon exactly once.

use nalgebra::Vector2;

use crate::config::Channel;
use crate::photometry::{wavelength_to_color, Rgba};

/// A single particle of light in the single-bulb channel.
///
/// `position.x` is the distance travelled along the beam axis and is
/// monotonically non-decreasing while the photon is alive; `position.y` is
/// the lateral lane assigned at creation.
#[derive(Debug, Clone)]
pub struct SingleBulbPhoton {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    /// Wavelength captured at creation, in nanometers.
    pub wavelength: f64,
    /// Fraction of the photon's light that will register at the eye, `[0, 1]`.
    pub intensity: f64,
    /// White photons render white and take on the filter's wavelength if
    /// they survive the filter plane.
    pub is_white: bool,
    /// Set once the filter plane has resolved this photon, so the filter is
    /// never applied twice.
    pub(crate) passed_filter: bool,
}

impl SingleBulbPhoton {
    pub(crate) fn advance(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    /// The color this photon contributes when it strikes the eye.
    pub fn color(&self) -> Rgba {
        if self.is_white {
            Rgba::WHITE.with_alpha(self.intensity)
        } else {
            wavelength_to_color(self.wavelength).with_alpha(self.intensity)
        }
    }
}

/// A single particle of light in one RGB channel.
///
/// The channel identity is fixed for the photon's lifetime; only the
/// intensity varies between photons.
#[derive(Debug, Clone)]
pub struct RgbPhoton {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub channel: Channel,
    /// Normalized source intensity captured at creation, `[0, 1]`.
    pub intensity: f64,
}

impl RgbPhoton {
    pub(crate) fn advance(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }
}
