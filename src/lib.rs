//! Photon and beam simulation core for a color vision demonstrator
//!
//! This crate provides the model layer behind an interactive color vision
//! exhibit: discrete photon populations travelling along fixed channels, a
//! wavelength-to-color model for the visible spectrum, a triangular
//! transmission filter, and the rules that combine flashlight state, filter
//! state, and photon arrivals into a single perceived color per frame.
//!
//! Two independently driven configurations are modeled:
//!
//! - **Single bulb**: one flashlight (white or monochromatic) shining through
//!   an optional wavelength-selective filter into an observer's eye.
//! - **RGB bulbs**: three independent red/green/blue beams whose perceived
//!   color is the additive mix of the per-channel intensities.
//!
//! Rendering, widgets, and screen composition are external collaborators;
//! they read derived state (photon positions, perceived color) through the
//! simulation accessors or the snapshot types in [`introspect`].

pub mod beam;
pub mod clock;
pub mod config;
pub mod constants;
pub mod introspect;
pub mod photometry;
pub mod photon;
pub mod shared_args;
pub mod sims;

// Re-exports for easier access
pub use beam::{RgbPhotonBeam, SingleBulbPhotonBeam, SingleBulbSource};
pub use clock::{clamp_dt, SimulationClock, Steppable};
pub use config::{Channel, ConfigError, HeadMode, LightType, ViewMode};
pub use photometry::{mix_channels, transmission_percent, wavelength_to_color, Rgba};
pub use photon::{RgbPhoton, SingleBulbPhoton};
pub use sims::{RgbSimulation, SingleBulbSimulation};
