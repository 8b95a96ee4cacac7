//! Model constants shared across the simulation core.
//!
//! Beam lengths differ per channel in the RGB configuration. This reflects
//! the distinct visual layout of the three bulbs, not physics, and is kept
//! as configuration rather than inferred geometry.

/// Shortest wavelength treated as visible light, in nanometers.
pub const VISIBLE_MIN_NM: f64 = 380.0;

/// Longest wavelength treated as visible light, in nanometers.
pub const VISIBLE_MAX_NM: f64 = 780.0;

/// Full width of the filter's triangular transmission window, in nanometers.
pub const GAUSSIAN_WIDTH_NM: f64 = 50.0;

/// Channel length of the single-bulb beam.
pub const SINGLE_BEAM_LENGTH: f64 = 280.0;

/// Distance of the filter plane from the bulb along the single beam.
pub const FILTER_X: f64 = 100.0;

/// Channel length of the red beam in the RGB configuration.
pub const RED_BEAM_LENGTH: f64 = 300.0;

/// Channel length of the green beam in the RGB configuration.
pub const GREEN_BEAM_LENGTH: f64 = 250.0;

/// Channel length of the blue beam in the RGB configuration.
pub const BLUE_BEAM_LENGTH: f64 = 330.0;

/// Lateral extent of a beam; new photons are jittered within this band.
pub const BEAM_HEIGHT: f64 = 50.0;

/// Nominal photon speed along the beam axis, in model units per second.
pub const PHOTON_SPEED: f64 = 240.0;

/// Maximum lateral fan-out speed given to newly created photons.
pub const FAN_OUT_SPEED: f64 = 25.0;

/// Probability that a white photon survives the filter plane.
pub const WHITE_PASS_PROBABILITY: f64 = 0.5;

/// Timestep of one nominal 60 Hz frame, in seconds.
pub const NOMINAL_FRAME_DT: f64 = 1.0 / 60.0;

/// Largest timestep ever passed to a beam; larger values are capped here so
/// photons cannot skip past arrival detection in a single hop.
pub const MAX_DT: f64 = 0.5;
