//! Simulation configurations
//!
//! One module per screen of the demonstrator: the single bulb with its
//! filter, and the three-bulb RGB additive mixer. Both own their photon
//! beams and derive a perceived color from the current configuration plus
//! the most recent eye arrivals.

pub mod rgb;
pub mod single_bulb;

pub use rgb::RgbSimulation;
pub use single_bulb::SingleBulbSimulation;
