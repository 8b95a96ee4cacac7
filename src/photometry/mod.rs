//! Color models and transmission math
//!
//! Pure, stateless functions only: the same inputs always produce the same
//! outputs, and every function is total over its numeric domain.

pub mod color;
pub mod transmission;
pub mod visible;

pub use color::{mix_channels, Rgba};
pub use transmission::transmission_percent;
pub use visible::{clamp_to_visible, wavelength_to_color};
