//! RGBA color values and additive channel mixing.
//!
//! Colors use normalized `f64` components so they compose directly with the
//! intensity and transmission fractions produced elsewhere in the crate. The
//! alpha component doubles as perceived brightness: a filtered flashlight
//! color with 40% transmission is the full-saturation spectral color at
//! alpha 0.4.

use serde::{Deserialize, Serialize};

/// A color with red, green, blue, and alpha components in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque black, the "no light" color.
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white, the unfiltered white-light color.
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Fully transparent black: the sentinel for invisible wavelengths and
    /// for an eye that no photon has reached yet.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create a color, clamping every component into `[0.0, 1.0]`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// The same color with a replacement alpha, clamped into `[0.0, 1.0]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Rgba {
            a: clamp_unit(alpha),
            ..self
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Additively mix three normalized channel intensities into one opaque color.
///
/// Each channel is clamped into `[0.0, 1.0]` after composition, so saturated
/// inputs stay within gamut.
///
/// # Arguments
/// * `red`, `green`, `blue` - Normalized channel intensities
///
/// # Returns
/// The opaque color whose components are the clamped channel intensities
pub fn mix_channels(red: f64, green: f64, blue: f64) -> Rgba {
    Rgba::new(red, green, blue, 1.0)
}
