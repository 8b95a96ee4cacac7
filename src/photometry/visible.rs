//! Wavelength to perceived color mapping for the visible spectrum.
//!
//! Maps a wavelength in nanometers to the RGB color a human observer would
//! perceive, using a piecewise-linear spectral approximation: six linear
//! segments across the visible band, an intensity roll-off toward both band
//! edges, and a gamma correction. Wavelengths outside the visible range map
//! to [`Rgba::TRANSPARENT`], so the mapping is total with no error path.

use crate::constants::{VISIBLE_MAX_NM, VISIBLE_MIN_NM};
use crate::photometry::Rgba;

/// Gamma applied to the linear channel estimates before display.
const GAMMA: f64 = 0.8;

/// Clamp a wavelength to the nearest boundary of the visible range.
///
/// Used at configuration boundaries so out-of-range slider or CLI input is
/// corrected rather than rejected.
pub fn clamp_to_visible(wavelength_nm: f64) -> f64 {
    if wavelength_nm.is_nan() {
        return VISIBLE_MIN_NM;
    }
    wavelength_nm.clamp(VISIBLE_MIN_NM, VISIBLE_MAX_NM)
}

/// Map a wavelength in nanometers to a perceived RGB color.
///
/// # Arguments
/// * `wavelength_nm` - Wavelength in nanometers
///
/// # Returns
/// An opaque color for wavelengths within [380, 780] nm, and
/// [`Rgba::TRANSPARENT`] for anything outside the visible range (including
/// non-finite input).
pub fn wavelength_to_color(wavelength_nm: f64) -> Rgba {
    if !wavelength_nm.is_finite()
        || wavelength_nm < VISIBLE_MIN_NM
        || wavelength_nm > VISIBLE_MAX_NM
    {
        return Rgba::TRANSPARENT;
    }

    let w = wavelength_nm;

    // Piecewise-linear channel estimates across the visible band
    let (r, g, b) = if w < 440.0 {
        ((440.0 - w) / (440.0 - 380.0), 0.0, 1.0)
    } else if w < 490.0 {
        (0.0, (w - 440.0) / (490.0 - 440.0), 1.0)
    } else if w < 510.0 {
        (0.0, 1.0, (510.0 - w) / (510.0 - 490.0))
    } else if w < 580.0 {
        ((w - 510.0) / (580.0 - 510.0), 1.0, 0.0)
    } else if w < 645.0 {
        (1.0, (645.0 - w) / (645.0 - 580.0), 0.0)
    } else {
        (1.0, 0.0, 0.0)
    };

    // Perceived intensity rolls off near both edges of the visible band
    let factor = if w < 420.0 {
        0.3 + 0.7 * (w - VISIBLE_MIN_NM) / (420.0 - VISIBLE_MIN_NM)
    } else if w > 700.0 {
        0.3 + 0.7 * (VISIBLE_MAX_NM - w) / (VISIBLE_MAX_NM - 700.0)
    } else {
        1.0
    };

    let adjust = |channel: f64| {
        if channel <= 0.0 {
            0.0
        } else {
            (channel * factor).powf(GAMMA)
        }
    };

    Rgba::new(adjust(r), adjust(g), adjust(b), 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_total_over_wide_range() {
        // Every wavelength from 0 to 2000 nm must yield a valid color
        for nm in 0..=2000 {
            let color = wavelength_to_color(nm as f64);
            for component in [color.r, color.g, color.b, color.a] {
                assert!((0.0..=1.0).contains(&component), "bad color at {} nm", nm);
            }
        }
    }

    #[test]
    fn test_invisible_sentinel() {
        assert_eq!(wavelength_to_color(379.9), Rgba::TRANSPARENT);
        assert_eq!(wavelength_to_color(780.1), Rgba::TRANSPARENT);
        assert_eq!(wavelength_to_color(0.0), Rgba::TRANSPARENT);
        assert_eq!(wavelength_to_color(2000.0), Rgba::TRANSPARENT);
        assert_eq!(wavelength_to_color(f64::NAN), Rgba::TRANSPARENT);
        assert_eq!(wavelength_to_color(f64::INFINITY), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_deterministic() {
        for nm in [380.0, 465.0, 570.0, 652.5, 780.0] {
            assert_eq!(wavelength_to_color(nm), wavelength_to_color(nm));
        }
    }

    #[test]
    fn test_spectral_anchors() {
        // Violet end: blue dominant with some red
        let violet = wavelength_to_color(400.0);
        assert!(violet.b > violet.r);
        assert!(violet.r > 0.0);
        assert_eq!(violet.g, 0.0);

        // Yellow: red and green, no blue
        let yellow = wavelength_to_color(570.0);
        assert!(yellow.r > 0.0);
        assert!(yellow.g > 0.0);
        assert_eq!(yellow.b, 0.0);

        // Deep red: red only
        let red = wavelength_to_color(660.0);
        assert_eq!(red.g, 0.0);
        assert_eq!(red.b, 0.0);
        assert!(red.r > 0.9);

        // Pure green region
        let green = wavelength_to_color(510.0);
        assert_relative_eq!(green.g, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_edge_rolloff() {
        // Band edges are dimmer than the band center
        let edge = wavelength_to_color(780.0);
        let center = wavelength_to_color(650.0);
        assert!(edge.r < center.r);
    }

    #[test]
    fn test_visible_colors_are_opaque() {
        for nm in 380..=780 {
            assert_eq!(wavelength_to_color(nm as f64).a, 1.0);
        }
    }

    #[test]
    fn test_clamp_to_visible() {
        assert_eq!(clamp_to_visible(100.0), 380.0);
        assert_eq!(clamp_to_visible(900.0), 780.0);
        assert_eq!(clamp_to_visible(550.0), 550.0);
        assert_eq!(clamp_to_visible(f64::NAN), 380.0);
    }
}
