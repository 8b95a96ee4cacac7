//! Triangular transmission window for the wavelength-selective filter.
//!
//! The filter passes a fraction of the incident light that falls off
//! linearly with the distance between the incident wavelength and the
//! filter's center wavelength. This is a triangular approximation of a
//! Gaussian passband: cheap to evaluate and close enough for a perceptual
//! demonstration.

/// Fraction of incident light passed by a filter.
///
/// Returns `1 - |filter - incident| / (width / 2)` when the wavelength
/// difference is inside the half-width, and 0 otherwise. A difference of
/// exactly half the width yields 0.
///
/// # Arguments
/// * `incident_nm` - Wavelength of the incident light, in nanometers
/// * `filter_nm` - Center wavelength of the filter, in nanometers
/// * `width_nm` - Full width of the transmission window, in nanometers
///
/// # Returns
/// Transmission fraction in `[0.0, 1.0]`
pub fn transmission_percent(incident_nm: f64, filter_nm: f64, width_nm: f64) -> f64 {
    let half_width = width_nm / 2.0;
    if !(half_width > 0.0) {
        return 0.0;
    }

    let delta = (filter_nm - incident_nm).abs();
    if delta >= half_width {
        0.0
    } else {
        1.0 - delta / half_width
    }
}
