//! Stellar luminosity and photometric distance relations

use units::{Length, Luminosity, Temperature};

/// Luminosity from the Stefan-Boltzmann law, in solar units:
/// L / L☉ = (R / R☉)² (T / T☉)⁴
pub fn stellar_luminosity(radius: Length, temperature: Temperature) -> Luminosity {
    if !(radius.is_positive() && temperature.is_positive()) {
        return Luminosity::unknown();
    }
    Luminosity::from_solar(radius.to_solar_radii().powi(2) * temperature.to_solar().powi(4))
}

/// Absolute magnitude from apparent magnitude and distance:
/// M = m - 5 log₁₀(d / 10 pc)
pub fn absolute_magnitude(apparent: f64, distance: Length) -> f64 {
    if !(apparent.is_finite() && distance.is_positive()) {
        return f64::NAN;
    }
    apparent - 5.0 * (distance.to_parsecs() / 10.0).log10()
}

/// Distance implied by a distance modulus: d = 10^((m - M + 5) / 5) pc
pub fn distance_from_magnitudes(apparent: f64, absolute: f64) -> Length {
    if !(apparent.is_finite() && absolute.is_finite()) {
        return Length::unknown();
    }
    Length::from_parsecs(10f64.powf((apparent - absolute + 5.0) / 5.0))
}
