//! Orbit and transit geometry

use std::f64::consts::PI;

use units::{Angle, Length, Mass, Temperature, Time};

/// Semi-major axis from Kepler's third law, a³ = P² M
/// (AU, years, solar masses; the planet mass is neglected)
pub fn semi_major_axis_from_period(period: Time, star_mass: Mass) -> Length {
    if !(period.is_positive() && star_mass.is_positive()) {
        return Length::unknown();
    }
    let a_cubed = period.to_years().powi(2) * star_mass.to_solar_masses();
    Length::from_au(a_cubed.cbrt())
}

/// Orbital period from Kepler's third law, P² = a³ / M
pub fn period_from_semi_major_axis(semi_major_axis: Length, star_mass: Mass) -> Time {
    if !(semi_major_axis.is_positive() && star_mass.is_positive()) {
        return Time::unknown();
    }
    let years = (semi_major_axis.to_au().powi(3) / star_mass.to_solar_masses()).sqrt();
    Time::from_years(years)
}

/// Fractional flux drop during transit, (R_p / R_s)²
pub fn transit_depth(planet_radius: Length, star_radius: Length) -> f64 {
    if !(planet_radius.is_positive() && star_radius.is_positive()) {
        return f64::NAN;
    }
    (planet_radius / star_radius).powi(2)
}

/// Total transit duration (first to fourth contact) for a circular orbit.
///
/// T = P/π · asin( √((R_s + R_p)² − (a cos i)²) / (a sin i) )
///
/// Returns the sentinel when the geometry does not produce a transit
/// (impact parameter beyond the stellar limb).
pub fn transit_duration(
    period: Time,
    semi_major_axis: Length,
    star_radius: Length,
    planet_radius: Length,
    inclination: Angle,
) -> Time {
    let inputs_valid = period.is_positive()
        && semi_major_axis.is_positive()
        && star_radius.is_positive()
        && planet_radius.is_positive()
        && inclination.is_known();
    if !inputs_valid {
        return Time::unknown();
    }

    let a = semi_major_axis.to_au();
    let chord_sq = (star_radius + planet_radius).to_au().powi(2) - (a * inclination.cos()).powi(2);
    let projected = a * inclination.sin();
    if chord_sq <= 0.0 || projected <= 0.0 {
        return Time::unknown();
    }

    let arg = chord_sq.sqrt() / projected;
    if arg > 1.0 {
        return Time::unknown();
    }
    period * (arg.asin() / PI)
}

/// Planet equilibrium temperature from its host star.
///
/// T_p = T_s · √(R_s / 2a) · ((1 − A) / ε)^¼
///
/// `albedo` must lie in [0, 1) and `emissivity` in (0, 1].
pub fn equilibrium_temperature(
    star_temperature: Temperature,
    star_radius: Length,
    semi_major_axis: Length,
    albedo: f64,
    emissivity: f64,
) -> Temperature {
    let inputs_valid = star_temperature.is_positive()
        && star_radius.is_positive()
        && semi_major_axis.is_positive()
        && (0.0..1.0).contains(&albedo)
        && emissivity > 0.0
        && emissivity <= 1.0;
    if !inputs_valid {
        return Temperature::unknown();
    }

    let geometric = (star_radius / (semi_major_axis * 2.0)).sqrt();
    let energy_balance = ((1.0 - albedo) / emissivity).powf(0.25);
    star_temperature * (geometric * energy_balance)
}
