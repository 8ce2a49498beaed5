//! Bulk properties of a body from its mass and radius

use std::f64::consts::PI;

use units::{Acceleration, Density, Length, Mass};

use crate::constants::{G, NEPTUNIAN_JOVIAN_RADIUS, TERRAN_NEPTUNIAN_RADIUS};

/// Mean density ρ = M / (4/3 π R³)
///
/// Requires a positive mass and radius.
pub fn density(mass: Mass, radius: Length) -> Density {
    if !(mass.is_positive() && radius.is_positive()) {
        return Density::unknown();
    }
    let volume_m3 = (4.0 / 3.0) * PI * radius.to_m().powi(3);
    Density::from_kg_per_m3(mass.to_kg() / volume_m3)
}

/// Surface gravity g = G M / R²
pub fn surface_gravity(mass: Mass, radius: Length) -> Acceleration {
    if !(mass.is_positive() && radius.is_positive()) {
        return Acceleration::unknown();
    }
    Acceleration::from_meters_per_s2(G * mass.to_kg() / radius.to_m().powi(2))
}

/// Base-10 logarithm of the surface gravity in cgs units (the usual "log g")
pub fn log_g(gravity: Acceleration) -> f64 {
    if !gravity.is_positive() {
        return f64::NAN;
    }
    gravity.to_cm_per_s2().log10()
}

/// Estimate a planet mass from its radius.
///
/// Inverts the Chen & Kipping (2017) probabilistic mass-radius relation:
///
/// | Regime     | Radius          | Relation            |
/// |------------|-----------------|---------------------|
/// | Terran     | < 1.23 R⊕       | R = 1.008 M^0.279   |
/// | Neptunian  | 1.23 - 14.26 R⊕ | R = 0.808 M^0.589   |
/// | Jovian     | > 14.26 R⊕      | radius nearly flat  |
///
/// Jovian radii are degenerate in mass (a 1 M_J and a 10 M_J planet have
/// almost the same radius), so no estimate is made there.
pub fn mass_from_radius(radius: Length) -> Mass {
    if !radius.is_positive() {
        return Mass::unknown();
    }
    let r = radius.to_earth_radii();
    let earth_masses = match r {
        r if r < TERRAN_NEPTUNIAN_RADIUS => (r / 1.008).powf(1.0 / 0.279),
        r if r < NEPTUNIAN_JOVIAN_RADIUS => (r / 0.808).powf(1.0 / 0.589),
        _ => return Mass::unknown(),
    };
    Mass::from_earth_masses(earth_masses)
}
