use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const AU_TO_CM: f64 = 1.496e13;
pub const AU_TO_M: f64 = 1.496e11;
pub const AU_TO_KM: f64 = 1.496e8;
pub const AU_TO_EARTH_RADIUS: f64 = 23481.4;

pub const JUPITER_TO_EARTH_RADII: f64 = 11.209;
pub const AU_TO_JUPITER_RADIUS: f64 = AU_TO_EARTH_RADIUS / JUPITER_TO_EARTH_RADII;

pub const SOLAR_RADIUS_AU: f64 = 1.0 / 215.032;
pub const AU_TO_SOLAR_RADIUS: f64 = 1.0 / SOLAR_RADIUS_AU;

/// Astronomical units per parsec (648000 / π)
pub const PARSEC_TO_AU: f64 = 206_264.806;

/// A length or distance, stored in astronomical units.
///
/// Covers everything from planet radii (Jupiter or Earth radii) through
/// orbital separations (AU) to system distances (parsecs).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Not-a-number length marking a value the catalogue does not provide
    pub fn unknown() -> Self {
        Self(f64::NAN)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_radii(value: f64) -> Self {
        Self(value / AU_TO_EARTH_RADIUS)
    }

    pub fn from_jupiter_radii(value: f64) -> Self {
        Self(value / AU_TO_JUPITER_RADIUS)
    }

    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_AU)
    }

    pub fn from_parsecs(value: f64) -> Self {
        Self(value * PARSEC_TO_AU)
    }

    pub fn from_meters(value: f64) -> Self {
        Self(value / AU_TO_M)
    }

    pub fn from_cm(value: f64) -> Self {
        Self(value / AU_TO_CM)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 * AU_TO_EARTH_RADIUS
    }

    pub fn to_jupiter_radii(&self) -> f64 {
        self.0 * AU_TO_JUPITER_RADIUS
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 * AU_TO_SOLAR_RADIUS
    }

    pub fn to_parsecs(&self) -> f64 {
        self.0 / PARSEC_TO_AU
    }

    pub fn to_km(&self) -> f64 {
        self.0 * AU_TO_KM
    }

    pub fn to_m(&self) -> f64 {
        self.0 * AU_TO_M
    }

    pub fn to_cm(&self) -> f64 {
        self.0 * AU_TO_CM
    }

    pub fn is_known(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_positive(&self) -> bool {
        self.is_known() && self.0 > 0.0
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
