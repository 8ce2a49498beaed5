use serde::{Deserialize, Serialize};

const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// A plane angle stored in degrees.
///
/// Used for orbital inclinations, sky coordinates and angular separations.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Angle(f64); // Base unit: degrees

impl Angle {
    pub fn unknown() -> Self {
        Self(f64::NAN)
    }

    pub fn from_degrees(value: f64) -> Self {
        Self(value)
    }

    pub fn from_radians(value: f64) -> Self {
        Self(value.to_degrees())
    }

    pub fn from_arcseconds(value: f64) -> Self {
        Self(value / ARCSEC_PER_DEGREE)
    }

    /// Right ascension in sexagesimal hours (15° per hour)
    pub fn from_hours(value: f64) -> Self {
        Self(value * 15.0)
    }

    pub fn to_degrees(&self) -> f64 {
        self.0
    }

    pub fn to_radians(&self) -> f64 {
        self.0.to_radians()
    }

    pub fn to_arcseconds(&self) -> f64 {
        self.0 * ARCSEC_PER_DEGREE
    }

    pub fn sin(&self) -> f64 {
        self.to_radians().sin()
    }

    pub fn cos(&self) -> f64 {
        self.to_radians().cos()
    }

    pub fn is_known(&self) -> bool {
        self.0.is_finite()
    }
}
