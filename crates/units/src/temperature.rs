use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

/// Effective temperature of the Sun in kelvin (IAU 2015 nominal value)
pub const SOLAR_TEMPERATURE_K: f64 = 5772.0;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    pub fn unknown() -> Self {
        Self(f64::NAN)
    }

    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    pub fn from_celsius(value: f64) -> Self {
        Self(value + 273.15)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    pub fn to_celsius(&self) -> f64 {
        self.0 - 273.15
    }

    /// Temperature relative to the solar effective temperature
    pub fn to_solar(&self) -> f64 {
        self.0 / SOLAR_TEMPERATURE_K
    }

    pub fn is_known(&self) -> bool {
        self.0.is_finite()
    }

    /// True for a finite temperature above absolute zero
    pub fn is_positive(&self) -> bool {
        self.is_known() && self.0 > 0.0
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

impl Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Temperature {
        Temperature(self.0 / rhs)
    }
}
