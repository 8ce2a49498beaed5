use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

pub(crate) const DAYS_PER_YEAR: f64 = 365.25;
pub(crate) const HOURS_PER_YEAR: f64 = 8_766.0; // 365.25 * 24
pub const SECONDS_PER_YEAR: f64 = 31_557_600.0; // 365.25 days per year

const GYR_TO_YEARS: f64 = 1.0e9;

/// A duration in Julian years.
///
/// Orbital periods arrive in days and ages in Gyr; both convert through the
/// year base unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn unknown() -> Self {
        Self(f64::NAN)
    }

    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    pub fn from_gyr(value: f64) -> Self {
        Self(value * GYR_TO_YEARS)
    }

    pub fn from_days(value: f64) -> Self {
        Self(value / DAYS_PER_YEAR)
    }

    pub fn from_hours(value: f64) -> Self {
        Self(value / HOURS_PER_YEAR)
    }

    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_YEAR)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_gyr(&self) -> f64 {
        self.0 / GYR_TO_YEARS
    }

    pub fn to_days(&self) -> f64 {
        self.0 * DAYS_PER_YEAR
    }

    pub fn to_hours(&self) -> f64 {
        self.0 * HOURS_PER_YEAR
    }

    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR
    }

    pub fn is_known(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_positive(&self) -> bool {
        self.is_known() && self.0 > 0.0
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Div<f64> for Time {
    type Output = Time;

    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}
