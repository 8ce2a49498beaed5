use serde::{Deserialize, Serialize};

/// Surface gravity of the Earth in m/s²
pub const EARTH_GRAVITY_M_S2: f64 = 9.80665;

/// Acceleration, stored in m/s² (used for surface gravity)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Acceleration(f64); // Base unit: m/s²

impl Acceleration {
    pub fn unknown() -> Self {
        Self(f64::NAN)
    }

    pub fn from_meters_per_s2(value: f64) -> Self {
        Self(value)
    }

    pub fn from_cm_per_s2(value: f64) -> Self {
        Self(value / 100.0)
    }

    pub fn to_meters_per_s2(&self) -> f64 {
        self.0
    }

    pub fn to_cm_per_s2(&self) -> f64 {
        self.0 * 100.0
    }

    /// Acceleration in multiples of Earth's surface gravity
    pub fn to_earth_gravities(&self) -> f64 {
        self.0 / EARTH_GRAVITY_M_S2
    }

    pub fn is_known(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_positive(&self) -> bool {
        self.is_known() && self.0 > 0.0
    }
}
