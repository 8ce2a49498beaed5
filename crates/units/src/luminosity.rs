use serde::{Deserialize, Serialize};

/// Nominal solar luminosity in watts (IAU 2015 Resolution B3)
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// Bolometric luminosity in solar luminosities (L☉)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Luminosity(f64); // Base unit: L☉

impl Luminosity {
    pub fn unknown() -> Self {
        Self(f64::NAN)
    }

    pub fn from_solar(value: f64) -> Self {
        Self(value)
    }

    pub fn from_watts(value: f64) -> Self {
        Self(value / SOLAR_LUMINOSITY_W)
    }

    pub fn to_solar(&self) -> f64 {
        self.0
    }

    pub fn to_watts(&self) -> f64 {
        self.0 * SOLAR_LUMINOSITY_W
    }

    pub fn is_known(&self) -> bool {
        self.0.is_finite()
    }
}
