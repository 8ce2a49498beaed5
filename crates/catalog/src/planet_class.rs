//! Planet classification by mass regime and by temperature

use serde::{Deserialize, Serialize};
use units::{Mass, Temperature};

/// Classification of planet by physical mass regime
///
/// Based on Wolfgang, Rogers, & Ford (2016) with refined boundaries for envelope physics.
///
/// | Class        | Mass Range        | Physical Regime           |
/// |--------------|-------------------|---------------------------|
/// | Rocky        | < 2 M⊕            | Self-compression          |
/// | Transitional | 2-5 M⊕            | Thin envelope regime      |
/// | Volatile     | 5-160 M⊕          | Thick envelope regime     |
/// | Giant        | > 160 M⊕ (~0.5 Mj)| Electron degeneracy       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetClass {
    /// Rocky planets (< 2 M⊕), cannot retain H/He envelopes
    Rocky,

    /// Super-Earths and mini-Neptunes (2-5 M⊕) with thin envelopes
    Transitional,

    /// Sub-Neptunes and ice giants (5-160 M⊕)
    Volatile,

    /// Jupiter and Saturn analogues (> 160 M⊕)
    Giant,
}

impl PlanetClass {
    /// Mass threshold between Rocky and Transitional regimes (2 Earth masses)
    pub const ROCKY_TRANSITIONAL_THRESHOLD: f64 = 2.0;

    /// Mass threshold between Transitional and Volatile regimes (5 Earth masses)
    pub const TRANSITIONAL_VOLATILE_THRESHOLD: f64 = 5.0;

    /// Mass threshold between Volatile and Giant regimes (~0.5 Jupiter masses)
    pub const VOLATILE_GIANT_THRESHOLD: f64 = 160.0;

    /// Classify a planet by its mass in Earth masses
    pub fn from_earth_masses(mass_earth: f64) -> Self {
        match mass_earth {
            m if m < Self::ROCKY_TRANSITIONAL_THRESHOLD => Self::Rocky,
            m if m < Self::TRANSITIONAL_VOLATILE_THRESHOLD => Self::Transitional,
            m if m < Self::VOLATILE_GIANT_THRESHOLD => Self::Volatile,
            _ => Self::Giant,
        }
    }

    /// `None` for an unknown or non-positive mass
    pub fn from_mass(mass: Mass) -> Option<Self> {
        mass.is_positive()
            .then(|| Self::from_earth_masses(mass.to_earth_masses()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rocky => "Rocky",
            Self::Transitional => "Transitional",
            Self::Volatile => "Volatile",
            Self::Giant => "Giant",
        }
    }

    /// Typical Bond albedo of the class (Earth 0.31, Neptune 0.29, Jupiter 0.34)
    pub fn bond_albedo(&self) -> f64 {
        match self {
            Self::Rocky | Self::Transitional => 0.3,
            Self::Volatile => 0.29,
            Self::Giant => 0.343,
        }
    }

    /// Returns the mass range for this class in Earth masses
    pub fn mass_range(&self) -> (f64, f64) {
        match self {
            Self::Rocky => (0.0, Self::ROCKY_TRANSITIONAL_THRESHOLD),
            Self::Transitional => (
                Self::ROCKY_TRANSITIONAL_THRESHOLD,
                Self::TRANSITIONAL_VOLATILE_THRESHOLD,
            ),
            Self::Volatile => (
                Self::TRANSITIONAL_VOLATILE_THRESHOLD,
                Self::VOLATILE_GIANT_THRESHOLD,
            ),
            Self::Giant => (Self::VOLATILE_GIANT_THRESHOLD, f64::INFINITY),
        }
    }
}

impl std::fmt::Display for PlanetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classification of planet by equilibrium or measured temperature
///
/// | Class    | Temperature   |
/// |----------|---------------|
/// | Cold     | < 250 K       |
/// | Warm     | 250-450 K     |
/// | Hot      | 450-1000 K    |
/// | VeryHot  | ≥ 1000 K      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureClass {
    Cold,
    Warm,
    Hot,
    VeryHot,
}

impl TemperatureClass {
    pub const COLD_WARM_THRESHOLD: f64 = 250.0;
    pub const WARM_HOT_THRESHOLD: f64 = 450.0;
    pub const HOT_VERY_HOT_THRESHOLD: f64 = 1000.0;

    pub fn from_kelvin(kelvin: f64) -> Self {
        match kelvin {
            t if t < Self::COLD_WARM_THRESHOLD => Self::Cold,
            t if t < Self::WARM_HOT_THRESHOLD => Self::Warm,
            t if t < Self::HOT_VERY_HOT_THRESHOLD => Self::Hot,
            _ => Self::VeryHot,
        }
    }

    pub fn from_temperature(temperature: Temperature) -> Option<Self> {
        temperature
            .is_positive()
            .then(|| Self::from_kelvin(temperature.to_kelvin()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Cold => "Cold",
            Self::Warm => "Warm",
            Self::Hot => "Hot",
            Self::VeryHot => "Very Hot",
        }
    }
}

impl std::fmt::Display for TemperatureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
