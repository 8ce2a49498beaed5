use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in grams (1.98847 × 10³³ g)
pub const SOLAR_MASS_G: f64 = 1.98847e33;

/// Mass of the Earth in grams (5.972 × 10²⁷ g)
pub const EARTH_MASS_G: f64 = 5.972e27;

/// Mass of Jupiter in grams (1.898 × 10³⁰ g)
pub const JUPITER_MASS_G: f64 = 1.898e30;

/// A physical mass quantity using f64 precision.
///
/// Solar masses are the base unit. Catalogue planets are recorded in Jupiter
/// masses and stars in solar masses.
///
/// A missing catalogue value is carried as a not-a-number mass (see
/// [`Mass::unknown`]); arithmetic on it stays not-a-number.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let jupiter = Mass::from_jupiter_masses(1.0);
/// let earths = jupiter.to_earth_masses(); // ~317.8
///
/// assert!(!Mass::unknown().is_known());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Not-a-number mass marking a value the catalogue does not provide
    pub fn unknown() -> Self {
        Self(f64::NAN)
    }

    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// One solar mass is approximately 332,946 Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_G / SOLAR_MASS_G)
    }

    /// Creates a new `Mass` from a value in Jupiter masses.
    ///
    /// Jupiter mass is approximately 317.8 Earth masses or 0.000954 solar masses.
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self(value * JUPITER_MASS_G / SOLAR_MASS_G)
    }

    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_G)
    }

    pub fn from_kg(value: f64) -> Self {
        Self::from_grams(value * 1000.0)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_G / EARTH_MASS_G
    }

    pub fn to_jupiter_masses(&self) -> f64 {
        self.0 * SOLAR_MASS_G / JUPITER_MASS_G
    }

    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_G
    }

    pub fn to_kg(&self) -> f64 {
        self.to_grams() / 1000.0
    }

    /// True when the mass is a finite number (not the missing-data sentinel)
    pub fn is_known(&self) -> bool {
        self.0.is_finite()
    }

    /// True for a finite, strictly positive mass
    pub fn is_positive(&self) -> bool {
        self.is_known() && self.0 > 0.0
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

impl std::iter::Sum for Mass {
    fn sum<I: Iterator<Item = Mass>>(iter: I) -> Mass {
        iter.fold(Mass::zero(), |acc, m| acc + m)
    }
}
