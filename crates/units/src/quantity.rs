//! Unit-tagged scalar values
//!
//! The typed quantities in this crate ([`Mass`](crate::Mass),
//! [`Length`](crate::Length), ...) are what the formulas work with. When a
//! value has to travel through a string-keyed interface, such as the catalogue
//! path resolver, it is flattened into a [`Quantity`]: a plain number plus the
//! [`Unit`] it is expressed in. Quantities can be rescaled to any other unit of
//! the same [`Dimension`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::length::{
    AU_TO_EARTH_RADIUS, AU_TO_JUPITER_RADIUS, AU_TO_M, PARSEC_TO_AU, SOLAR_RADIUS_AU,
};
use crate::luminosity::SOLAR_LUMINOSITY_W;
use crate::mass::{EARTH_MASS_G, JUPITER_MASS_G, SOLAR_MASS_G};
use crate::time::SECONDS_PER_YEAR;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("cannot convert {from} ({from_dimension:?}) to {to} ({to_dimension:?})")]
    Incompatible {
        from: Unit,
        from_dimension: Dimension,
        to: Unit,
        to_dimension: Dimension,
    },

    #[error("unknown unit symbol '{0}'")]
    UnknownSymbol(String),
}

/// Physical dimension of a unit; only units of equal dimension convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Mass,
    Length,
    Time,
    Temperature,
    Angle,
    Density,
    Acceleration,
    Luminosity,
    Dimensionless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    SolarMass,
    JupiterMass,
    EarthMass,
    Kilogram,

    AstronomicalUnit,
    Parsec,
    SolarRadius,
    JupiterRadius,
    EarthRadius,
    Kilometer,
    Meter,

    Day,
    Year,
    Gigayear,

    Kelvin,

    Degree,
    Radian,
    Arcsecond,

    GramPerCubicCentimeter,
    KilogramPerCubicMeter,

    MeterPerSecondSquared,
    CentimeterPerSecondSquared,

    SolarLuminosity,
    Watt,

    /// Pure numbers: ratios, magnitudes, dex, counts
    Dimensionless,
}

impl Unit {
    pub const ALL: [Unit; 25] = [
        Unit::SolarMass,
        Unit::JupiterMass,
        Unit::EarthMass,
        Unit::Kilogram,
        Unit::AstronomicalUnit,
        Unit::Parsec,
        Unit::SolarRadius,
        Unit::JupiterRadius,
        Unit::EarthRadius,
        Unit::Kilometer,
        Unit::Meter,
        Unit::Day,
        Unit::Year,
        Unit::Gigayear,
        Unit::Kelvin,
        Unit::Degree,
        Unit::Radian,
        Unit::Arcsecond,
        Unit::GramPerCubicCentimeter,
        Unit::KilogramPerCubicMeter,
        Unit::MeterPerSecondSquared,
        Unit::CentimeterPerSecondSquared,
        Unit::SolarLuminosity,
        Unit::Watt,
        Unit::Dimensionless,
    ];

    pub fn dimension(&self) -> Dimension {
        match self {
            Self::SolarMass | Self::JupiterMass | Self::EarthMass | Self::Kilogram => {
                Dimension::Mass
            }
            Self::AstronomicalUnit
            | Self::Parsec
            | Self::SolarRadius
            | Self::JupiterRadius
            | Self::EarthRadius
            | Self::Kilometer
            | Self::Meter => Dimension::Length,
            Self::Day | Self::Year | Self::Gigayear => Dimension::Time,
            Self::Kelvin => Dimension::Temperature,
            Self::Degree | Self::Radian | Self::Arcsecond => Dimension::Angle,
            Self::GramPerCubicCentimeter | Self::KilogramPerCubicMeter => Dimension::Density,
            Self::MeterPerSecondSquared | Self::CentimeterPerSecondSquared => {
                Dimension::Acceleration
            }
            Self::SolarLuminosity | Self::Watt => Dimension::Luminosity,
            Self::Dimensionless => Dimension::Dimensionless,
        }
    }

    /// Multiplier taking a value in this unit to the dimension's reference unit
    ///
    /// Reference units: kg, m, s, K, degree, g/cm³, m/s², W, 1.
    fn to_reference(self) -> f64 {
        match self {
            Self::SolarMass => SOLAR_MASS_G / 1000.0,
            Self::JupiterMass => JUPITER_MASS_G / 1000.0,
            Self::EarthMass => EARTH_MASS_G / 1000.0,
            Self::Kilogram => 1.0,

            Self::AstronomicalUnit => AU_TO_M,
            Self::Parsec => PARSEC_TO_AU * AU_TO_M,
            Self::SolarRadius => SOLAR_RADIUS_AU * AU_TO_M,
            Self::JupiterRadius => AU_TO_M / AU_TO_JUPITER_RADIUS,
            Self::EarthRadius => AU_TO_M / AU_TO_EARTH_RADIUS,
            Self::Kilometer => 1000.0,
            Self::Meter => 1.0,

            Self::Day => SECONDS_PER_DAY,
            Self::Year => SECONDS_PER_YEAR,
            Self::Gigayear => SECONDS_PER_YEAR * 1.0e9,

            Self::Kelvin => 1.0,

            Self::Degree => 1.0,
            Self::Radian => 180.0 / std::f64::consts::PI,
            Self::Arcsecond => 1.0 / 3600.0,

            Self::GramPerCubicCentimeter => 1.0,
            Self::KilogramPerCubicMeter => 1.0e-3,

            Self::MeterPerSecondSquared => 1.0,
            Self::CentimeterPerSecondSquared => 0.01,

            Self::SolarLuminosity => SOLAR_LUMINOSITY_W,
            Self::Watt => 1.0,

            Self::Dimensionless => 1.0,
        }
    }

    /// Short plain-text symbol, e.g. `M_J` or `g/cm^3`
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::SolarMass => "M_sun",
            Self::JupiterMass => "M_J",
            Self::EarthMass => "M_E",
            Self::Kilogram => "kg",
            Self::AstronomicalUnit => "AU",
            Self::Parsec => "pc",
            Self::SolarRadius => "R_sun",
            Self::JupiterRadius => "R_J",
            Self::EarthRadius => "R_E",
            Self::Kilometer => "km",
            Self::Meter => "m",
            Self::Day => "d",
            Self::Year => "yr",
            Self::Gigayear => "Gyr",
            Self::Kelvin => "K",
            Self::Degree => "deg",
            Self::Radian => "rad",
            Self::Arcsecond => "arcsec",
            Self::GramPerCubicCentimeter => "g/cm^3",
            Self::KilogramPerCubicMeter => "kg/m^3",
            Self::MeterPerSecondSquared => "m/s^2",
            Self::CentimeterPerSecondSquared => "cm/s^2",
            Self::SolarLuminosity => "L_sun",
            Self::Watt => "W",
            Self::Dimensionless => "",
        }
    }

    /// LaTeX form for axis labels, falling back to the plain symbol
    pub fn latex_symbol(&self) -> &'static str {
        match self {
            Self::SolarMass => r"M_{\odot}",
            Self::JupiterMass => "M_J",
            Self::EarthMass => r"M_{\oplus}",
            Self::SolarRadius => r"R_{\odot}",
            Self::JupiterRadius => "R_J",
            Self::EarthRadius => r"R_{\oplus}",
            Self::GramPerCubicCentimeter => r"g\,cm^{-3}",
            Self::MeterPerSecondSquared => r"m\,s^{-2}",
            Self::SolarLuminosity => r"L_{\odot}",
            other => other.symbol(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "1" {
            return Ok(Unit::Dimensionless);
        }
        Unit::ALL
            .into_iter()
            .find(|u| !u.symbol().is_empty() && u.symbol().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnitError::UnknownSymbol(s.to_string()))
    }
}

/// A scalar value tagged with its unit.
///
/// A not-a-number `value` is the "data unavailable" sentinel: the quantity
/// is meaningful in principle but could not be computed from the data at hand.
///
/// ```rust
/// use units::{Quantity, Unit};
///
/// let a = Quantity::new(1.0, Unit::AstronomicalUnit);
/// let km = a.rescale(Unit::Kilometer).unwrap();
/// assert!((km.value - 1.496e8).abs() < 1.0);
///
/// assert!(!Quantity::unavailable(Unit::Kelvin).is_available());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::new(value, Unit::Dimensionless)
    }

    /// The not-a-number sentinel in the given unit
    pub fn unavailable(unit: Unit) -> Self {
        Self::new(f64::NAN, unit)
    }

    pub fn is_available(&self) -> bool {
        !self.value.is_nan()
    }

    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// Convert to another unit of the same dimension.
    ///
    /// The sentinel stays the sentinel, expressed in the new unit.
    pub fn rescale(&self, unit: Unit) -> Result<Quantity, UnitError> {
        if self.unit.dimension() != unit.dimension() {
            return Err(UnitError::Incompatible {
                from: self.unit,
                from_dimension: self.unit.dimension(),
                to: unit,
                to_dimension: unit.dimension(),
            });
        }
        if self.unit == unit {
            return Ok(*self);
        }
        let value = self.value * self.unit.to_reference() / unit.to_reference();
        Ok(Quantity::new(value, unit))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (f.precision(), self.unit) {
            (Some(p), Unit::Dimensionless) => write!(f, "{:.*}", p, self.value),
            (Some(p), unit) => write!(f, "{:.*} {}", p, self.value, unit),
            (None, Unit::Dimensionless) => write!(f, "{}", self.value),
            (None, unit) => write!(f, "{} {}", self.value, unit),
        }
    }
}
