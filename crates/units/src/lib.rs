//! Physical quantities for catalogue data
//!
//! Each typed quantity stores a single `f64` in a fixed base unit and converts
//! on the way in and out. A missing catalogue value is represented by a
//! not-a-number payload (`unknown()`), which every conversion and arithmetic
//! operation carries through unchanged.

pub mod acceleration;
pub mod angle;
pub mod density;
pub mod length;
pub mod luminosity;
pub mod mass;
pub mod quantity;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod mass_test;

pub use acceleration::Acceleration;
pub use angle::Angle;
pub use density::Density;
pub use length::Length;
pub use luminosity::Luminosity;
pub use mass::{EARTH_MASS_G, JUPITER_MASS_G, Mass, SOLAR_MASS_G};
pub use quantity::{Dimension, Quantity, Unit, UnitError};
pub use temperature::Temperature;
pub use time::Time;
