//! Astrophysical formulas over typed quantities
//!
//! Every formula takes its inputs as unit-bearing values and returns a
//! unit-bearing value. None of them fail: when an input is missing (the
//! not-a-number sentinel) or outside the formula's physical domain, the result
//! is the sentinel in the formula's output unit. Derived inputs are obtained by
//! calling the other formulas directly.

pub mod bulk;
pub mod constants;
pub mod orbital;
pub mod stellar;

#[cfg(test)]
mod bulk_test;
#[cfg(test)]
mod stellar_test;

pub use bulk::{density, log_g, mass_from_radius, surface_gravity};
pub use orbital::{
    equilibrium_temperature, period_from_semi_major_axis, semi_major_axis_from_period,
    transit_depth, transit_duration,
};
pub use stellar::{absolute_magnitude, distance_from_magnitudes, stellar_luminosity};
