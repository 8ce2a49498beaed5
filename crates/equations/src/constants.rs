/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.674e-11;

/// Default emissivity for planet equilibrium temperatures
pub const PLANET_EMISSIVITY: f64 = 0.7;

/// Chen & Kipping (2017) radius of the Terran/Neptunian transition, in Earth radii
pub const TERRAN_NEPTUNIAN_RADIUS: f64 = 1.23;

/// Chen & Kipping (2017) radius of the Neptunian/Jovian transition, in Earth radii
pub const NEPTUNIAN_JOVIAN_RADIUS: f64 = 14.26;
