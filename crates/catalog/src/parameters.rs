//! The closed table of resolvable parameter paths
//!
//! Each kind of object has a fixed list of paths. A path names either a
//! stored attribute (`mass`) or a zero-argument derived quantity
//! (`density()`), and carries the axis label and unit plotting front ends use.
//! Planets (and any other kind) may also prefix a star path with `star.` to
//! read it from the nearest host star.

use units::{Quantity, Unit};

use crate::binary::BinaryRef;
use crate::error::ResolveError;
use crate::object::{AstroObject, Body, Kind};
use crate::planet::PlanetRef;
use crate::star::StarRef;
use crate::system::SystemRef;

/// Bumped whenever a path is added, removed or changes meaning or unit
pub const PARAMETER_TABLE_VERSION: u32 = 1;

/// Prefix redirecting the rest of a path to the nearest Star ancestor
pub const STAR_PREFIX: &str = "star.";

#[derive(Clone, Copy)]
enum Accessor {
    System(fn(SystemRef<'_>) -> f64),
    Binary(fn(BinaryRef<'_>) -> f64),
    Star(fn(StarRef<'_>) -> f64),
    Planet(fn(PlanetRef<'_>) -> f64),
}

/// One resolvable parameter of one object kind
#[derive(Clone, Copy)]
pub struct ParamSpec {
    pub path: &'static str,
    pub label: &'static str,
    /// Unit of the resolved value
    pub unit: Unit,
    accessor: Accessor,
}

impl ParamSpec {
    pub fn kind(&self) -> Kind {
        match self.accessor {
            Accessor::System(_) => Kind::System,
            Accessor::Binary(_) => Kind::Binary,
            Accessor::Star(_) => Kind::Star,
            Accessor::Planet(_) => Kind::Planet,
        }
    }

    /// Axis label such as `Planet Mass ($M_J$)`; dimensionless values get
    /// the bare label
    pub fn axis_label(&self) -> String {
        match self.unit {
            Unit::Dimensionless => self.label.to_string(),
            unit => format!("{} (${}$)", self.label, unit.latex_symbol()),
        }
    }

    /// Read the value from `object`; the sentinel when `object` is of another kind
    pub(crate) fn evaluate(&self, object: AstroObject<'_>) -> Quantity {
        let value = match (self.accessor, object.body()) {
            (Accessor::System(read), Body::System(system)) => read(system),
            (Accessor::Binary(read), Body::Binary(binary)) => read(binary),
            (Accessor::Star(read), Body::Star(star)) => read(star),
            (Accessor::Planet(read), Body::Planet(planet)) => read(planet),
            _ => f64::NAN,
        };
        Quantity::new(value, self.unit)
    }
}

impl std::fmt::Debug for ParamSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParamSpec")
            .field("kind", &self.kind())
            .field("path", &self.path)
            .field("label", &self.label)
            .field("unit", &self.unit)
            .finish()
    }
}

const fn planet(
    path: &'static str,
    label: &'static str,
    unit: Unit,
    read: fn(PlanetRef<'_>) -> f64,
) -> ParamSpec {
    ParamSpec {
        path,
        label,
        unit,
        accessor: Accessor::Planet(read),
    }
}

const fn star(
    path: &'static str,
    label: &'static str,
    unit: Unit,
    read: fn(StarRef<'_>) -> f64,
) -> ParamSpec {
    ParamSpec {
        path,
        label,
        unit,
        accessor: Accessor::Star(read),
    }
}

const fn binary(
    path: &'static str,
    label: &'static str,
    unit: Unit,
    read: fn(BinaryRef<'_>) -> f64,
) -> ParamSpec {
    ParamSpec {
        path,
        label,
        unit,
        accessor: Accessor::Binary(read),
    }
}

const fn system(
    path: &'static str,
    label: &'static str,
    unit: Unit,
    read: fn(SystemRef<'_>) -> f64,
) -> ParamSpec {
    ParamSpec {
        path,
        label,
        unit,
        accessor: Accessor::System(read),
    }
}

static PLANET_PARAMS: [ParamSpec; 20] = [
    planet("mass", "Planet Mass", Unit::JupiterMass, |p| p.mass().to_jupiter_masses()),
    planet("radius", "Planet Radius", Unit::JupiterRadius, |p| p.radius().to_jupiter_radii()),
    planet("temperature", "Planet Temperature", Unit::Kelvin, |p| p.temperature().to_kelvin()),
    planet("period", "Period", Unit::Day, |p| p.period().to_days()),
    planet("semimajoraxis", "Semi-Major Axis", Unit::AstronomicalUnit, |p| {
        p.semi_major_axis().to_au()
    }),
    planet("eccentricity", "Orbital Eccentricity", Unit::Dimensionless, |p| p.eccentricity()),
    planet("inclination", "Orbital Inclination", Unit::Degree, |p| p.inclination().to_degrees()),
    planet("age", "Planet Age", Unit::Gigayear, |p| p.age().to_gyr()),
    planet("discoveryyear", "Discovery Year", Unit::Dimensionless, |p| {
        p.discovery_year().map_or(f64::NAN, f64::from)
    }),
    planet("distance", "Distance to System", Unit::Parsec, |p| p.distance().to_parsecs()),
    planet("density()", "Planet Density", Unit::GramPerCubicCentimeter, |p| {
        p.density().to_grams_per_cm3()
    }),
    planet("surface_gravity()", "Planet Surface Gravity", Unit::MeterPerSecondSquared, |p| {
        p.surface_gravity().to_meters_per_s2()
    }),
    planet("logg()", "Planet logg", Unit::Dimensionless, |p| p.log_g()),
    planet("transit_depth()", "Transit Depth", Unit::Dimensionless, |p| p.transit_depth()),
    planet("transit_duration()", "Transit Duration", Unit::Day, |p| p.transit_duration().to_days()),
    planet("albedo()", "Planet Albedo", Unit::Dimensionless, |p| p.albedo()),
    planet("estimated_mass()", "Planet Mass Estimated From Radius", Unit::JupiterMass, |p| {
        p.estimated_mass().to_jupiter_masses()
    }),
    planet("calc_temperature()", "Mean Planet Temperature (Calculated)", Unit::Kelvin, |p| {
        p.calc_temperature().to_kelvin()
    }),
    planet("calc_sma()", "Semi-Major Axis (Calculated)", Unit::AstronomicalUnit, |p| {
        p.calc_semi_major_axis().to_au()
    }),
    planet("calc_period()", "Period (Calculated)", Unit::Day, |p| p.calc_period().to_days()),
];

static STAR_PARAMS: [ParamSpec; 18] = [
    star("mass", "Stellar Mass", Unit::SolarMass, |s| s.mass().to_solar_masses()),
    star("radius", "Stellar Radius", Unit::SolarRadius, |s| s.radius().to_solar_radii()),
    star("temperature", "Stellar Temperature", Unit::Kelvin, |s| s.temperature().to_kelvin()),
    star("age", "Stellar Age", Unit::Gigayear, |s| s.age().to_gyr()),
    star("metallicity", "Stellar Metallicity", Unit::Dimensionless, |s| s.metallicity()),
    star("distance", "Distance to System", Unit::Parsec, |s| s.distance().to_parsecs()),
    star("magB", "B Magnitude", Unit::Dimensionless, |s| s.magnitudes().b),
    star("magV", "V Magnitude", Unit::Dimensionless, |s| s.magnitudes().v),
    star("magJ", "J Magnitude", Unit::Dimensionless, |s| s.magnitudes().j),
    star("magH", "H Magnitude", Unit::Dimensionless, |s| s.magnitudes().h),
    star("magK", "K Magnitude", Unit::Dimensionless, |s| s.magnitudes().k),
    star("magI", "I Magnitude", Unit::Dimensionless, |s| s.magnitudes().i),
    star("luminosity()", "Stellar Luminosity", Unit::SolarLuminosity, |s| {
        s.luminosity().to_solar()
    }),
    star("surface_gravity()", "Stellar Surface Gravity", Unit::MeterPerSecondSquared, |s| {
        s.surface_gravity().to_meters_per_s2()
    }),
    star("logg()", "Stellar logg", Unit::Dimensionless, |s| s.log_g()),
    star("density()", "Stellar Density", Unit::GramPerCubicCentimeter, |s| {
        s.density().to_grams_per_cm3()
    }),
    star("absolute_magnitude()", "Absolute V Magnitude", Unit::Dimensionless, |s| {
        s.absolute_magnitude()
    }),
    star("estimated_temperature()", "Stellar Temperature (Spectral Type)", Unit::Kelvin, |s| {
        s.estimated_temperature().to_kelvin()
    }),
];

static BINARY_PARAMS: [ParamSpec; 7] = [
    binary("semimajoraxis", "Binary Semi-Major Axis", Unit::AstronomicalUnit, |b| {
        b.semi_major_axis().to_au()
    }),
    binary("period", "Binary Period", Unit::Day, |b| b.period().to_days()),
    binary("eccentricity", "Binary Eccentricity", Unit::Dimensionless, |b| b.eccentricity()),
    binary("inclination", "Binary Inclination", Unit::Degree, |b| b.inclination().to_degrees()),
    binary("separation", "Binary Separation", Unit::AstronomicalUnit, |b| b.separation().to_au()),
    binary("distance", "Distance to System", Unit::Parsec, |b| b.distance().to_parsecs()),
    binary("total_mass()", "Total Stellar Mass", Unit::SolarMass, |b| {
        b.total_mass().to_solar_masses()
    }),
];

static SYSTEM_PARAMS: [ParamSpec; 3] = [
    system("distance", "Distance to System", Unit::Parsec, |s| s.distance().to_parsecs()),
    system("rightascension", "Right Ascension", Unit::Degree, |s| s.right_ascension().to_degrees()),
    system("declination", "Declination", Unit::Degree, |s| s.declination().to_degrees()),
];

/// Lookup over the per-kind parameter lists
pub struct ParameterTable;

impl ParameterTable {
    pub fn specs(kind: Kind) -> &'static [ParamSpec] {
        match kind {
            Kind::System => &SYSTEM_PARAMS,
            Kind::Binary => &BINARY_PARAMS,
            Kind::Star => &STAR_PARAMS,
            Kind::Planet => &PLANET_PARAMS,
        }
    }

    /// Every direct path supported for `kind`, in table order
    pub fn paths(kind: Kind) -> impl Iterator<Item = &'static str> {
        Self::specs(kind).iter().map(|spec| spec.path)
    }

    /// The entry for a direct (un-prefixed) path
    pub fn lookup(kind: Kind, path: &str) -> Option<&'static ParamSpec> {
        Self::specs(kind).iter().find(|spec| spec.path == path)
    }

    /// The entry a path resolves through, following `star.` prefixes
    pub fn spec_for(kind: Kind, path: &str) -> Result<&'static ParamSpec, ResolveError> {
        match path.strip_prefix(STAR_PREFIX) {
            Some(rest) => Self::spec_for(Kind::Star, rest),
            None => Self::lookup(kind, path).ok_or_else(|| ResolveError::unknown_path(kind, path)),
        }
    }

    /// Axis label and unit for a path on objects of `kind`
    pub fn label_and_unit(kind: Kind, path: &str) -> Result<(&'static str, Unit), ResolveError> {
        Self::spec_for(kind, path).map(|spec| (spec.label, spec.unit))
    }
}
