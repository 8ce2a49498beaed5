use equations::constants::PLANET_EMISSIVITY;
use units::{Acceleration, Angle, Density, Length, Mass, Temperature, Time, Unit};

use crate::fields;
use crate::object::body_ref;
use crate::planet_class::{PlanetClass, TemperatureClass};
use crate::record::Field;
use crate::star::StarRef;

/// Measured attributes of a planet
#[derive(Debug, Clone)]
pub struct PlanetData {
    pub mass: Mass,
    pub radius: Length,
    pub temperature: Temperature,
    pub period: Time,
    pub semi_major_axis: Length,
    pub eccentricity: f64,
    pub inclination: Angle,
    pub age: Time,
    pub discovery_method: Option<String>,
    pub discovery_year: Option<i32>,
    pub is_transiting: bool,
    pub last_update: Option<String>,
}

impl Default for PlanetData {
    fn default() -> Self {
        Self {
            mass: Mass::unknown(),
            radius: Length::unknown(),
            temperature: Temperature::unknown(),
            period: Time::unknown(),
            semi_major_axis: Length::unknown(),
            eccentricity: f64::NAN,
            inclination: Angle::unknown(),
            age: Time::unknown(),
            discovery_method: None,
            discovery_year: None,
            is_transiting: false,
            last_update: None,
        }
    }
}

impl PlanetData {
    pub(crate) fn from_fields(fields: &[Field]) -> Self {
        let mut data = Self::default();
        for field in fields {
            let measured = |unit| fields::measured(field, unit);
            match field.tag.as_str() {
                "mass" => data.mass = Mass::from_jupiter_masses(measured(Unit::JupiterMass)),
                "radius" => data.radius = Length::from_jupiter_radii(measured(Unit::JupiterRadius)),
                "temperature" => {
                    data.temperature = Temperature::from_kelvin(measured(Unit::Kelvin))
                }
                "period" => data.period = Time::from_days(measured(Unit::Day)),
                "semimajoraxis" => {
                    data.semi_major_axis = Length::from_au(measured(Unit::AstronomicalUnit))
                }
                "eccentricity" => data.eccentricity = fields::number(field),
                "inclination" => data.inclination = Angle::from_degrees(measured(Unit::Degree)),
                "age" => data.age = Time::from_gyr(measured(Unit::Gigayear)),
                "discoverymethod" => data.discovery_method = fields::text(field),
                "discoveryyear" => data.discovery_year = fields::year(field),
                "istransiting" => data.is_transiting = fields::flag(field),
                "lastupdate" => data.last_update = fields::text(field),
                "name" => {}
                other => log::trace!("ignoring planet field <{other}>"),
            }
        }
        data
    }
}

body_ref!(PlanetRef, PlanetData);

/// Measured attributes and derived quantities.
///
/// Derived quantities never fail: missing inputs give the not-a-number
/// sentinel. Quantities that need a host star give the sentinel for planets
/// orbiting a binary barycentre.
impl<'a> PlanetRef<'a> {
    pub fn mass(self) -> Mass {
        self.data.mass
    }

    pub fn radius(self) -> Length {
        self.data.radius
    }

    pub fn temperature(self) -> Temperature {
        self.data.temperature
    }

    pub fn period(self) -> Time {
        self.data.period
    }

    pub fn semi_major_axis(self) -> Length {
        self.data.semi_major_axis
    }

    pub fn eccentricity(self) -> f64 {
        self.data.eccentricity
    }

    pub fn inclination(self) -> Angle {
        self.data.inclination
    }

    pub fn discovery_method(self) -> Option<&'a str> {
        self.data.discovery_method.as_deref()
    }

    pub fn discovery_year(self) -> Option<i32> {
        self.data.discovery_year
    }

    pub fn is_transiting(self) -> bool {
        self.data.is_transiting
    }

    pub fn last_update(self) -> Option<&'a str> {
        self.data.last_update.as_deref()
    }

    /// The host star, `None` for a circumbinary planet
    pub fn star(self) -> Option<StarRef<'a>> {
        self.nearest_star()
    }

    pub fn distance(self) -> Length {
        self.system().distance()
    }

    /// Own age, falling back to the host star's
    pub fn age(self) -> Time {
        if self.data.age.is_known() {
            return self.data.age;
        }
        self.star().map_or_else(Time::unknown, StarRef::age)
    }

    pub fn density(self) -> Density {
        equations::density(self.mass(), self.radius())
    }

    pub fn surface_gravity(self) -> Acceleration {
        equations::surface_gravity(self.mass(), self.radius())
    }

    pub fn log_g(self) -> f64 {
        equations::log_g(self.surface_gravity())
    }

    /// Fractional flux drop, (R_p / R_s)²
    pub fn transit_depth(self) -> f64 {
        let star_radius = self.star().map_or_else(Length::unknown, StarRef::radius);
        equations::transit_depth(self.radius(), star_radius)
    }

    /// Transit duration. A transiting planet without a catalogued
    /// inclination is taken to be edge-on.
    pub fn transit_duration(self) -> Time {
        let star_radius = self.star().map_or_else(Length::unknown, StarRef::radius);
        let inclination = match self.inclination() {
            i if i.is_known() => i,
            _ if self.is_transiting() => Angle::from_degrees(90.0),
            i => i,
        };
        equations::transit_duration(
            self.period(),
            self.orbital_distance(),
            star_radius,
            self.radius(),
            inclination,
        )
    }

    /// Mass from the radius (Chen & Kipping 2017); the sentinel for Jovian radii
    pub fn estimated_mass(self) -> Mass {
        equations::mass_from_radius(self.radius())
    }

    /// Mass regime from the measured mass, else from the radius-estimated mass
    pub fn mass_class(self) -> Option<PlanetClass> {
        PlanetClass::from_mass(self.mass())
            .or_else(|| PlanetClass::from_mass(self.estimated_mass()))
    }

    /// Temperature regime from the measured temperature, else the calculated one
    pub fn temperature_class(self) -> Option<TemperatureClass> {
        TemperatureClass::from_temperature(self.temperature())
            .or_else(|| TemperatureClass::from_temperature(self.calc_temperature()))
    }

    /// Bond albedo assumed from the mass class
    pub fn albedo(self) -> f64 {
        self.mass_class().map_or(f64::NAN, |class| class.bond_albedo())
    }

    /// Equilibrium temperature from the host star, orbit and albedo
    pub fn calc_temperature(self) -> Temperature {
        let Some(star) = self.star() else {
            return Temperature::unknown();
        };
        equations::equilibrium_temperature(
            star.temperature(),
            star.radius(),
            self.orbital_distance(),
            self.albedo(),
            PLANET_EMISSIVITY,
        )
    }

    /// Semi-major axis from the period and host star mass (Kepler III)
    pub fn calc_semi_major_axis(self) -> Length {
        let star_mass = self.star().map_or_else(Mass::unknown, StarRef::mass);
        equations::semi_major_axis_from_period(self.period(), star_mass)
    }

    /// Period from the semi-major axis and host star mass (Kepler III)
    pub fn calc_period(self) -> Time {
        let star_mass = self.star().map_or_else(Mass::unknown, StarRef::mass);
        equations::period_from_semi_major_axis(self.semi_major_axis(), star_mass)
    }

    /// Measured semi-major axis, else the one implied by the period
    fn orbital_distance(self) -> Length {
        match self.semi_major_axis() {
            a if a.is_known() => a,
            _ => self.calc_semi_major_axis(),
        }
    }
}
