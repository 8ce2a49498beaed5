use units::{Acceleration, Density, Length, Luminosity, Mass, Temperature, Time, Unit};

use crate::fields;
use crate::object::{AstroObject, body_ref};
use crate::planet::PlanetRef;
use crate::record::Field;
use crate::spectral::SpectralClass;

/// Apparent magnitudes by photometric band
#[derive(Debug, Clone, Copy)]
pub struct Magnitudes {
    pub b: f64,
    pub v: f64,
    pub j: f64,
    pub h: f64,
    pub k: f64,
    pub i: f64,
}

impl Default for Magnitudes {
    fn default() -> Self {
        Self {
            b: f64::NAN,
            v: f64::NAN,
            j: f64::NAN,
            h: f64::NAN,
            k: f64::NAN,
            i: f64::NAN,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StarData {
    pub mass: Mass,
    pub radius: Length,
    pub temperature: Temperature,
    pub age: Time,
    /// [Fe/H] in dex
    pub metallicity: f64,
    pub spectral_type: Option<String>,
    pub magnitudes: Magnitudes,
}

impl Default for StarData {
    fn default() -> Self {
        Self {
            mass: Mass::unknown(),
            radius: Length::unknown(),
            temperature: Temperature::unknown(),
            age: Time::unknown(),
            metallicity: f64::NAN,
            spectral_type: None,
            magnitudes: Magnitudes::default(),
        }
    }
}

impl StarData {
    pub(crate) fn from_fields(fields: &[Field]) -> Self {
        let mut data = Self::default();
        for field in fields {
            let measured = |unit| fields::measured(field, unit);
            match field.tag.as_str() {
                "mass" => data.mass = Mass::from_solar_masses(measured(Unit::SolarMass)),
                "radius" => data.radius = Length::from_solar_radii(measured(Unit::SolarRadius)),
                "temperature" => {
                    data.temperature = Temperature::from_kelvin(measured(Unit::Kelvin))
                }
                "age" => data.age = Time::from_gyr(measured(Unit::Gigayear)),
                "metallicity" => data.metallicity = fields::number(field),
                "spectraltype" => data.spectral_type = fields::text(field),
                "magB" => data.magnitudes.b = fields::number(field),
                "magV" => data.magnitudes.v = fields::number(field),
                "magJ" => data.magnitudes.j = fields::number(field),
                "magH" => data.magnitudes.h = fields::number(field),
                "magK" => data.magnitudes.k = fields::number(field),
                "magI" => data.magnitudes.i = fields::number(field),
                "name" => {}
                other => log::trace!("ignoring star field <{other}>"),
            }
        }
        data
    }
}

body_ref!(StarRef, StarData);

impl<'a> StarRef<'a> {
    pub fn mass(self) -> Mass {
        self.data.mass
    }

    pub fn radius(self) -> Length {
        self.data.radius
    }

    pub fn temperature(self) -> Temperature {
        self.data.temperature
    }

    pub fn age(self) -> Time {
        self.data.age
    }

    pub fn metallicity(self) -> f64 {
        self.data.metallicity
    }

    pub fn spectral_type(self) -> Option<&'a str> {
        self.data.spectral_type.as_deref()
    }

    pub fn spectral_class(self) -> Option<SpectralClass> {
        self.spectral_type()?.parse().ok()
    }

    pub fn magnitudes(self) -> Magnitudes {
        self.data.magnitudes
    }

    pub fn mag_v(self) -> f64 {
        self.data.magnitudes.v
    }

    pub fn planets(self) -> Vec<PlanetRef<'a>> {
        self.children()
            .into_iter()
            .filter_map(AstroObject::as_planet)
            .collect()
    }

    pub fn distance(self) -> Length {
        self.system().distance()
    }

    pub fn luminosity(self) -> Luminosity {
        equations::stellar_luminosity(self.radius(), self.temperature())
    }

    pub fn surface_gravity(self) -> Acceleration {
        equations::surface_gravity(self.mass(), self.radius())
    }

    pub fn log_g(self) -> f64 {
        equations::log_g(self.surface_gravity())
    }

    pub fn density(self) -> Density {
        equations::density(self.mass(), self.radius())
    }

    /// Absolute V magnitude from the apparent V magnitude and system distance
    pub fn absolute_magnitude(self) -> f64 {
        equations::absolute_magnitude(self.mag_v(), self.distance())
    }

    /// Temperature implied by the spectral class
    pub fn estimated_temperature(self) -> Temperature {
        self.spectral_class()
            .and_then(|class| class.estimated_temperature())
            .unwrap_or_else(Temperature::unknown)
    }
}
