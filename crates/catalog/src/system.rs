use units::{Angle, Length, Unit};

use crate::binary::BinaryRef;
use crate::fields;
use crate::object::{AstroObject, body_ref};
use crate::planet::PlanetRef;
use crate::record::Field;
use crate::star::StarRef;

/// Measured attributes of a system
#[derive(Debug, Clone)]
pub struct SystemData {
    pub distance: Length,
    pub right_ascension: Angle,
    pub declination: Angle,
    /// Julian epoch of the coordinates, e.g. 2000
    pub epoch: f64,
}

impl Default for SystemData {
    fn default() -> Self {
        Self {
            distance: Length::unknown(),
            right_ascension: Angle::unknown(),
            declination: Angle::unknown(),
            epoch: f64::NAN,
        }
    }
}

impl SystemData {
    pub(crate) fn from_fields(fields: &[Field]) -> Self {
        let mut data = Self::default();
        for field in fields {
            let measured = |unit| fields::measured(field, unit);
            match field.tag.as_str() {
                "distance" => data.distance = Length::from_parsecs(measured(Unit::Parsec)),
                "rightascension" => {
                    data.right_ascension = Angle::from_hours(fields::sexagesimal(field))
                }
                "declination" => data.declination = Angle::from_degrees(fields::sexagesimal(field)),
                "epoch" => data.epoch = fields::number(field),
                "name" => {}
                other => log::trace!("ignoring system field <{other}>"),
            }
        }
        data
    }
}

body_ref!(SystemRef, SystemData);

impl<'a> SystemRef<'a> {
    pub fn distance(self) -> Length {
        self.data.distance
    }

    pub fn right_ascension(self) -> Angle {
        self.data.right_ascension
    }

    pub fn declination(self) -> Angle {
        self.data.declination
    }

    pub fn epoch(self) -> f64 {
        self.data.epoch
    }

    /// Every star in the system, however deeply nested in binaries
    pub fn stars(self) -> Vec<StarRef<'a>> {
        self.descendants()
            .into_iter()
            .filter_map(AstroObject::as_star)
            .collect()
    }

    pub fn binaries(self) -> Vec<BinaryRef<'a>> {
        self.descendants()
            .into_iter()
            .filter_map(AstroObject::as_binary)
            .collect()
    }

    pub fn planets(self) -> Vec<PlanetRef<'a>> {
        self.descendants()
            .into_iter()
            .filter_map(AstroObject::as_planet)
            .collect()
    }
}
