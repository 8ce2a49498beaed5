use units::{Angle, Length, Mass, Time, Unit};

use crate::fields;
use crate::object::{AstroObject, body_ref};
use crate::record::Field;
use crate::star::StarRef;

/// Measured orbit of a gravitationally bound group
#[derive(Debug, Clone)]
pub struct BinaryData {
    pub semi_major_axis: Length,
    /// Projected separation in AU
    pub separation: Length,
    /// Separation on the sky, when given with `unit="arcsec"`
    pub angular_separation: Angle,
    pub period: Time,
    pub eccentricity: f64,
    pub inclination: Angle,
}

impl Default for BinaryData {
    fn default() -> Self {
        Self {
            semi_major_axis: Length::unknown(),
            separation: Length::unknown(),
            angular_separation: Angle::unknown(),
            period: Time::unknown(),
            eccentricity: f64::NAN,
            inclination: Angle::unknown(),
        }
    }
}

impl BinaryData {
    pub(crate) fn from_fields(fields: &[Field]) -> Self {
        let mut data = Self::default();
        for field in fields {
            let measured = |unit| fields::measured(field, unit);
            match field.tag.as_str() {
                "semimajoraxis" => {
                    data.semi_major_axis = Length::from_au(measured(Unit::AstronomicalUnit))
                }
                "separation" => match fields::declared_unit(field) {
                    Some(unit) if unit.dimension() == units::Dimension::Angle => {
                        data.angular_separation = Angle::from_arcseconds(measured(Unit::Arcsecond))
                    }
                    _ => data.separation = Length::from_au(measured(Unit::AstronomicalUnit)),
                },
                "period" => data.period = Time::from_days(measured(Unit::Day)),
                "eccentricity" => data.eccentricity = fields::number(field),
                "inclination" => data.inclination = Angle::from_degrees(measured(Unit::Degree)),
                "name" => {}
                other => log::trace!("ignoring binary field <{other}>"),
            }
        }
        data
    }
}

body_ref!(BinaryRef, BinaryData);

impl<'a> BinaryRef<'a> {
    pub fn semi_major_axis(self) -> Length {
        self.data.semi_major_axis
    }

    pub fn separation(self) -> Length {
        self.data.separation
    }

    pub fn angular_separation(self) -> Angle {
        self.data.angular_separation
    }

    pub fn period(self) -> Time {
        self.data.period
    }

    pub fn eccentricity(self) -> f64 {
        self.data.eccentricity
    }

    pub fn inclination(self) -> Angle {
        self.data.inclination
    }

    pub fn distance(self) -> Length {
        self.system().distance()
    }

    /// Every star in the group, including those of nested binaries
    pub fn stars(self) -> Vec<StarRef<'a>> {
        self.descendants()
            .into_iter()
            .filter_map(AstroObject::as_star)
            .collect()
    }

    /// Sum of all member star masses; the sentinel if any is unknown or there
    /// are no stars
    pub fn total_mass(self) -> Mass {
        let stars = self.stars();
        if stars.is_empty() {
            return Mass::unknown();
        }
        stars.iter().map(|star| star.mass()).sum()
    }
}
