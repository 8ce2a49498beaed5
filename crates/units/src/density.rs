/// Volume density in g/cm³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Density(f64);

impl Density {
    pub fn unknown() -> Self {
        Self(f64::NAN)
    }

    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value)
    }

    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value / 1000.0)
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0 * 1000.0
    }

    pub fn is_known(&self) -> bool {
        self.0.is_finite()
    }
}
