use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use units::Temperature;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralType {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,
    T,
    Y, // Brown dwarfs
    D, // White dwarf
}

impl SpectralType {
    const MAIN_SEQUENCE: [SpectralType; 10] = [
        SpectralType::O,
        SpectralType::B,
        SpectralType::A,
        SpectralType::F,
        SpectralType::G,
        SpectralType::K,
        SpectralType::M,
        SpectralType::L,
        SpectralType::T,
        SpectralType::Y,
    ];

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'O' => Some(Self::O),
            'B' => Some(Self::B),
            'A' => Some(Self::A),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'K' => Some(Self::K),
            'M' => Some(Self::M),
            'L' => Some(Self::L),
            'T' => Some(Self::T),
            'Y' => Some(Self::Y),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// Effective temperature at subtype 0, in kelvin (dwarf sequence)
    fn zero_point_temperature(&self) -> Option<f64> {
        match self {
            Self::O => Some(50_000.0),
            Self::B => Some(31_000.0),
            Self::A => Some(9_700.0),
            Self::F => Some(7_200.0),
            Self::G => Some(5_920.0),
            Self::K => Some(5_270.0),
            Self::M => Some(3_850.0),
            Self::L => Some(2_250.0),
            Self::T => Some(1_300.0),
            Self::Y => Some(550.0),
            Self::D => None,
        }
    }

    /// Temperature at subtype 0 of the following type (subtype 10 of this one)
    fn end_temperature(&self) -> Option<f64> {
        let position = Self::MAIN_SEQUENCE.iter().position(|t| t == self)?;
        match Self::MAIN_SEQUENCE.get(position + 1) {
            Some(next) => next.zero_point_temperature(),
            None => Some(250.0),
        }
    }
}

impl fmt::Display for SpectralType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralType::O => "O",
            SpectralType::B => "B",
            SpectralType::A => "A",
            SpectralType::F => "F",
            SpectralType::G => "G",
            SpectralType::K => "K",
            SpectralType::M => "M",
            SpectralType::L => "L",
            SpectralType::T => "T",
            SpectralType::Y => "Y",
            SpectralType::D => "D",
        };
        write!(f, "{}", str)
    }
}

/// Spectral type letter plus numeric subtype, parsed from catalogue text such
/// as `G2V`, `K1.5 V` or `M4`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralClass {
    pub spectral_type: SpectralType,
    pub subtype: Option<f64>,
}

impl SpectralClass {
    /// Subtype assumed when the catalogue gives only the letter
    pub const DEFAULT_SUBTYPE: f64 = 5.0;

    /// Main-sequence effective temperature, interpolated linearly between
    /// adjacent type zero points. `None` for white dwarfs.
    pub fn estimated_temperature(&self) -> Option<Temperature> {
        let start = self.spectral_type.zero_point_temperature()?;
        let end = self.spectral_type.end_temperature()?;
        let subtype = self.subtype.unwrap_or(Self::DEFAULT_SUBTYPE);
        Some(Temperature::from_kelvin(start + (end - start) * subtype / 10.0))
    }
}

impl FromStr for SpectralClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let spectral_type = chars
            .next()
            .and_then(SpectralType::from_letter)
            .ok_or_else(|| format!("unrecognised spectral type '{s}'"))?;

        let rest = chars.as_str().trim_start();
        let digits = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .map_or(rest, |end| &rest[..end]);
        let subtype = digits
            .parse::<f64>()
            .ok()
            .filter(|subtype| (0.0..10.0).contains(subtype));

        Ok(Self {
            spectral_type,
            subtype,
        })
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.subtype {
            Some(subtype) => write!(f, "{}{}", self.spectral_type, subtype),
            None => write!(f, "{}", self.spectral_type),
        }
    }
}
