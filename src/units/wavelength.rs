use super::{Quantity, UnitError, compact};

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WavelengthUnit {
    #[default]
    Nanometre,
    Micrometre,
    Millimetre,
    Metre,
}

impl WavelengthUnit {
    pub const CHOICES: [&'static str; 3] = ["nm", "um", "mm"];

    /// Factor from this unit to metres
    pub fn to_si(&self) -> f64 {
        match self {
            WavelengthUnit::Nanometre => 1e-9,
            WavelengthUnit::Micrometre => 1e-6,
            WavelengthUnit::Millimetre => 1e-3,
            WavelengthUnit::Metre => 1.0,
        }
    }
}

impl FromStr for WavelengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match compact(s).as_str() {
            "" => Err(UnitError::Empty(Quantity::Wavelength)),
            "nm" => Ok(WavelengthUnit::Nanometre),
            "um" | "\u{b5}m" | "\u{3bc}m" => Ok(WavelengthUnit::Micrometre),
            "mm" => Ok(WavelengthUnit::Millimetre),
            "m" => Ok(WavelengthUnit::Metre),
            _ => Err(UnitError::Unrecognized {
                quantity: Quantity::Wavelength,
                unit: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for WavelengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WavelengthUnit::Nanometre => write!(f, "nm"),
            WavelengthUnit::Micrometre => write!(f, "um"),
            WavelengthUnit::Millimetre => write!(f, "mm"),
            WavelengthUnit::Metre => write!(f, "m"),
        }
    }
}

impl Serialize for WavelengthUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
