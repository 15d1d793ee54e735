use super::{Area, Prefix, Quantity, UnitError, compact};

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Power per unit area, `<prefix>W/<area>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrradianceUnit {
    pub prefix: Prefix,
    pub area: Area,
}

impl IrradianceUnit {
    /// Units offered by default, in display order
    pub const CHOICES: [&'static str; 8] = [
        "W/m^2", "uW/m^2", "mW/m^2", "nW/m^2", "W/cm^2", "uW/cm^2", "mW/cm^2", "nW/cm^2",
    ];

    pub const WATT_PER_SQUARE_METRE: IrradianceUnit = IrradianceUnit {
        prefix: Prefix::Unit,
        area: Area::SquareMetre,
    };

    pub fn new(prefix: Prefix, area: Area) -> Self {
        Self { prefix, area }
    }

    /// Factor from this unit to W m^-2
    pub fn to_si(&self) -> f64 {
        self.prefix.factor() / self.area.square_metres()
    }
}

impl Default for IrradianceUnit {
    fn default() -> Self {
        Self::WATT_PER_SQUARE_METRE
    }
}

impl FromStr for IrradianceUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = compact(s);
        if unit.is_empty() {
            return Err(UnitError::Empty(Quantity::Irradiance));
        }

        let unrecognized = || UnitError::Unrecognized {
            quantity: Quantity::Irradiance,
            unit: s.trim().to_string(),
        };

        let (power, area) = unit.split_once('/').ok_or_else(unrecognized)?;
        let prefix = power
            .strip_suffix('W')
            .and_then(Prefix::parse)
            .ok_or_else(unrecognized)?;
        let area = Area::parse(area).ok_or_else(unrecognized)?;

        Ok(IrradianceUnit { prefix, area })
    }
}

impl fmt::Display for IrradianceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}W/{}", self.prefix.symbol(), self.area.symbol())
    }
}

impl Serialize for IrradianceUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
