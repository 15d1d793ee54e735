use super::{Area, Prefix, Quantity, UnitError, compact};

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Moles of photons per unit area per second.
///
/// `E` is shorthand for one einstein per square metre per second, so `uE`
/// reads as umol m^-2 s^-1. The long form `<prefix>mol/<area>/s` is also
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotonFluxUnit {
    pub prefix: Prefix,
    pub area: Area,
}

impl PhotonFluxUnit {
    pub const CHOICES: [&'static str; 4] = ["E", "uE", "mE", "nE"];

    pub const EINSTEIN: PhotonFluxUnit = PhotonFluxUnit {
        prefix: Prefix::Unit,
        area: Area::SquareMetre,
    };

    pub fn new(prefix: Prefix, area: Area) -> Self {
        Self { prefix, area }
    }

    /// Factor from this unit to mol m^-2 s^-1
    pub fn to_si(&self) -> f64 {
        self.prefix.factor() / self.area.square_metres()
    }
}

impl Default for PhotonFluxUnit {
    fn default() -> Self {
        Self::EINSTEIN
    }
}

impl FromStr for PhotonFluxUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = compact(s);
        if unit.is_empty() {
            return Err(UnitError::Empty(Quantity::PhotonFlux));
        }

        let unrecognized = || UnitError::Unrecognized {
            quantity: Quantity::PhotonFlux,
            unit: s.trim().to_string(),
        };

        // No kilo: photon flux only scales down from the einstein
        let flux_prefix = |symbol: &str| Prefix::parse(symbol).filter(|p| *p != Prefix::Kilo);

        if let Some(prefix) = unit.strip_suffix('E') {
            let prefix = flux_prefix(prefix).ok_or_else(unrecognized)?;
            return Ok(PhotonFluxUnit::new(prefix, Area::SquareMetre));
        }

        let mut parts = unit.split('/');
        let (Some(amount), Some(area), Some("s"), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(unrecognized());
        };

        let prefix = amount
            .strip_suffix("mol")
            .and_then(flux_prefix)
            .ok_or_else(unrecognized)?;
        let area = Area::parse(area).ok_or_else(unrecognized)?;

        Ok(PhotonFluxUnit::new(prefix, area))
    }
}

impl fmt::Display for PhotonFluxUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.area {
            Area::SquareMetre => write!(f, "{}E", self.prefix.symbol()),
            area => write!(f, "{}mol/{}/s", self.prefix.symbol(), area.symbol()),
        }
    }
}

impl Serialize for PhotonFluxUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
