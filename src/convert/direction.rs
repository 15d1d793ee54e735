use crate::units::{IrradianceUnit, PhotonFluxUnit, Quantity, UnitError};

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    IrradianceToPhotonFlux,
    PhotonFluxToIrradiance,
}

impl Direction {
    pub fn source(&self) -> Quantity {
        match self {
            Direction::IrradianceToPhotonFlux => Quantity::Irradiance,
            Direction::PhotonFluxToIrradiance => Quantity::PhotonFlux,
        }
    }

    pub fn target(&self) -> Quantity {
        match self {
            Direction::IrradianceToPhotonFlux => Quantity::PhotonFlux,
            Direction::PhotonFluxToIrradiance => Quantity::Irradiance,
        }
    }

    pub fn source_unit(&self, unit: &str) -> Result<FluxUnit, UnitError> {
        FluxUnit::parse(self.source(), unit)
    }

    pub fn target_unit(&self, unit: &str) -> Result<FluxUnit, UnitError> {
        FluxUnit::parse(self.target(), unit)
    }

    /// Photon flux input is read per wavelength unit and irradiance is
    /// reported per nm.
    pub fn spectral_by_default(&self) -> bool {
        matches!(self, Direction::PhotonFluxToIrradiance)
    }

    pub fn default_source_unit(&self) -> FluxUnit {
        FluxUnit::default_for(self.source())
    }

    pub fn default_target_unit(&self) -> FluxUnit {
        FluxUnit::default_for(self.target())
    }
}

#[derive(Debug)]
pub struct DirectionParseError(String);

impl fmt::Display for DirectionParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid conversion direction '{}' (expected irr2flux or flux2irr)",
            self.0
        )
    }
}

impl std::error::Error for DirectionParseError {}

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "irradiance_to_photon_flux" | "irr2flux" | "irradiance" => {
                Ok(Direction::IrradianceToPhotonFlux)
            }
            "photon_flux_to_irradiance" | "flux2irr" | "photonflux" | "photon_flux" => {
                Ok(Direction::PhotonFluxToIrradiance)
            }
            _ => Err(DirectionParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.source(), self.target())
    }
}

/// Unit of either side of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluxUnit {
    Irradiance(IrradianceUnit),
    PhotonFlux(PhotonFluxUnit),
}

impl FluxUnit {
    /// Wavelength is not a flux quantity and is always rejected.
    pub fn parse(quantity: Quantity, unit: &str) -> Result<FluxUnit, UnitError> {
        match quantity {
            Quantity::Irradiance => unit.parse().map(FluxUnit::Irradiance),
            Quantity::PhotonFlux => unit.parse().map(FluxUnit::PhotonFlux),
            Quantity::Wavelength => Err(UnitError::Unrecognized {
                quantity,
                unit: unit.trim().to_string(),
            }),
        }
    }

    pub fn default_for(quantity: Quantity) -> FluxUnit {
        match quantity {
            Quantity::PhotonFlux => FluxUnit::PhotonFlux(PhotonFluxUnit::default()),
            _ => FluxUnit::Irradiance(IrradianceUnit::default()),
        }
    }

    pub fn quantity(&self) -> Quantity {
        match self {
            FluxUnit::Irradiance(_) => Quantity::Irradiance,
            FluxUnit::PhotonFlux(_) => Quantity::PhotonFlux,
        }
    }

    pub fn to_si(&self) -> f64 {
        match self {
            FluxUnit::Irradiance(unit) => unit.to_si(),
            FluxUnit::PhotonFlux(unit) => unit.to_si(),
        }
    }
}

impl fmt::Display for FluxUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluxUnit::Irradiance(unit) => write!(f, "{}", unit),
            FluxUnit::PhotonFlux(unit) => write!(f, "{}", unit),
        }
    }
}

impl Serialize for FluxUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
