//! Unit parsing and scaling
//!
//! Every unit knows its factor to the SI base of its quantity, so a value `v`
//! expressed in unit `u` is `v * u.to_si()` in SI and `si / u.to_si()` back.

use serde::Serialize;
use std::fmt;

pub mod error;
pub mod irradiance;
pub mod photon_flux;
pub mod wavelength;

pub use error::UnitError;
pub use irradiance::IrradianceUnit;
pub use photon_flux::PhotonFluxUnit;
pub use wavelength::WavelengthUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Irradiance,
    PhotonFlux,
    Wavelength,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Irradiance => write!(f, "irradiance"),
            Quantity::PhotonFlux => write!(f, "photon flux"),
            Quantity::Wavelength => write!(f, "wavelength"),
        }
    }
}

/// SI prefix applied to the leading unit symbol (W, E, mol).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Kilo,
    Unit,
    Milli,
    Micro,
    Nano,
}

impl Prefix {
    pub fn factor(&self) -> f64 {
        match self {
            Prefix::Kilo => 1e3,
            Prefix::Unit => 1.0,
            Prefix::Milli => 1e-3,
            Prefix::Micro => 1e-6,
            Prefix::Nano => 1e-9,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Prefix::Kilo => "k",
            Prefix::Unit => "",
            Prefix::Milli => "m",
            Prefix::Micro => "u",
            Prefix::Nano => "n",
        }
    }

    /// Accepts `u`, `µ` (micro sign) and `μ` (greek mu) for micro.
    pub fn parse(symbol: &str) -> Option<Prefix> {
        match symbol {
            "k" => Some(Prefix::Kilo),
            "" => Some(Prefix::Unit),
            "m" => Some(Prefix::Milli),
            "u" | "\u{b5}" | "\u{3bc}" => Some(Prefix::Micro),
            "n" => Some(Prefix::Nano),
            _ => None,
        }
    }
}

/// Area in the denominator of irradiance and photon flux units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    SquareMetre,
    SquareCentimetre,
    SquareMillimetre,
}

impl Area {
    /// Size of the area unit in m^2
    pub fn square_metres(&self) -> f64 {
        match self {
            Area::SquareMetre => 1.0,
            Area::SquareCentimetre => 1e-4,
            Area::SquareMillimetre => 1e-6,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Area::SquareMetre => "m^2",
            Area::SquareCentimetre => "cm^2",
            Area::SquareMillimetre => "mm^2",
        }
    }

    pub fn parse(symbol: &str) -> Option<Area> {
        let base = symbol
            .strip_suffix("^2")
            .or_else(|| symbol.strip_suffix('2'))
            .or_else(|| symbol.strip_suffix('\u{b2}'))?;

        match base {
            "m" => Some(Area::SquareMetre),
            "cm" => Some(Area::SquareCentimetre),
            "mm" => Some(Area::SquareMillimetre),
            _ => None,
        }
    }
}

/// Removes all whitespace so that `W / m^2` and `W/m^2` compare equal.
pub(crate) fn compact(unit: &str) -> String {
    unit.chars().filter(|c| !c.is_whitespace()).collect()
}
