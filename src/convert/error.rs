use crate::input::InputError;
use crate::units::UnitError;

use std::fmt;

pub const UNIT_HINT: &str = "Please enter valid units.";
pub const NUMERIC_HINT: &str = "Please enter valid numeric values of the same length.";

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    Empty,
    LengthMismatch { values: usize, wavelengths: usize },
    NonPositiveWavelength { index: usize, value: f64 },
    Input(InputError),
    Unit(UnitError),
}

impl ConvertError {
    /// Short, user-facing advice on how to fix the input.
    pub fn hint(&self) -> &'static str {
        match self {
            ConvertError::Unit(_) => UNIT_HINT,
            ConvertError::NonPositiveWavelength { .. } => {
                "Please enter wavelengths greater than zero."
            }
            _ => NUMERIC_HINT,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Empty => write!(f, "no values to convert"),
            ConvertError::LengthMismatch {
                values,
                wavelengths,
            } => write!(
                f,
                "got {} values but {} wavelengths (expected 1 or {})",
                values, wavelengths, values
            ),
            ConvertError::NonPositiveWavelength { index, value } => {
                write!(f, "wavelength {} must be positive, got {}", index + 1, value)
            }
            ConvertError::Input(e) => write!(f, "{}", e),
            ConvertError::Unit(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Input(e) => Some(e),
            ConvertError::Unit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InputError> for ConvertError {
    fn from(err: InputError) -> ConvertError {
        ConvertError::Input(err)
    }
}

impl From<UnitError> for ConvertError {
    fn from(err: UnitError) -> ConvertError {
        ConvertError::Unit(err)
    }
}
