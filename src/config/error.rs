use crate::convert::{NUMERIC_HINT, UNIT_HINT};
use crate::input::InputError;
use crate::readers::{FileError, ReadError};
use crate::units::UnitError;

use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    MissingValues,
    ConflictingValues,
    Input(InputError),
    Unit(UnitError),
    FileType(FileError),
    Read(ReadError),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl ConfigError {
    /// User-facing advice, for errors caused by what was typed in the job file
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::Unit(_) => Some(UNIT_HINT),
            ConfigError::Input(_)
            | ConfigError::MissingValues
            | ConfigError::Read(ReadError::Text { .. }) => Some(NUMERIC_HINT),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValues => write!(f, "one of values or values_file is required"),
            ConfigError::ConflictingValues => {
                write!(f, "values and values_file cannot both be set")
            }
            ConfigError::Input(e) => write!(f, "Invalid number: {}", e),
            ConfigError::Unit(e) => write!(f, "Invalid unit: {}", e),
            ConfigError::FileType(e) => write!(f, "{}", e),
            ConfigError::Read(e) => write!(f, "Failed to read values: {}", e),
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}

impl From<InputError> for ConfigError {
    fn from(err: InputError) -> ConfigError {
        ConfigError::Input(err)
    }
}

impl From<UnitError> for ConfigError {
    fn from(err: UnitError) -> ConfigError {
        ConfigError::Unit(err)
    }
}

impl From<FileError> for ConfigError {
    fn from(err: FileError) -> ConfigError {
        ConfigError::FileType(err)
    }
}

impl From<ReadError> for ConfigError {
    fn from(err: ReadError) -> ConfigError {
        ConfigError::Read(err)
    }
}
