use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::convert::{Direction, Request};
use crate::input::parse_list;
use crate::readers::create_reader;
use crate::report::OutputFormat;
use crate::units::WavelengthUnit;

pub mod error;
pub use error::ConfigError;

/// Numbers given either as `"1, 2, 3"` or as `[1, 2, 3]`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberList {
    Text(String),
    Numbers(Vec<f64>),
}

impl NumberList {
    fn into_values(self) -> Result<Vec<f64>, ConfigError> {
        match self {
            NumberList::Text(text) => Ok(parse_list(&text)?),
            NumberList::Numbers(numbers) => Ok(numbers),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValueSource {
    Inline(Vec<f64>),
    File(PathBuf),
}

impl ValueSource {
    /// Returns the values, reading them from disk for `File`.
    pub fn load(self) -> Result<Vec<f64>, ConfigError> {
        match self {
            ValueSource::Inline(values) => Ok(values),
            ValueSource::File(path) => {
                let reader = create_reader(path.to_string_lossy().into_owned())?;
                let data = reader.read_data()?;
                debug!(file = %path.display(), "loaded values\n{}", data);
                Ok(data.buffer)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    direction: Direction,
    values: ValueSource,
    wavelengths: Vec<f64>,
    value_units: String,
    wavelength_units: String,
    return_units: String,
    spectral: bool,
    output: OutputFormat,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigHelper {
    #[serde(default)]
    direction: Direction,
    values: Option<NumberList>,
    values_file: Option<PathBuf>,
    wavelengths: NumberList,
    value_units: Option<String>,
    wavelength_units: Option<String>,
    return_units: Option<String>,
    spectral: Option<bool>,
    #[serde(default)]
    output: OutputFormat,
}

// Parses number lists and checks every unit string against the conversion
// direction, so a bad job file fails at load time.
impl TryFrom<ConfigHelper> for Config {
    type Error = ConfigError;

    fn try_from(helper: ConfigHelper) -> Result<Self, Self::Error> {
        let direction = helper.direction;

        let values = match (helper.values, helper.values_file) {
            (Some(values), None) => ValueSource::Inline(values.into_values()?),
            (None, Some(path)) => ValueSource::File(path),
            (None, None) => return Err(ConfigError::MissingValues),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingValues),
        };

        let wavelengths = helper.wavelengths.into_values()?;

        let value_units = match helper.value_units {
            Some(unit) => direction.source_unit(&unit)?,
            None => direction.default_source_unit(),
        };

        let return_units = match helper.return_units {
            Some(unit) => direction.target_unit(&unit)?,
            None => direction.default_target_unit(),
        };

        let wavelength_units = match helper.wavelength_units {
            Some(unit) => unit.parse::<WavelengthUnit>()?,
            None => WavelengthUnit::default(),
        };

        Ok(Config {
            direction,
            values,
            wavelengths,
            value_units: value_units.to_string(),
            wavelength_units: wavelength_units.to_string(),
            return_units: return_units.to_string(),
            spectral: helper
                .spectral
                .unwrap_or_else(|| direction.spectral_by_default()),
            output: helper.output,
        })
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = ConfigHelper::deserialize(deserializer)?;
        Config::try_from(helper).map_err(D::Error::custom)
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        // Deserialize the helper first so unit and number errors keep their type
        let helper: ConfigHelper = serde_json::from_reader(reader).map_err(ConfigError::from)?;
        let mut config = Config::try_from(helper)?;

        // values_file is relative to the job file, not the working directory
        if let ValueSource::File(values_file) = &config.values {
            if values_file.is_relative() {
                if let Some(parent) = path.parent() {
                    config.values = ValueSource::File(parent.join(values_file));
                }
            }
        }

        debug!(path = %path.display(), direction = %config.direction, "loaded job file");

        Ok(config)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn values(&self) -> &ValueSource {
        &self.values
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn spectral(&self) -> bool {
        self.spectral
    }

    pub fn output(&self) -> OutputFormat {
        self.output
    }

    /// Resolves the value source, reading `values_file` if one was given.
    pub fn into_request(self) -> Result<Request, ConfigError> {
        Ok(Request {
            direction: self.direction,
            values: self.values.load()?,
            wavelengths: self.wavelengths,
            value_unit: self.value_units,
            wavelength_unit: self.wavelength_units,
            return_unit: self.return_units,
            spectral: self.spectral,
        })
    }
}
