//! Irradiance <-> photon flux conversion
//!
//! The energy carried by one mole of photons of wavelength λ is h·c·N_A / λ,
//! which gives the two conversions
//!
//! ```text
//! E = I · λ / (h · c · N_A)        irradiance -> photon flux
//! I = E · h · c · N_A / λ          photon flux -> irradiance
//! ```
//!
//! with I in W m^-2, E in mol m^-2 s^-1 and λ in m.
//!
//! A spectral request treats the values as densities per wavelength unit
//! (e.g. uE/um) and reports results per nm (e.g. W/m^2/nm). Photon flux to
//! irradiance is spectral by default.
//!
//! ## Usage Example
//!
//! ```rust
//! use photonflux::convert::{Direction, Request};
//!
//! let request = Request::new(Direction::IrradianceToPhotonFlux, vec![1.0, 2.0], vec![550.0])
//!     .with_units("W/m^2", "nm", "uE");
//!
//! let conversion = request.convert().unwrap();
//! assert_eq!(conversion.rows.len(), 2);
//! assert!((conversion.rows[0].result - 4.5977).abs() < 1e-3);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::constants::MOLAR_PHOTON_ENERGY;
use crate::input::check_finite;
use crate::units::WavelengthUnit;

pub mod direction;
pub mod error;

pub use direction::{Direction, DirectionParseError, FluxUnit};
pub use error::{ConvertError, NUMERIC_HINT, UNIT_HINT};

/// Irradiance (W m^-2) to photon flux (mol m^-2 s^-1) at `wavelength` (m)
pub fn irradiance_to_photon_flux(irradiance: f64, wavelength: f64) -> f64 {
    irradiance * wavelength / MOLAR_PHOTON_ENERGY
}

/// Photon flux (mol m^-2 s^-1) to irradiance (W m^-2) at `wavelength` (m)
pub fn photon_flux_to_irradiance(photon_flux: f64, wavelength: f64) -> f64 {
    photon_flux * MOLAR_PHOTON_ENERGY / wavelength
}

/// Pairs every value with a wavelength.
///
/// A single wavelength is repeated for all values; otherwise both lists must
/// have the same length.
pub fn broadcast_wavelengths(
    values_len: usize,
    wavelengths: &[f64],
) -> Result<Vec<f64>, ConvertError> {
    if values_len == 0 {
        return Err(ConvertError::Empty);
    }

    match wavelengths {
        [single] => Ok(vec![*single; values_len]),
        _ if wavelengths.len() == values_len => Ok(wavelengths.to_vec()),
        _ => Err(ConvertError::LengthMismatch {
            values: values_len,
            wavelengths: wavelengths.len(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub direction: Direction,
    pub values: Vec<f64>,
    pub wavelengths: Vec<f64>,
    pub value_unit: String,
    pub wavelength_unit: String,
    pub return_unit: String,
    pub spectral: bool,
}

impl Request {
    /// Request with the default units of `direction` and wavelengths in nm.
    pub fn new(direction: Direction, values: Vec<f64>, wavelengths: Vec<f64>) -> Self {
        Self {
            direction,
            values,
            wavelengths,
            value_unit: direction.default_source_unit().to_string(),
            wavelength_unit: WavelengthUnit::default().to_string(),
            return_unit: direction.default_target_unit().to_string(),
            spectral: direction.spectral_by_default(),
        }
    }

    pub fn with_units(mut self, value_unit: &str, wavelength_unit: &str, return_unit: &str) -> Self {
        self.value_unit = value_unit.to_string();
        self.wavelength_unit = wavelength_unit.to_string();
        self.return_unit = return_unit.to_string();
        self
    }

    pub fn with_spectral(mut self, spectral: bool) -> Self {
        self.spectral = spectral;
        self
    }

    pub fn convert(&self) -> Result<Conversion, ConvertError> {
        let value_unit = self.direction.source_unit(&self.value_unit)?;
        let return_unit = self.direction.target_unit(&self.return_unit)?;
        let wavelength_unit: WavelengthUnit = self.wavelength_unit.parse()?;

        check_finite(&self.values)?;
        check_finite(&self.wavelengths)?;
        let wavelengths = broadcast_wavelengths(self.values.len(), &self.wavelengths)?;

        if let Some((index, &value)) = wavelengths.iter().enumerate().find(|(_, w)| **w <= 0.0) {
            return Err(ConvertError::NonPositiveWavelength { index, value });
        }

        debug!(
            direction = %self.direction,
            values = self.values.len(),
            from = %value_unit,
            to = %return_unit,
            wavelength_unit = %wavelength_unit,
            spectral = self.spectral,
            "converting"
        );

        let convert = match self.direction {
            Direction::IrradianceToPhotonFlux => irradiance_to_photon_flux,
            Direction::PhotonFluxToIrradiance => photon_flux_to_irradiance,
        };

        // Density per wavelength unit -> density per nm
        let per_nm = if self.spectral {
            WavelengthUnit::Nanometre.to_si() / wavelength_unit.to_si()
        } else {
            1.0
        };

        let rows = self
            .values
            .iter()
            .zip(&wavelengths)
            .map(|(&value, &wavelength)| {
                let si = convert(value * value_unit.to_si(), wavelength * wavelength_unit.to_si());
                Row {
                    value,
                    wavelength,
                    result: si / return_unit.to_si() * per_nm,
                }
            })
            .collect();

        Ok(Conversion {
            direction: self.direction,
            value_unit,
            wavelength_unit,
            return_unit,
            spectral: self.spectral,
            rows,
        })
    }
}

/// One converted value, in the units of its `Conversion`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Row {
    pub value: f64,
    pub wavelength: f64,
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub direction: Direction,
    pub value_unit: FluxUnit,
    pub wavelength_unit: WavelengthUnit,
    pub return_unit: FluxUnit,
    pub spectral: bool,
    pub rows: Vec<Row>,
}

impl Conversion {
    /// Unit of the input values, e.g. `uE/um` for a spectral request
    pub fn value_label(&self) -> String {
        if self.spectral {
            format!("{}/{}", self.value_unit, self.wavelength_unit)
        } else {
            self.value_unit.to_string()
        }
    }

    /// Unit of the results, e.g. `W/m^2/nm` for a spectral request
    pub fn return_label(&self) -> String {
        if self.spectral {
            format!("{}/{}", self.return_unit, WavelengthUnit::Nanometre)
        } else {
            self.return_unit.to_string()
        }
    }

    pub fn results(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.result).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputError;

    fn relative_eq(a: f64, b: f64, tolerance: f64) -> bool {
        ((a - b) / b).abs() < tolerance
    }

    #[test]
    fn test_irradiance_to_photon_flux_at_550nm() {
        // 1 W m^-2 of 550 nm light is ~4.5977 umol m^-2 s^-1
        let flux = irradiance_to_photon_flux(1.0, 550e-9);
        assert!(relative_eq(flux, 4.5977e-6, 1e-4), "{flux}");
    }

    #[test]
    fn test_round_trip() {
        for (irradiance, wavelength) in [(1.0, 400e-9), (250.0, 680e-9), (-3.5, 1.2e-6)] {
            let flux = irradiance_to_photon_flux(irradiance, wavelength);
            let back = photon_flux_to_irradiance(flux, wavelength);
            assert!(relative_eq(back, irradiance, 1e-12), "{irradiance} -> {back}");
        }
    }

    #[test]
    fn test_broadcast_single_wavelength() {
        assert_eq!(
            broadcast_wavelengths(3, &[500.0]).unwrap(),
            vec![500.0, 500.0, 500.0]
        );
        assert_eq!(broadcast_wavelengths(1, &[500.0]).unwrap(), vec![500.0]);
    }

    #[test]
    fn test_broadcast_matching_lengths() {
        assert_eq!(
            broadcast_wavelengths(2, &[400.0, 700.0]).unwrap(),
            vec![400.0, 700.0]
        );
    }

    #[test]
    fn test_broadcast_rejects_mismatch() {
        assert_eq!(
            broadcast_wavelengths(3, &[400.0, 700.0]),
            Err(ConvertError::LengthMismatch {
                values: 3,
                wavelengths: 2
            })
        );
        assert_eq!(
            broadcast_wavelengths(2, &[]),
            Err(ConvertError::LengthMismatch {
                values: 2,
                wavelengths: 0
            })
        );
        assert_eq!(broadcast_wavelengths(0, &[500.0]), Err(ConvertError::Empty));
    }

    #[test]
    fn test_request_irradiance_to_micro_einstein() {
        let conversion = Request::new(
            Direction::IrradianceToPhotonFlux,
            vec![100.0, 200.0],
            vec![550.0],
        )
        .with_units("W/m^2", "nm", "uE")
        .convert()
        .unwrap();

        assert_eq!(conversion.rows.len(), 2);
        assert_eq!(conversion.rows[1].wavelength, 550.0);
        assert!(relative_eq(conversion.rows[0].result, 459.77, 1e-4));
        assert!(relative_eq(conversion.rows[1].result, 919.54, 1e-4));
    }

    #[test]
    fn test_request_scales_input_units() {
        // 1 mW/cm^2 at 0.55 um equals 10 W/m^2 at 550 nm
        let scaled = Request::new(Direction::IrradianceToPhotonFlux, vec![1.0], vec![0.55])
            .with_units("mW/cm^2", "um", "E")
            .convert()
            .unwrap();
        let plain = Request::new(Direction::IrradianceToPhotonFlux, vec![10.0], vec![550.0])
            .convert()
            .unwrap();

        assert!(relative_eq(scaled.rows[0].result, plain.rows[0].result, 1e-12));
    }

    #[test]
    fn test_request_flux_to_irradiance() {
        let conversion = Request::new(
            Direction::PhotonFluxToIrradiance,
            vec![4.5977, 1.0],
            vec![550.0, 400.0],
        )
        .with_units("uE", "nm", "W/m^2")
        .convert()
        .unwrap();

        let results = conversion.results();
        assert!(relative_eq(results[0], 1.0, 1e-4));
        // 1 umol m^-2 s^-1 at 400 nm is ~0.29907 W m^-2
        assert!(relative_eq(results[1], 0.29907, 1e-4));
    }

    #[test]
    fn test_request_negative_values() {
        let conversion = Request::new(
            Direction::IrradianceToPhotonFlux,
            vec![-100.0, 100.0],
            vec![550.0],
        )
        .with_units("W/m^2", "nm", "uE")
        .convert()
        .unwrap();

        let results = conversion.results();
        assert!(relative_eq(results[0], -459.76, 1e-4));
        assert_eq!(results[0], -results[1]);
    }

    #[test]
    fn test_flux_to_irradiance_is_spectral_per_nm() {
        let per_nm = Request::new(Direction::PhotonFluxToIrradiance, vec![1.0], vec![0.4])
            .with_units("uE", "um", "W/m^2")
            .convert()
            .unwrap();
        let band = Request::new(Direction::PhotonFluxToIrradiance, vec![1.0], vec![0.4])
            .with_units("uE", "um", "W/m^2")
            .with_spectral(false)
            .convert()
            .unwrap();

        assert!(per_nm.spectral);
        assert!(!band.spectral);
        // 1 uE per um is 1e-3 uE per nm
        assert!(relative_eq(per_nm.rows[0].result, band.rows[0].result * 1e-3, 1e-12));
        assert!(relative_eq(band.rows[0].result, 0.29907, 1e-4));
        assert_eq!(per_nm.value_label(), "uE/um");
        assert_eq!(per_nm.return_label(), "W/m^2/nm");
        assert_eq!(band.return_label(), "W/m^2");

        let mm = Request::new(Direction::PhotonFluxToIrradiance, vec![1.0], vec![4e-4])
            .with_units("uE", "mm", "W/m^2")
            .convert()
            .unwrap();
        assert!(relative_eq(mm.rows[0].result, band.rows[0].result * 1e-6, 1e-12));
    }

    #[test]
    fn test_irradiance_to_flux_is_not_spectral_by_default() {
        let request = Request::new(Direction::IrradianceToPhotonFlux, vec![1.0], vec![0.55])
            .with_units("W/m^2", "um", "uE");
        assert!(!request.spectral);

        let spectral = request.clone().with_spectral(true).convert().unwrap();
        let band = request.convert().unwrap();
        assert!(relative_eq(spectral.rows[0].result, band.rows[0].result * 1e-3, 1e-12));
        assert_eq!(spectral.return_label(), "uE/nm");
    }

    #[test]
    fn test_request_rejects_non_finite() {
        let err = Request::new(
            Direction::IrradianceToPhotonFlux,
            vec![1.0, f64::NAN, f64::INFINITY],
            vec![550.0],
        )
        .convert()
        .unwrap_err();

        assert!(matches!(
            err,
            ConvertError::Input(InputError::NotFinite { position: 1, .. })
        ));
        assert_eq!(
            err.hint(),
            "Please enter valid numeric values of the same length."
        );

        let err = Request::new(
            Direction::IrradianceToPhotonFlux,
            vec![1.0],
            vec![f64::INFINITY],
        )
        .convert()
        .unwrap_err();
        assert!(matches!(err, ConvertError::Input(_)));
    }

    #[test]
    fn test_request_rejects_bad_units() {
        let request = Request::new(Direction::IrradianceToPhotonFlux, vec![1.0], vec![500.0]);

        let err = request.clone().with_units("uE", "nm", "uE").convert().unwrap_err();
        assert!(matches!(err, ConvertError::Unit(_)));
        assert_eq!(err.hint(), "Please enter valid units.");

        let err = request.with_units("W/m^2", "furlong", "uE").convert().unwrap_err();
        assert!(matches!(err, ConvertError::Unit(_)));
    }

    #[test]
    fn test_request_rejects_non_positive_wavelength() {
        let err = Request::new(
            Direction::IrradianceToPhotonFlux,
            vec![1.0, 2.0],
            vec![500.0, 0.0],
        )
        .convert()
        .unwrap_err();

        assert_eq!(
            err,
            ConvertError::NonPositiveWavelength {
                index: 1,
                value: 0.0
            }
        );
    }

    #[test]
    fn test_request_rejects_empty_values() {
        let err = Request::new(Direction::PhotonFluxToIrradiance, vec![], vec![500.0])
            .convert()
            .unwrap_err();
        assert_eq!(err, ConvertError::Empty);
        assert_eq!(
            err.hint(),
            "Please enter valid numeric values of the same length."
        );
    }
}
