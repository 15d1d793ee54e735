//! Physical constants
//!
//! Exact SI values as fixed by the 2019 redefinition of the SI base units.

/// Planck constant (J s)
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Speed of light in vacuum (m s^-1)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Avogadro constant (mol^-1)
pub const AVOGADRO: f64 = 6.022_140_76e23;

/// Energy of one mole of photons times wavelength, h * c * N_A (J m mol^-1)
pub const MOLAR_PHOTON_ENERGY: f64 = PLANCK * SPEED_OF_LIGHT * AVOGADRO;
