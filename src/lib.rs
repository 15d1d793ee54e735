//! Conversion between irradiance and photon flux.
//!
//! ```rust
//! use photonflux::convert::{Direction, Request};
//! use photonflux::report::Table;
//!
//! let conversion = Request::new(Direction::PhotonFluxToIrradiance, vec![1500.0], vec![660.0])
//!     .with_units("uE", "nm", "W/m^2")
//!     .convert()
//!     .unwrap();
//!
//! println!("{}", Table(&conversion));
//! ```

pub mod config;
pub mod constants;
pub mod convert;
pub mod input;
pub mod readers;
pub mod report;
pub mod units;
