//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical inputs (radii, temperatures,
//! durations, activation energies). This module adds the quantities the
//! diffusion models need that [`uom`] does not name directly:
//!
//! - [`Diffusivity`]: area per time, used for the Arrhenius pre-exponential factor.
//! - [`CoolingRate`]: temperature change per time, reported by the calibration search.
//!
//! ```
//! use diffusion_chronometry::support::units::{CoolingRate, CoolingRateExt};
//!
//! let rate = CoolingRate::from_kelvin_per_hour(3.6);
//! assert!((rate.kelvin_per_second() - 1e-3).abs() < 1e-15);
//! ```

mod quantities;

pub use quantities::{CoolingRate, CoolingRateExt, Diffusivity, DiffusivityExt};
