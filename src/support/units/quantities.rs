use std::marker::PhantomData;

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P1, P2, Z0},
};

/// Diffusivity (diffusion coefficient), m²/s in SI.
pub type Diffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Cooling rate, K/s in SI.
pub type CoolingRate = Quantity<ISQ<Z0, Z0, N1, Z0, P1, Z0, Z0>, SI<f64>, f64>;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Constructors and accessors for [`Diffusivity`].
pub trait DiffusivityExt {
    /// Creates a diffusivity from a value in m²/s.
    fn from_square_meters_per_second(value: f64) -> Self;

    /// Returns the diffusivity in m²/s.
    fn square_meters_per_second(&self) -> f64;

    /// Returns the diffusivity in μm²/s.
    fn square_micrometers_per_second(&self) -> f64;
}

impl DiffusivityExt for Diffusivity {
    fn from_square_meters_per_second(value: f64) -> Self {
        Quantity {
            dimension: PhantomData,
            units: PhantomData,
            value,
        }
    }

    fn square_meters_per_second(&self) -> f64 {
        self.value
    }

    fn square_micrometers_per_second(&self) -> f64 {
        self.value * 1e12
    }
}

/// Constructors and accessors for [`CoolingRate`].
pub trait CoolingRateExt {
    /// Creates a cooling rate from a value in K/s.
    fn from_kelvin_per_second(value: f64) -> Self;

    /// Creates a cooling rate from a value in K/h.
    fn from_kelvin_per_hour(value: f64) -> Self;

    /// Returns the cooling rate in K/s.
    fn kelvin_per_second(&self) -> f64;

    /// Returns the cooling rate in K/h, which equals °C/h.
    fn kelvin_per_hour(&self) -> f64;
}

impl CoolingRateExt for CoolingRate {
    fn from_kelvin_per_second(value: f64) -> Self {
        Quantity {
            dimension: PhantomData,
            units: PhantomData,
            value,
        }
    }

    fn from_kelvin_per_hour(value: f64) -> Self {
        Self::from_kelvin_per_second(value / SECONDS_PER_HOUR)
    }

    fn kelvin_per_second(&self) -> f64 {
        self.value
    }

    fn kelvin_per_hour(&self) -> f64 {
        self.value * SECONDS_PER_HOUR
    }
}
