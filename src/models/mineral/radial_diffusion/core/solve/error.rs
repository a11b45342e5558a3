use thiserror::Error;
use uom::si::f64::{ThermodynamicTemperature, Time};

use crate::support::tridiagonal::TridiagonalError;

/// Errors that can occur while solving for a diffusion profile.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    /// The duration is zero, negative, or not finite.
    #[error("invalid duration {0:?}: must be positive and finite")]
    InvalidDuration(Time),

    /// A path temperature is not finite or not above absolute zero.
    #[error("invalid thermal path: start={start:?}, end={end:?}")]
    InvalidTemperature {
        /// Path start temperature.
        start: ThermodynamicTemperature,
        /// Path end temperature.
        end: ThermodynamicTemperature,
    },

    /// An initial concentration level is not finite.
    #[error("initial levels must be finite: core={core}, rim={rim}")]
    InvalidLevels {
        /// Core level.
        core: f64,
        /// Rim level.
        rim: f64,
    },

    /// The time-step configuration does not describe a positive increment.
    #[error("invalid time step: {0}")]
    InvalidTimeStep(&'static str),

    /// A time step produced an unusable system or a non-finite profile.
    #[error("numerical instability at step {step} of {steps}")]
    NumericalInstability {
        /// Zero-based step that failed.
        step: usize,
        /// Total steps requested.
        steps: usize,
        /// What went wrong.
        #[source]
        source: Instability,
    },
}

/// The specific failure behind [`SolveError::NumericalInstability`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Instability {
    /// The tridiagonal sweep broke down.
    #[error(transparent)]
    Tridiagonal(#[from] TridiagonalError),

    /// A concentration became NaN or infinite.
    #[error("non-finite concentration {value} at node {node}")]
    NonFinite {
        /// Offending node.
        node: usize,
        /// Offending value.
        value: f64,
    },

    /// The diffusivity became NaN or infinite.
    #[error("non-finite diffusivity {0} um^2/s")]
    Diffusivity(f64),
}
