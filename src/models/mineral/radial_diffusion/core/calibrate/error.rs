use thiserror::Error;
use uom::si::f64::Time;

use crate::{models::mineral::radial_diffusion::core::SolveError, support::interp::InterpError};

/// Errors that can occur during the calibration search.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FitError {
    /// Observed positions and values differ in length.
    #[error("observed profile has {positions} positions but {values} values")]
    LengthMismatch {
        /// Number of positions.
        positions: usize,
        /// Number of values.
        values: usize,
    },

    /// A sample variance needs at least two observations.
    #[error("at least 2 observations required, got {0}")]
    TooFewObservations(usize),

    /// An observed position or value is NaN or infinite.
    #[error("non-finite observation at index {0}")]
    NonFiniteObservation(usize),

    /// The candidate set is empty.
    #[error("no candidate durations")]
    NoCandidates,

    /// A candidate duration is not positive and finite.
    #[error("candidate {index} has invalid duration {duration:?}")]
    InvalidCandidate {
        /// Position in the candidate set.
        index: usize,
        /// The offending duration.
        duration: Time,
    },

    /// The solver failed for one candidate.
    #[error("solve failed for candidate {index}")]
    Solve {
        /// Position in the candidate set.
        index: usize,
        /// Underlying solver error.
        #[source]
        source: SolveError,
    },

    /// A modeled profile could not be interpolated.
    #[error(transparent)]
    Interpolation(#[from] InterpError),
}
