//! Grid search for the diffusion duration that best explains an observed profile.
//!
//! Every candidate duration is solved independently, the modeled profile is
//! interpolated onto the observed positions, and the sample variance of the
//! residuals is the misfit. The first candidate with the smallest misfit wins.

mod config;
mod error;
mod observed;

pub use config::CandidateDurations;
pub use error::FitError;
pub use observed::ObservedProfile;

use twine_core::Model;
use uom::si::{f64::Time, time::year};

use crate::support::{interp::Linear, units::CoolingRate};

use super::{Profile, SolveError};

/// Misfit of one candidate, handed to the search observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Position of the candidate in the search order.
    pub index: usize,

    /// Candidate duration.
    pub duration: Time,

    /// Sample variance of modeled minus observed values.
    pub misfit: f64,
}

/// Result of a calibration search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Best-fit diffusion duration.
    pub duration: Time,

    /// Implied cooling rate, `|T_start − T_end| / duration`.
    pub cooling_rate: CoolingRate,

    /// Misfit at the best-fit duration.
    pub misfit: f64,

    /// Position of the best-fit duration among the candidates.
    pub index: usize,
}

/// Evaluates every candidate with `model` and returns the best one.
///
/// `observer` sees each evaluation in search order, which is how callers can
/// record the misfit-versus-duration curve.
///
/// # Errors
///
/// Returns [`FitError::Solve`] for the first candidate the model fails on.
pub(super) fn search<M>(
    model: &M,
    observed: &ObservedProfile,
    candidates: &CandidateDurations,
    mut observer: impl FnMut(&Evaluation),
) -> Result<Evaluation, FitError>
where
    M: Model<Input = Time, Output = Profile, Error = SolveError>,
{
    let mut best: Option<Evaluation> = None;

    for (index, duration) in candidates.as_slice().iter().enumerate() {
        let profile = model
            .call(duration)
            .map_err(|source| FitError::Solve { index, source })?;

        let radii = profile.radii_um();
        let modeled = Linear::new(&radii, profile.concentrations())?
            .eval_all(observed.positions_um());
        let misfit = sample_variance(
            modeled
                .iter()
                .zip(observed.values())
                .map(|(m, o)| m - o),
        );

        log::debug!(
            "candidate {index}: {:.4} years, misfit {misfit:.6e}",
            duration.get::<year>()
        );

        let evaluation = Evaluation {
            index,
            duration: *duration,
            misfit,
        };
        observer(&evaluation);

        if best.is_none_or(|b| misfit < b.misfit) {
            best = Some(evaluation);
        }
    }

    best.ok_or(FitError::NoCandidates)
}

/// Sample variance with `n − 1` in the denominator.
///
/// Returns NaN for fewer than two values.
fn sample_variance(values: impl Iterator<Item = f64> + Clone) -> f64 {
    let (n, sum) = values.clone().fold((0_usize, 0.0), |(n, s), v| (n + 1, s + v));
    if n < 2 {
        return f64::NAN;
    }
    let mean = sum / n as f64;
    let squares: f64 = values.map(|v| (v - mean).powi(2)).sum();
    squares / (n - 1) as f64
}
