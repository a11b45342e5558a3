//! Radial diffusion in a core–rim zoned grain under linear cooling.
//!
//! A grain is modeled as a sphere split into a core and a rim, each starting
//! at a uniform concentration. Diffusion relaxes the step between them while
//! the temperature falls linearly, with an Arrhenius diffusivity re-evaluated
//! every time step. Comparing the relaxed profile with a measured one dates
//! the cooling history.

mod arrhenius;
mod calibrate;
mod cooling;
mod geometry;
mod profile;
mod proxy;
mod solve;

#[cfg(test)]
mod test_support;

pub use arrhenius::{Arrhenius, GAS_CONSTANT, SegmentLaws};
pub use calibrate::{CandidateDurations, Evaluation, Fit, FitError, ObservedProfile};
pub use cooling::LinearCooling;
pub use geometry::{Geometry, GeometryError, Segment};
pub use profile::{BoundaryLevels, Profile};
pub use proxy::{
    GrowthThenDiffusion, ProxyError, equivalent_duration, path_averaged_diffusivity,
};
pub use solve::{Instability, MAX_STEPS, SolveError, SolverConfig, TimeStep};

use uom::si::{f64::Time, time::year};

use crate::support::units::CoolingRateExt;

/// Entry point for solving and calibrating one grain.
///
/// Holds everything except the duration, which is the quantity the solver
/// is run for and the calibration search varies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialDiffusion {
    geometry: Geometry,
    cooling: LinearCooling,
    levels: BoundaryLevels,
    laws: SegmentLaws,
    config: SolverConfig,
}

impl RadialDiffusion {
    /// Binds a grain to its cooling path, initial levels, and diffusion laws,
    /// using the default [`SolverConfig`].
    #[must_use]
    pub fn new(
        geometry: Geometry,
        cooling: LinearCooling,
        levels: BoundaryLevels,
        laws: impl Into<SegmentLaws>,
    ) -> Self {
        Self {
            geometry,
            cooling,
            levels,
            laws: laws.into(),
            config: SolverConfig::default(),
        }
    }

    /// Replaces the solver configuration.
    #[must_use]
    pub fn with_config(self, config: SolverConfig) -> Self {
        Self { config, ..self }
    }

    /// Replaces the initial levels, e.g. to model a second element.
    #[must_use]
    pub fn with_levels(self, levels: BoundaryLevels) -> Self {
        Self { levels, ..self }
    }

    /// Replaces the diffusion laws.
    #[must_use]
    pub fn with_laws(self, laws: impl Into<SegmentLaws>) -> Self {
        Self {
            laws: laws.into(),
            ..self
        }
    }

    /// Grain geometry.
    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Cooling path.
    #[must_use]
    pub fn cooling(&self) -> LinearCooling {
        self.cooling
    }

    /// Initial core and rim levels.
    #[must_use]
    pub fn levels(&self) -> BoundaryLevels {
        self.levels
    }

    /// Diffusion laws per segment.
    #[must_use]
    pub fn laws(&self) -> SegmentLaws {
        self.laws
    }

    /// Solver configuration.
    #[must_use]
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Solves for the profile after diffusing for `duration` along the
    /// cooling path.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] for a non-positive duration, an unphysical
    /// path, non-finite levels, or a step that fails numerically.
    pub fn solve(&self, duration: Time) -> Result<Profile, SolveError> {
        solve::solve(self, duration)
    }

    /// Finds the candidate duration whose profile best matches `observed`.
    ///
    /// # Errors
    ///
    /// Returns a [`FitError`] if any candidate fails to solve.
    pub fn fit(
        &self,
        observed: &ObservedProfile,
        candidates: &CandidateDurations,
    ) -> Result<Fit, FitError> {
        self.fit_observed(observed, candidates, |_| {})
    }

    /// Like [`fit`](Self::fit), reporting every candidate's misfit to `observer`.
    ///
    /// # Errors
    ///
    /// Returns a [`FitError`] if any candidate fails to solve.
    pub fn fit_observed(
        &self,
        observed: &ObservedProfile,
        candidates: &CandidateDurations,
        observer: impl FnMut(&Evaluation),
    ) -> Result<Fit, FitError> {
        let best = calibrate::search(self, observed, candidates, observer)?;
        let cooling_rate = self.cooling.rate_magnitude_over(best.duration);

        log::info!(
            "best fit {:.4} years at {:.4} K/h, misfit {:.6e}",
            best.duration.get::<year>(),
            cooling_rate.kelvin_per_hour(),
            best.misfit
        );

        Ok(Fit {
            duration: best.duration,
            cooling_rate,
            misfit: best.misfit,
            index: best.index,
        })
    }
}
