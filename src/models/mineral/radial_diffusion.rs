//! Radial diffusion in core–rim zoned grains.
//!
//! [`RadialDiffusion`] binds a grain geometry, a linear cooling path, the
//! initial core and rim levels, and Arrhenius diffusion laws. It solves for
//! the profile after a given duration and searches a set of candidate
//! durations for the one that best matches a measured profile.
//!
//! # Example
//!
//! ```
//! use diffusion_chronometry::models::mineral::radial_diffusion::{
//!     Arrhenius, BoundaryLevels, Geometry, LinearCooling, RadialDiffusion,
//! };
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature, Time},
//!     length::micrometer,
//!     thermodynamic_temperature::degree_celsius,
//!     time::year,
//! };
//!
//! let geometry = Geometry::new(
//!     Length::new::<micrometer>(50.0),
//!     Length::new::<micrometer>(150.0),
//!     Length::new::<micrometer>(1.0),
//! )?;
//! let cooling = LinearCooling::new(
//!     ThermodynamicTemperature::new::<degree_celsius>(1033.0),
//!     ThermodynamicTemperature::new::<degree_celsius>(950.0),
//! );
//! let model = RadialDiffusion::new(
//!     geometry,
//!     cooling,
//!     BoundaryLevels::new(0.8, 0.3),
//!     Arrhenius::default(),
//! );
//!
//! let profile = model.solve(Time::new::<year>(10.0))?;
//! assert_eq!(profile.len(), 151);
//! assert_eq!(profile.core().last(), profile.rim().first());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    Arrhenius, BoundaryLevels, CandidateDurations, Evaluation, Fit, FitError, GAS_CONSTANT,
    Geometry, GeometryError, GrowthThenDiffusion, Instability, LinearCooling, MAX_STEPS,
    ObservedProfile, Profile, ProxyError, RadialDiffusion, Segment, SegmentLaws, SolveError,
    SolverConfig, TimeStep, equivalent_duration, path_averaged_diffusivity,
};

use twine_core::Model;
use uom::si::f64::Time;

/// Runs the solver for the input duration.
impl Model for RadialDiffusion {
    type Input = Time;
    type Output = Profile;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.solve(*input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, ThermodynamicTemperature},
        length::micrometer,
        thermodynamic_temperature::degree_celsius,
        time::year,
    };

    #[test]
    fn model_call_matches_solve() {
        let model = RadialDiffusion::new(
            Geometry::new(
                Length::new::<micrometer>(4.0),
                Length::new::<micrometer>(10.0),
                Length::new::<micrometer>(1.0),
            )
            .unwrap(),
            LinearCooling::new(
                ThermodynamicTemperature::new::<degree_celsius>(1100.0),
                ThermodynamicTemperature::new::<degree_celsius>(1000.0),
            ),
            BoundaryLevels::new(1.0, 0.0),
            Arrhenius::default(),
        );
        let duration = Time::new::<year>(3.0);
        assert_eq!(model.call(&duration), model.solve(duration));
    }
}
