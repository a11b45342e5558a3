//! Crank–Nicolson time stepping of the two-segment radial diffusion problem.

mod assembly;
mod config;
mod error;

pub use config::{SolverConfig, TimeStep};
pub use error::{Instability, SolveError};

use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::kelvin,
    time::{second, year},
};

use crate::support::{tridiagonal::TridiagonalError, units::DiffusivityExt};

use super::{Arrhenius, Profile, RadialDiffusion};

use assembly::{Alphas, CrankNicolson};

/// Largest step count a schedule may ask for.
pub const MAX_STEPS: usize = 10_000_000;

/// Number of steps and the increment between them, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Schedule {
    steps: usize,
    dt: f64,
}

impl Schedule {
    fn new(time_step: TimeStep, duration: Time) -> Result<Self, SolveError> {
        let total = duration.get::<second>();
        match time_step {
            TimeStep::DurationScaled { seconds_per_year } => {
                if !(seconds_per_year.is_finite() && seconds_per_year > 0.0) {
                    return Err(SolveError::InvalidTimeStep(
                        "seconds_per_year must be positive and finite",
                    ));
                }
                let dt = duration.get::<year>() * seconds_per_year;
                let steps = (total / dt).round().max(1.0);
                if steps > MAX_STEPS as f64 {
                    return Err(SolveError::InvalidTimeStep(
                        "seconds_per_year too small: step count exceeds MAX_STEPS",
                    ));
                }
                Ok(Self {
                    steps: steps as usize,
                    dt,
                })
            }
            TimeStep::Steps(steps) if steps.get() > MAX_STEPS => {
                Err(SolveError::InvalidTimeStep("step count exceeds MAX_STEPS"))
            }
            TimeStep::Steps(steps) => Ok(Self {
                steps: steps.get(),
                dt: total / steps.get() as f64,
            }),
        }
    }
}

/// Evolves the piecewise-constant initial profile over `duration`.
///
/// Each step lowers the temperature by `rate × dt`, evaluates the segment
/// diffusivities there, reassembles the Crank–Nicolson operators, and solves
/// the implicit half with the Thomas algorithm. The interface node is a single
/// unknown shared by both segments, so the core and rim values coincide after
/// every step.
///
/// # Errors
///
/// Returns a [`SolveError`] for invalid inputs, or
/// [`SolveError::NumericalInstability`] if a step breaks down.
pub(super) fn solve(model: &RadialDiffusion, duration: Time) -> Result<Profile, SolveError> {
    let total = duration.get::<second>();
    if !(total.is_finite() && total > 0.0) {
        return Err(SolveError::InvalidDuration(duration));
    }
    if !model.cooling.is_physical() {
        return Err(SolveError::InvalidTemperature {
            start: model.cooling.start,
            end: model.cooling.end,
        });
    }
    if !model.levels.is_finite() {
        return Err(SolveError::InvalidLevels {
            core: model.levels.core,
            rim: model.levels.rim,
        });
    }

    let Schedule { steps, dt } = Schedule::new(model.config.time_step, duration)?;
    let grid = model.geometry.grid();
    let n = grid.len();
    let dr2 = grid.spacing_um * grid.spacing_um;

    log::debug!(
        "radial diffusion over {:.4e} years: {steps} steps of {dt:.4e} s on {n} nodes",
        duration.get::<year>()
    );

    let rate = model.cooling.drop_kelvin() / total;
    let mut temperature = model.cooling.start.get::<kelvin>();

    let mut concentrations = model.levels.initial_profile(&grid);
    let mut next = vec![0.0; n];
    let mut scratch = vec![0.0; n];
    let mut operators = CrankNicolson::new(n);

    for step in 0..steps {
        let unstable = |source: Instability| SolveError::NumericalInstability {
            step,
            steps,
            source,
        };

        temperature -= rate * dt;
        let t = ThermodynamicTemperature::new::<kelvin>(temperature);
        let alphas = Alphas {
            core: alpha(&model.laws.core, t, dt, dr2).map_err(unstable)?,
            rim: alpha(&model.laws.rim, t, dt, dr2).map_err(unstable)?,
        };

        operators.assemble(&grid, alphas);
        operators
            .explicit
            .apply(&concentrations, &mut next)
            .map_err(|e: TridiagonalError| unstable(e.into()))?;
        operators
            .implicit
            .solve_in_place(&mut next, &mut scratch)
            .map_err(|e| unstable(e.into()))?;

        if let Some(node) = next.iter().position(|c| !c.is_finite()) {
            return Err(unstable(Instability::NonFinite {
                node,
                value: next[node],
            }));
        }
        std::mem::swap(&mut concentrations, &mut next);
    }

    Ok(Profile::new(&grid, concentrations))
}

/// Diffusion number `D·dt / (2·dr²)` with `D` in μm²/s and `dr` in μm.
fn alpha(
    law: &Arrhenius,
    temperature: ThermodynamicTemperature,
    dt: f64,
    dr2: f64,
) -> Result<f64, Instability> {
    let d = law.diffusivity(temperature).square_micrometers_per_second();
    if !d.is_finite() {
        return Err(Instability::Diffusivity(d));
    }
    Ok(d * dt / (2.0 * dr2))
}
