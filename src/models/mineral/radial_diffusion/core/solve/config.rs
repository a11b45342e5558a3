use std::num::NonZeroUsize;

/// How the solver divides a duration into time steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeStep {
    /// Fixed increment proportional to the duration: `dt = years × seconds_per_year`,
    /// with the step count rounded from `duration / dt`.
    ///
    /// The step count is therefore independent of duration and diffusivity.
    /// Schedules above [`MAX_STEPS`](super::MAX_STEPS) steps are rejected.
    /// Crank–Nicolson stays stable for any increment, but the result differs
    /// from a diffusivity-resolved step, so changing this changes profiles.
    DurationScaled {
        /// Seconds of increment per year of duration.
        seconds_per_year: f64,
    },

    /// Divide the duration into exactly this many equal steps.
    Steps(NonZeroUsize),
}

/// Solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Time-step policy.
    pub time_step: TimeStep,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_step: TimeStep::DurationScaled {
                seconds_per_year: 1e4,
            },
        }
    }
}
