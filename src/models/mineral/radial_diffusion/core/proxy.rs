//! Equivalent-duration subtraction for growth-then-diffusion histories.
//!
//! A slow-diffusing element's zoning stands in for the fast element's profile
//! at the end of growth. With a shared spatially uniform diffusivity history
//! the profile depends only on `∫D dt`, and along a linear cooling path that
//! integral is the duration times the path-averaged diffusivity. The fast
//! element therefore needs
//!
//! ```text
//! t_eq = t_slow · ⟨D_slow⟩ / ⟨D_fast⟩
//! ```
//!
//! to reach the slow element's shape, and the diffusion time left over is the
//! fast element's best fit minus `t_eq`. This is an approximation to joint
//! diffusion of both elements, not a coupled solve.

use thiserror::Error;
use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    time::second,
};

use crate::support::units::{Diffusivity, DiffusivityExt};

use super::{Arrhenius, LinearCooling};

/// Midpoint samples along the normalized cooling path.
const PATH_SAMPLES: usize = 1000;

/// Errors from the equivalent-duration calculation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProxyError {
    /// A duration is zero, negative, or not finite.
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

    /// A path-averaged diffusivity is zero or not finite.
    #[error("path-averaged diffusivity {0} m^2/s is unusable")]
    Diffusivity(f64),

    /// The slow element's profile needs more fast-element time than the fit found.
    #[error("equivalent duration {equivalent:?} exceeds the fast-element fit {fit:?}")]
    EquivalentExceedsFit {
        /// Fast-element time equivalent to the slow element's fit.
        equivalent: Time,
        /// Best-fit duration of the fast element.
        fit: Time,
    },
}

/// Mean diffusivity along `cooling`, weighting every fraction of the path equally.
#[must_use]
pub fn path_averaged_diffusivity(law: &Arrhenius, cooling: &LinearCooling) -> Diffusivity {
    let sum: f64 = (0..PATH_SAMPLES)
        .map(|i| {
            let s = (i as f64 + 0.5) / PATH_SAMPLES as f64;
            law.diffusivity(cooling.temperature_at(s))
                .square_meters_per_second()
        })
        .sum();
    Diffusivity::from_square_meters_per_second(sum / PATH_SAMPLES as f64)
}

/// Fast-element duration giving the same `∫D dt` as `slow_duration` of the
/// slow element, both along `cooling`.
///
/// # Errors
///
/// Returns a [`ProxyError`] for an invalid duration or path, or when either
/// averaged diffusivity is zero or not finite.
pub fn equivalent_duration(
    slow: &Arrhenius,
    fast: &Arrhenius,
    cooling: &LinearCooling,
    slow_duration: Time,
) -> Result<Time, ProxyError> {
    check_duration(slow_duration)?;
    if !cooling.is_physical() {
        return Err(ProxyError::InvalidTemperature {
            start: cooling.start,
            end: cooling.end,
        });
    }

    let d_slow = usable(path_averaged_diffusivity(slow, cooling))?;
    let d_fast = usable(path_averaged_diffusivity(fast, cooling))?;
    Ok(slow_duration * (d_slow / d_fast))
}

/// Two elements sharing one cooling path, with the slow element's fit known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthThenDiffusion {
    /// Law of the element whose zoning is the proxy initial condition.
    pub slow: Arrhenius,

    /// Law of the element being dated.
    pub fast: Arrhenius,

    /// Shared cooling path.
    pub cooling: LinearCooling,

    /// Best-fit duration of the slow element.
    pub slow_duration: Time,
}

impl GrowthThenDiffusion {
    /// Fast-element time equivalent to the slow element's fit.
    ///
    /// # Errors
    ///
    /// See [`equivalent_duration`].
    pub fn equivalent_duration(&self) -> Result<Time, ProxyError> {
        equivalent_duration(&self.slow, &self.fast, &self.cooling, self.slow_duration)
    }

    /// Diffusion time remaining after growth: `fast_fit − t_eq`.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::EquivalentExceedsFit`] if the remainder would be
    /// negative, or any error from [`equivalent_duration`].
    pub fn residual(&self, fast_fit: Time) -> Result<Time, ProxyError> {
        check_duration(fast_fit)?;
        let equivalent = self.equivalent_duration()?;
        let remaining = fast_fit - equivalent;
        if remaining.get::<second>() < 0.0 {
            return Err(ProxyError::EquivalentExceedsFit {
                equivalent,
                fit: fast_fit,
            });
        }
        Ok(remaining)
    }
}

fn check_duration(duration: Time) -> Result<(), ProxyError> {
    let s = duration.get::<second>();
    if s.is_finite() && s > 0.0 {
        Ok(())
    } else {
        Err(ProxyError::InvalidDuration(duration))
    }
}

fn usable(d: Diffusivity) -> Result<f64, ProxyError> {
    let value = d.square_meters_per_second();
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ProxyError::Diffusivity(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::MolarEnergy, molar_energy::kilojoule_per_mole, time::year};

    use crate::models::mineral::radial_diffusion::core::test_support::{
        constant_law, cooling, scenario, years,
    };

    /// Lower activation energy than the default law, about ten times faster near 1000 °C.
    fn fast_law() -> Arrhenius {
        Arrhenius::new(
            Diffusivity::from_square_meters_per_second(3.5e-9),
            MolarEnergy::new::<kilojoule_per_mole>(250.0),
        )
    }

    #[test]
    fn constant_laws_scale_by_diffusivity_ratio() {
        let t = equivalent_duration(
            &constant_law(1e-20),
            &constant_law(4e-20),
            &cooling(),
            years(8.0),
        )
        .unwrap();
        assert_relative_eq!(t.get::<year>(), 2.0, max_relative = 1e-12);
    }

    #[test]
    fn same_law_is_identity() {
        let law = Arrhenius::default();
        let t = equivalent_duration(&law, &law, &cooling(), years(7.5)).unwrap();
        assert_relative_eq!(t.get::<year>(), 7.5, max_relative = 1e-12);
    }

    #[test]
    fn average_lies_between_end_point_values() {
        let law = Arrhenius::default();
        let path = cooling();
        let mean = path_averaged_diffusivity(&law, &path).square_meters_per_second();
        let cold = law.diffusivity(path.end).square_meters_per_second();
        let hot = law.diffusivity(path.start).square_meters_per_second();
        assert!(cold < mean && mean < hot);
    }

    #[test]
    fn equivalent_duration_reproduces_slow_profile() {
        let slow_duration = years(50.0);
        let t_eq =
            equivalent_duration(&Arrhenius::default(), &fast_law(), &cooling(), slow_duration)
                .unwrap();

        let slow = scenario().solve(slow_duration).unwrap();
        let fast = scenario().with_laws(fast_law()).solve(t_eq).unwrap();

        for (a, b) in slow.concentrations().iter().zip(fast.concentrations()) {
            assert!((a - b).abs() < 5e-3, "{a} vs {b}");
        }
    }

    #[test]
    fn residual_subtracts_equivalent_time() {
        let history = GrowthThenDiffusion {
            slow: constant_law(1e-20),
            fast: constant_law(1e-19),
            cooling: cooling(),
            slow_duration: years(30.0),
        };
        let remaining = history.residual(years(10.0)).unwrap();
        assert_relative_eq!(remaining.get::<year>(), 7.0, max_relative = 1e-9);

        assert!(matches!(
            history.residual(years(2.0)),
            Err(ProxyError::EquivalentExceedsFit { .. })
        ));
    }

    #[test]
    fn rejects_invalid_inputs() {
        let law = Arrhenius::default();
        assert!(matches!(
            equivalent_duration(&law, &law, &cooling(), years(0.0)),
            Err(ProxyError::InvalidDuration(_))
        ));
        assert!(matches!(
            equivalent_duration(&law, &constant_law(0.0), &cooling(), years(1.0)),
            Err(ProxyError::Diffusivity(_))
        ));
    }
}
