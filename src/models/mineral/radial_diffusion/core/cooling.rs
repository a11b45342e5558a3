//! Linear cooling paths.

use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    thermodynamic_temperature::kelvin,
    time::{hour, second},
};

use crate::support::units::{CoolingRate, CoolingRateExt};

/// Temperature falling linearly from `start` to `end` over a duration.
///
/// The duration is not part of the path; the same path is stretched over
/// every duration the solver or calibration search is asked about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCooling {
    /// Temperature at the start of diffusion.
    pub start: ThermodynamicTemperature,

    /// Temperature at the end of diffusion.
    pub end: ThermodynamicTemperature,
}

impl LinearCooling {
    /// Creates a path from its end-point temperatures.
    #[must_use]
    pub fn new(start: ThermodynamicTemperature, end: ThermodynamicTemperature) -> Self {
        Self { start, end }
    }

    /// Temperature drop `start − end` in kelvin. Negative for heating paths.
    #[must_use]
    pub fn drop_kelvin(&self) -> f64 {
        self.start.get::<kelvin>() - self.end.get::<kelvin>()
    }

    /// Temperature at a fraction `s ∈ [0, 1]` of the way along the path.
    #[must_use]
    pub fn temperature_at(&self, s: f64) -> ThermodynamicTemperature {
        let t = self.start.get::<kelvin>() - s * self.drop_kelvin();
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    /// Signed cooling rate when the path spans `duration`.
    #[must_use]
    pub fn rate_over(&self, duration: Time) -> CoolingRate {
        CoolingRate::from_kelvin_per_second(self.drop_kelvin() / duration.get::<second>())
    }

    /// Cooling-rate magnitude when the path spans `duration`, as `|ΔT| / hours`.
    #[must_use]
    pub fn rate_magnitude_over(&self, duration: Time) -> CoolingRate {
        CoolingRate::from_kelvin_per_hour(self.drop_kelvin().abs() / duration.get::<hour>())
    }

    /// Whether both end points are finite and above absolute zero.
    pub(crate) fn is_physical(&self) -> bool {
        [self.start, self.end]
            .iter()
            .all(|t| t.get::<kelvin>().is_finite() && t.get::<kelvin>() > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{thermodynamic_temperature::degree_celsius, time::year};

    fn path() -> LinearCooling {
        LinearCooling::new(
            ThermodynamicTemperature::new::<degree_celsius>(1033.0),
            ThermodynamicTemperature::new::<degree_celsius>(950.0),
        )
    }

    #[test]
    fn interpolates_temperature() {
        let mid = path().temperature_at(0.5);
        assert_relative_eq!(mid.get::<degree_celsius>(), 991.5, epsilon = 1e-9);
        assert_relative_eq!(path().drop_kelvin(), 83.0, epsilon = 1e-9);
    }

    #[test]
    fn rate_in_degrees_per_hour() {
        let duration = Time::new::<hour>(83.0);
        assert_relative_eq!(
            path().rate_magnitude_over(duration).kelvin_per_hour(),
            1.0,
            epsilon = 1e-9
        );

        let heating = LinearCooling::new(path().end, path().start);
        assert_relative_eq!(
            heating.rate_magnitude_over(duration).kelvin_per_hour(),
            1.0,
            epsilon = 1e-9
        );
        assert!(heating.rate_over(duration).kelvin_per_second() < 0.0);
    }

    #[test]
    fn rate_over_years() {
        let one_year = Time::new::<year>(1.0);
        let rate = path().rate_over(one_year);
        assert_relative_eq!(
            rate.kelvin_per_second(),
            83.0 / one_year.get::<second>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejects_unphysical_temperatures() {
        assert!(path().is_physical());
        let frozen = LinearCooling::new(
            ThermodynamicTemperature::new::<kelvin>(0.0),
            ThermodynamicTemperature::new::<kelvin>(300.0),
        );
        assert!(!frozen.is_physical());
    }
}
