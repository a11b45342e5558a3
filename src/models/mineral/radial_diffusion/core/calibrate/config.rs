use uom::si::{f64::Time, time::year};

use super::FitError;

/// Ordered trial durations for the calibration search.
///
/// The bounds and count are configuration, not properties of the mineral.
/// Widen them when the best fit lands on either end of the range.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateDurations {
    durations: Vec<Time>,
}

impl CandidateDurations {
    /// `count` durations spaced evenly from `lower` to `upper` inclusive.
    ///
    /// A single candidate sits at `lower`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::NoCandidates`] if `count` is zero, or
    /// [`FitError::InvalidCandidate`] if a bound is not positive and finite.
    pub fn linspace(lower: Time, upper: Time, count: usize) -> Result<Self, FitError> {
        if count == 0 {
            return Err(FitError::NoCandidates);
        }
        let step = if count > 1 {
            (upper - lower) / (count - 1) as f64
        } else {
            lower - lower
        };
        Self::from_durations((0..count).map(|i| lower + step * i as f64).collect())
    }

    /// Uses the given durations in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::NoCandidates`] if `durations` is empty, or
    /// [`FitError::InvalidCandidate`] naming the first duration that is not
    /// positive and finite.
    pub fn from_durations(durations: Vec<Time>) -> Result<Self, FitError> {
        if durations.is_empty() {
            return Err(FitError::NoCandidates);
        }
        if let Some(index) = durations.iter().position(|d| {
            let years = d.get::<year>();
            !(years.is_finite() && years > 0.0)
        }) {
            return Err(FitError::InvalidCandidate {
                index,
                duration: durations[index],
            });
        }
        Ok(Self { durations })
    }

    /// Candidates in search order.
    #[must_use]
    pub fn as_slice(&self) -> &[Time] {
        &self.durations
    }

    /// Number of candidates; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }
}

/// 100 durations from 0.1 to 100 years.
impl Default for CandidateDurations {
    fn default() -> Self {
        let (lower, upper, count) = (0.1, 100.0, 100);
        let step = (upper - lower) / f64::from(count - 1);
        Self {
            durations: (0..count)
                .map(|i| Time::new::<year>(lower + step * f64::from(i)))
                .collect(),
        }
    }
}
