use uom::si::{f64::Length, length::micrometer};

use super::FitError;

/// Measured concentrations at distances from the grain center.
///
/// Positions need not be sorted, evenly spaced, or inside the modeled grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedProfile {
    positions_um: Vec<f64>,
    values: Vec<f64>,
}

impl ObservedProfile {
    /// Pairs positions with measured values.
    ///
    /// # Errors
    ///
    /// Returns a [`FitError`] if the lengths differ, fewer than two
    /// observations are given, or any position or value is not finite.
    pub fn new(positions: &[Length], values: Vec<f64>) -> Result<Self, FitError> {
        if positions.len() != values.len() {
            return Err(FitError::LengthMismatch {
                positions: positions.len(),
                values: values.len(),
            });
        }
        if values.len() < 2 {
            return Err(FitError::TooFewObservations(values.len()));
        }

        let positions_um: Vec<f64> = positions.iter().map(|p| p.get::<micrometer>()).collect();
        if let Some(i) = positions_um
            .iter()
            .zip(&values)
            .position(|(p, v)| !(p.is_finite() && v.is_finite()))
        {
            return Err(FitError::NonFiniteObservation(i));
        }

        Ok(Self {
            positions_um,
            values,
        })
    }

    /// Observed positions in micrometres.
    #[must_use]
    pub fn positions_um(&self) -> &[f64] {
        &self.positions_um
    }

    /// Observed values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations; at least two.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
