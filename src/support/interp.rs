//! Piecewise-linear interpolation with linear extrapolation.

use std::cmp::Ordering;

use thiserror::Error;

/// Errors from building or evaluating an interpolant.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InterpError {
    /// The abscissa and ordinate slices differ in length.
    #[error("length mismatch: {xs} abscissae, {ys} ordinates")]
    LengthMismatch {
        /// Number of abscissae.
        xs: usize,
        /// Number of ordinates.
        ys: usize,
    },

    /// At least two knots are needed to define a line.
    #[error("at least 2 knots required, got {0}")]
    TooFewKnots(usize),

    /// Abscissae must be finite and strictly increasing.
    #[error("abscissae not strictly increasing at index {0}")]
    NotIncreasing(usize),
}

/// A linear interpolant over strictly increasing knots.
///
/// Queries outside the knot range are extrapolated along the first or last
/// segment rather than clamped.
#[derive(Debug, Clone, Copy)]
pub struct Linear<'a> {
    xs: &'a [f64],
    ys: &'a [f64],
}

impl<'a> Linear<'a> {
    /// Creates an interpolant over the given knots.
    ///
    /// # Errors
    ///
    /// Returns an [`InterpError`] if the slices differ in length, hold fewer
    /// than two knots, or `xs` is not strictly increasing.
    pub fn new(xs: &'a [f64], ys: &'a [f64]) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(InterpError::TooFewKnots(xs.len()));
        }
        if !xs[0].is_finite() {
            return Err(InterpError::NotIncreasing(0));
        }
        let increasing = |w: &[f64]| w[1].partial_cmp(&w[0]) == Some(Ordering::Greater);
        if let Some(i) = xs
            .windows(2)
            .position(|w| !increasing(w) || !w[1].is_finite())
        {
            return Err(InterpError::NotIncreasing(i + 1));
        }
        Ok(Self { xs, ys })
    }

    /// Evaluates the interpolant at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        // Index of the segment [xs[i], xs[i + 1]] used for x.
        let i = match self.xs.partition_point(|&knot| knot <= x) {
            0 => 0,
            p if p >= n => n - 2,
            p => p - 1,
        };
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        y0 + (x - x0) * (y1 - y0) / (x1 - x0)
    }

    /// Evaluates the interpolant at every query point.
    #[must_use]
    pub fn eval_all(&self, queries: &[f64]) -> Vec<f64> {
        queries.iter().map(|&x| self.eval(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn hits_knots_and_midpoints() {
        let xs = [0.0, 1.0, 3.0];
        let ys = [0.0, 2.0, 0.0];
        let f = Linear::new(&xs, &ys).unwrap();

        assert_relative_eq!(f.eval(0.0), 0.0);
        assert_relative_eq!(f.eval(1.0), 2.0);
        assert_relative_eq!(f.eval(3.0), 0.0);
        assert_relative_eq!(f.eval(0.5), 1.0);
        assert_relative_eq!(f.eval(2.0), 1.0);
    }

    #[test]
    fn extrapolates_linearly() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.0, 2.0, 4.0];
        let f = Linear::new(&xs, &ys).unwrap();

        // Below the range follows the first segment, above follows the last.
        assert_relative_eq!(f.eval(-1.0), 0.0);
        assert_relative_eq!(f.eval(3.0), 6.0);
        assert_eq!(f.eval_all(&[-1.0, 3.0]), vec![0.0, 6.0]);
    }

    #[test]
    fn rejects_bad_knots() {
        assert_eq!(
            Linear::new(&[0.0, 1.0], &[0.0]).unwrap_err(),
            InterpError::LengthMismatch { xs: 2, ys: 1 }
        );
        assert_eq!(
            Linear::new(&[0.0], &[0.0]).unwrap_err(),
            InterpError::TooFewKnots(1)
        );
        assert_eq!(
            Linear::new(&[0.0, 2.0, 2.0], &[0.0, 1.0, 2.0]).unwrap_err(),
            InterpError::NotIncreasing(2)
        );
        assert_eq!(
            Linear::new(&[0.0, f64::NAN], &[0.0, 1.0]).unwrap_err(),
            InterpError::NotIncreasing(1)
        );
    }
}
