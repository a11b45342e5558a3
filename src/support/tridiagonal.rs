//! Tridiagonal matrices stored as three coefficient sequences.
//!
//! Row `i` of a [`Tridiagonal`] reads
//! `lower[i] * x[i-1] + diag[i] * x[i] + upper[i] * x[i+1]`,
//! with `lower[0]` and `upper[n-1]` ignored.

use thiserror::Error;

/// Errors from tridiagonal products and solves.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TridiagonalError {
    /// A vector did not match the matrix order.
    #[error("length mismatch: matrix order is {expected}, vector has {got}")]
    LengthMismatch {
        /// Matrix order.
        expected: usize,
        /// Length of the offending vector.
        got: usize,
    },

    /// Forward elimination produced a zero or non-finite pivot.
    #[error("singular pivot {pivot} at row {row}")]
    SingularPivot {
        /// Row where elimination broke down.
        row: usize,
        /// The pivot value encountered.
        pivot: f64,
    },
}

/// A square tridiagonal matrix in banded storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Tridiagonal {
    /// Sub-diagonal coefficients; `lower[0]` is unused.
    pub lower: Vec<f64>,
    /// Main diagonal coefficients.
    pub diag: Vec<f64>,
    /// Super-diagonal coefficients; `upper[n-1]` is unused.
    pub upper: Vec<f64>,
}

impl Tridiagonal {
    /// Creates an `n × n` zero matrix.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self {
            lower: vec![0.0; n],
            diag: vec![0.0; n],
            upper: vec![0.0; n],
        }
    }

    /// Returns the matrix order.
    #[must_use]
    pub fn order(&self) -> usize {
        self.diag.len()
    }

    /// Sets row `i` to the given coefficients.
    pub fn set_row(&mut self, i: usize, lower: f64, diag: f64, upper: f64) {
        self.lower[i] = lower;
        self.diag[i] = diag;
        self.upper[i] = upper;
    }

    /// Computes `out = self · x`.
    ///
    /// # Errors
    ///
    /// Returns [`TridiagonalError::LengthMismatch`] if `x` or `out` does not
    /// match the matrix order.
    pub fn apply(&self, x: &[f64], out: &mut [f64]) -> Result<(), TridiagonalError> {
        let n = self.order();
        self.check_len(x.len())?;
        self.check_len(out.len())?;

        for i in 0..n {
            let mut value = self.diag[i] * x[i];
            if i > 0 {
                value += self.lower[i] * x[i - 1];
            }
            if i + 1 < n {
                value += self.upper[i] * x[i + 1];
            }
            out[i] = value;
        }
        Ok(())
    }

    /// Solves `self · x = rhs` with the Thomas algorithm.
    ///
    /// On success `rhs` holds the solution. `scratch` is overwritten with the
    /// modified super-diagonal and must have the matrix order. The matrix
    /// itself is left unchanged so it can be reused.
    ///
    /// The sweep has no pivoting; it is stable for diagonally dominant
    /// systems, which is what the diffusion assembly produces.
    ///
    /// # Errors
    ///
    /// Returns [`TridiagonalError::SingularPivot`] if a pivot is zero or
    /// non-finite, or [`TridiagonalError::LengthMismatch`] on size errors.
    pub fn solve_in_place(
        &self,
        rhs: &mut [f64],
        scratch: &mut [f64],
    ) -> Result<(), TridiagonalError> {
        let n = self.order();
        self.check_len(rhs.len())?;
        self.check_len(scratch.len())?;
        if n == 0 {
            return Ok(());
        }

        let pivot = self.diag[0];
        check_pivot(0, pivot)?;
        scratch[0] = if n > 1 { self.upper[0] / pivot } else { 0.0 };
        rhs[0] /= pivot;

        for i in 1..n {
            let pivot = self.diag[i] - self.lower[i] * scratch[i - 1];
            check_pivot(i, pivot)?;
            scratch[i] = if i + 1 < n { self.upper[i] / pivot } else { 0.0 };
            rhs[i] = (rhs[i] - self.lower[i] * rhs[i - 1]) / pivot;
        }

        for i in (0..n - 1).rev() {
            rhs[i] -= scratch[i] * rhs[i + 1];
        }
        Ok(())
    }

    fn check_len(&self, got: usize) -> Result<(), TridiagonalError> {
        let expected = self.order();
        if got == expected {
            Ok(())
        } else {
            Err(TridiagonalError::LengthMismatch { expected, got })
        }
    }
}

fn check_pivot(row: usize, pivot: f64) -> Result<(), TridiagonalError> {
    if pivot == 0.0 || !pivot.is_finite() {
        return Err(TridiagonalError::SingularPivot { row, pivot });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn laplacian(n: usize) -> Tridiagonal {
        let mut m = Tridiagonal::zeros(n);
        for i in 0..n {
            m.set_row(i, -1.0, 4.0, -1.0);
        }
        m
    }

    #[test]
    fn solves_known_system() {
        // [2 1 0; 1 3 1; 0 1 2] x = [4 10 8] has x = [1 2 3].
        let mut m = Tridiagonal::zeros(3);
        m.set_row(0, 0.0, 2.0, 1.0);
        m.set_row(1, 1.0, 3.0, 1.0);
        m.set_row(2, 1.0, 2.0, 0.0);

        let mut rhs = vec![4.0, 10.0, 8.0];
        let mut scratch = vec![0.0; 3];
        m.solve_in_place(&mut rhs, &mut scratch).unwrap();

        assert_relative_eq!(rhs[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(rhs[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(rhs[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn apply_matches_rows() {
        let m = laplacian(4);
        let x = [1.0, 2.0, 3.0, 4.0];
        let mut out = [0.0; 4];
        m.apply(&x, &mut out).unwrap();
        assert_eq!(out, [2.0, 4.0, 6.0, 13.0]);
    }

    #[test]
    fn single_row() {
        let mut m = Tridiagonal::zeros(1);
        m.set_row(0, 0.0, 4.0, 0.0);
        let mut rhs = vec![2.0];
        let mut scratch = vec![0.0];
        m.solve_in_place(&mut rhs, &mut scratch).unwrap();
        assert_relative_eq!(rhs[0], 0.5);
    }

    #[test]
    fn rejects_singular_pivot() {
        let mut m = Tridiagonal::zeros(2);
        m.set_row(0, 0.0, 1.0, 1.0);
        m.set_row(1, 1.0, 1.0, 0.0);
        let mut rhs = vec![1.0, 1.0];
        let mut scratch = vec![0.0; 2];

        let err = m.solve_in_place(&mut rhs, &mut scratch).unwrap_err();
        assert!(matches!(err, TridiagonalError::SingularPivot { row: 1, .. }));
    }

    #[test]
    fn rejects_length_mismatch() {
        let m = laplacian(3);
        let mut out = [0.0; 2];
        assert_eq!(
            m.apply(&[1.0, 2.0, 3.0], &mut out),
            Err(TridiagonalError::LengthMismatch {
                expected: 3,
                got: 2
            })
        );
    }

    proptest! {
        #[test]
        fn solution_reproduces_rhs(
            rows in prop::collection::vec((-1.0f64..1.0, -1.0f64..1.0, -1.0f64..1.0), 2..40),
        ) {
            let n = rows.len();
            let mut m = Tridiagonal::zeros(n);
            let mut rhs = Vec::with_capacity(n);
            for (i, &(lo, up, b)) in rows.iter().enumerate() {
                // Diagonal dominance keeps the sweep well conditioned.
                m.set_row(i, lo, 2.5 + lo.abs() + up.abs(), up);
                rhs.push(b);
            }

            let mut x = rhs.clone();
            let mut scratch = vec![0.0; n];
            m.solve_in_place(&mut x, &mut scratch).unwrap();

            let mut back = vec![0.0; n];
            m.apply(&x, &mut back).unwrap();
            for (got, want) in back.iter().zip(&rhs) {
                prop_assert!((got - want).abs() < 1e-10);
            }
        }
    }
}
