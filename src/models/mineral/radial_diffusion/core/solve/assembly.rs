//! Per-step Crank–Nicolson operators for spherical radial diffusion.
//!
//! For an interior node at radius `r` with `k = dr / r`, the discretized
//! `∂C/∂t = D (∂²C/∂r² + (2/r) ∂C/∂r)` gives
//!
//! ```text
//! implicit: −α(1−k) C[i−1] + (1+2α) C[i] − α(1+k) C[i+1]
//! explicit:  α(1−k) C[i−1] + (1−2α) C[i] + α(1+k) C[i+1]
//! ```
//!
//! with `α = D·dt / (2·dr²)`. The interface row uses the core's `α` for the
//! inward coupling and the rim's `α` for the outward coupling, which balances
//! flux across the shared node. The center and outer rows are zero-flux
//! constraints (`C[0] = C[1]`, `C[n−1] = C[n−2]`) with no explicit part.

use crate::support::tridiagonal::Tridiagonal;

use super::super::geometry::{RadialGrid, Segment};

/// Diffusion numbers `α = D·dt / (2·dr²)` for each segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Alphas {
    pub(super) core: f64,
    pub(super) rim: f64,
}

impl Alphas {
    fn of(&self, segment: Segment) -> f64 {
        match segment {
            Segment::Core => self.core,
            Segment::Rim => self.rim,
        }
    }
}

/// Left- and right-hand operators of one Crank–Nicolson step.
#[derive(Debug, Clone)]
pub(super) struct CrankNicolson {
    pub(super) implicit: Tridiagonal,
    pub(super) explicit: Tridiagonal,
}

impl CrankNicolson {
    pub(super) fn new(n: usize) -> Self {
        Self {
            implicit: Tridiagonal::zeros(n),
            explicit: Tridiagonal::zeros(n),
        }
    }

    /// Rewrites both operators for the given diffusion numbers.
    pub(super) fn assemble(&mut self, grid: &RadialGrid, alphas: Alphas) {
        let n = grid.len();
        let last = n - 1;

        self.implicit.set_row(0, 0.0, 1.0, -1.0);
        self.explicit.set_row(0, 0.0, 0.0, 0.0);

        for i in 1..last {
            let k = grid.spacing_um / grid.radii_um[i];
            let (a_in, a_out) = if i == grid.interface {
                (alphas.core, alphas.rim)
            } else {
                let a = alphas.of(grid.segment_of(i));
                (a, a)
            };
            let lower = a_in * (1.0 - k);
            let upper = a_out * (1.0 + k);

            self.implicit.set_row(i, -lower, 1.0 + lower + upper, -upper);
            self.explicit.set_row(i, lower, 1.0 - lower - upper, upper);
        }

        self.implicit.set_row(last, -1.0, 1.0, 0.0);
        self.explicit.set_row(last, 0.0, 0.0, 0.0);
    }
}
