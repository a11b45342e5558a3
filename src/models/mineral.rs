//! Mineral-scale models.
//!
//! This module contains models of chemical transport inside single mineral
//! grains, used to recover thermal histories from compositional zoning.

pub mod radial_diffusion;
