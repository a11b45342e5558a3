//! Concentration profiles over the radial grid.

use uom::si::{f64::Length, length::micrometer};

use super::geometry::RadialGrid;

/// Initial concentration levels of the two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryLevels {
    /// Uniform initial concentration across the core.
    pub core: f64,

    /// Uniform initial concentration across the rim.
    pub rim: f64,
}

impl BoundaryLevels {
    /// Creates levels for the core and rim segments.
    #[must_use]
    pub fn new(core: f64, rim: f64) -> Self {
        Self { core, rim }
    }

    /// Piecewise-constant starting profile.
    ///
    /// The shared interface node starts at the mean of the two levels.
    pub(crate) fn initial_profile(&self, grid: &RadialGrid) -> Vec<f64> {
        (0..grid.len())
            .map(|i| match i.cmp(&grid.interface) {
                std::cmp::Ordering::Less => self.core,
                std::cmp::Ordering::Equal => 0.5 * (self.core + self.rim),
                std::cmp::Ordering::Greater => self.rim,
            })
            .collect()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.core.is_finite() && self.rim.is_finite()
    }
}

/// A concentration profile over the concatenated core and rim grids.
///
/// The interface node is stored once and belongs to both segments, so
/// [`Profile::core`] and [`Profile::rim`] always agree at the interface.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    radii: Vec<Length>,
    concentrations: Vec<f64>,
    interface: usize,
}

impl Profile {
    pub(crate) fn new(grid: &RadialGrid, concentrations: Vec<f64>) -> Self {
        debug_assert_eq!(grid.len(), concentrations.len());
        Self {
            radii: grid
                .radii_um
                .iter()
                .map(|&r| Length::new::<micrometer>(r))
                .collect(),
            concentrations,
            interface: grid.interface,
        }
    }

    /// Radial positions from the center outward.
    #[must_use]
    pub fn radii(&self) -> &[Length] {
        &self.radii
    }

    /// Radial positions in micrometres.
    #[must_use]
    pub fn radii_um(&self) -> Vec<f64> {
        self.radii.iter().map(|r| r.get::<micrometer>()).collect()
    }

    /// One concentration per radius.
    #[must_use]
    pub fn concentrations(&self) -> &[f64] {
        &self.concentrations
    }

    /// Index of the core–rim interface node.
    #[must_use]
    pub fn interface_index(&self) -> usize {
        self.interface
    }

    /// Core segment, center through interface inclusive.
    #[must_use]
    pub fn core(&self) -> &[f64] {
        &self.concentrations[..=self.interface]
    }

    /// Rim segment, interface through outer edge inclusive.
    #[must_use]
    pub fn rim(&self) -> &[f64] {
        &self.concentrations[self.interface..]
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.concentrations.len()
    }

    /// Whether the profile has no nodes. Profiles built by the solver never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concentrations.is_empty()
    }

    /// Sum of absolute differences between neighboring nodes.
    #[must_use]
    pub fn total_variation(&self) -> f64 {
        self.concentrations
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .sum()
    }
}
