//! Two-segment radial geometry and the uniform grid built from it.

use thiserror::Error;
use uom::si::{f64::Length, length::micrometer};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

/// Relative slack used when counting whole grid steps in a radius.
const STEP_SLACK: f64 = 1e-9;

/// Which side of the core–rim interface a quantity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// From the grain center to the interface.
    Core,
    /// From the interface to the grain edge.
    Rim,
}

/// Errors from building a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// The core radius is not strictly positive.
    #[error("invalid core radius")]
    CoreRadius(#[source] ConstraintError),

    /// The rim radius is not strictly positive.
    #[error("invalid rim radius")]
    RimRadius(#[source] ConstraintError),

    /// The grid spacing is not strictly positive.
    #[error("invalid grid spacing")]
    Spacing(#[source] ConstraintError),

    /// A radius or the spacing is infinite.
    #[error("geometry inputs must be finite")]
    NonFinite,

    /// The core does not sit inside the rim.
    #[error("core radius {core:?} must be smaller than rim radius {rim:?}")]
    CoreOutsideRim {
        /// Requested core radius.
        core: Length,
        /// Requested rim radius.
        rim: Length,
    },

    /// A segment spans less than one grid step.
    #[error("{segment:?} segment spans {steps} grid steps; at least 1 required")]
    SegmentTooShort {
        /// The degenerate segment.
        segment: Segment,
        /// Whole grid steps that fit in the segment.
        steps: usize,
    },
}

/// Validated core radius, rim radius, and grid spacing.
///
/// The grid is uniform with spacing `dr` from the center outward. Radii that
/// are not whole multiples of `dr` are truncated to the last node that fits,
/// so the modeled interface and outer edge can sit slightly inside the
/// requested values. This is logged as a warning, not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    core_radius: Length,
    rim_radius: Length,
    spacing: Length,
    core_steps: usize,
    total_steps: usize,
}

impl Geometry {
    /// Validates the radii and spacing and counts the grid steps per segment.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if any input is non-positive or infinite,
    /// if `core_radius >= rim_radius`, or if either segment spans less than
    /// one grid step.
    pub fn new(
        core_radius: Length,
        rim_radius: Length,
        spacing: Length,
    ) -> Result<Self, GeometryError> {
        let core = StrictlyPositive::new(core_radius)
            .map_err(GeometryError::CoreRadius)?
            .into_inner()
            .get::<micrometer>();
        let rim = StrictlyPositive::new(rim_radius)
            .map_err(GeometryError::RimRadius)?
            .into_inner()
            .get::<micrometer>();
        let dr = StrictlyPositive::new(spacing)
            .map_err(GeometryError::Spacing)?
            .into_inner()
            .get::<micrometer>();

        if !(core.is_finite() && rim.is_finite() && dr.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if core >= rim {
            return Err(GeometryError::CoreOutsideRim {
                core: core_radius,
                rim: rim_radius,
            });
        }

        let core_steps = whole_steps(core, dr);
        let total_steps = whole_steps(rim, dr);
        if core_steps == 0 {
            return Err(GeometryError::SegmentTooShort {
                segment: Segment::Core,
                steps: core_steps,
            });
        }
        if total_steps <= core_steps {
            return Err(GeometryError::SegmentTooShort {
                segment: Segment::Rim,
                steps: total_steps.saturating_sub(core_steps),
            });
        }

        for (name, radius, steps) in [("core", core, core_steps), ("rim", rim, total_steps)] {
            let snapped = steps as f64 * dr;
            if (radius - snapped).abs() > STEP_SLACK * radius {
                log::warn!(
                    "{name} radius {radius} um is not a multiple of dr = {dr} um; \
                     grid truncated to {snapped} um"
                );
            }
        }

        Ok(Self {
            core_radius,
            rim_radius,
            spacing,
            core_steps,
            total_steps,
        })
    }

    /// Requested core radius.
    #[must_use]
    pub fn core_radius(&self) -> Length {
        self.core_radius
    }

    /// Requested rim (outer) radius.
    #[must_use]
    pub fn rim_radius(&self) -> Length {
        self.rim_radius
    }

    /// Grid spacing.
    #[must_use]
    pub fn spacing(&self) -> Length {
        self.spacing
    }

    /// Number of grid nodes, counting the shared interface node once.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.total_steps + 1
    }

    /// Index of the node shared by the core and rim segments.
    #[must_use]
    pub fn interface_index(&self) -> usize {
        self.core_steps
    }

    /// Builds the radial grid in micrometres.
    pub(crate) fn grid(&self) -> RadialGrid {
        let dr = self.spacing.get::<micrometer>();
        RadialGrid {
            radii_um: (0..self.node_count()).map(|i| i as f64 * dr).collect(),
            spacing_um: dr,
            interface: self.core_steps,
        }
    }
}

/// Uniform radial nodes from the center to the outer edge.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RadialGrid {
    pub(crate) radii_um: Vec<f64>,
    pub(crate) spacing_um: f64,
    pub(crate) interface: usize,
}

impl RadialGrid {
    pub(crate) fn len(&self) -> usize {
        self.radii_um.len()
    }

    pub(crate) fn segment_of(&self, i: usize) -> Segment {
        if i <= self.interface {
            Segment::Core
        } else {
            Segment::Rim
        }
    }
}

fn whole_steps(radius: f64, dr: f64) -> usize {
    (radius / dr + STEP_SLACK).floor() as usize
}
