//! Rescale-and-shift alignment of one profile onto another.
//!
//! [`align`] maps a source profile's value range onto a target's range and then
//! shifts it by whole indices so that both profiles have their steepest
//! gradient at the same index. Vacated positions repeat the nearest retained
//! edge value.
//!
//! The steepest gradient is only a proxy for a profile's structural center.
//! When the two profiles have substantially different gradient shapes the
//! result can be visibly off-center; this is a display aid, not registration.

use thiserror::Error;

/// Errors from profile alignment.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AlignError {
    /// The source profile has no values.
    #[error("source profile is empty")]
    EmptySource,

    /// The target profile has no values.
    #[error("target profile is empty")]
    EmptyTarget,

    /// A profile holds a NaN or infinite value.
    #[error("non-finite value {value} at index {index}")]
    NonFinite {
        /// Index of the offending value.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

/// The value mapping applied before shifting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rescale {
    /// `y = scale * x + offset`.
    Affine {
        /// Multiplier applied to source values.
        scale: f64,
        /// Offset added after scaling.
        offset: f64,
    },

    /// The source was constant, so its range could not be mapped and the
    /// values were passed through unchanged.
    Identity,
}

impl Rescale {
    fn apply(self, x: f64) -> f64 {
        match self {
            Self::Affine { scale, offset } => scale * x + offset,
            Self::Identity => x,
        }
    }
}

/// An aligned profile together with the transform that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Alignment {
    /// Aligned values, one per source value.
    pub profile: Vec<f64>,

    /// Value mapping applied to the source.
    pub rescale: Rescale,

    /// Index shift applied after rescaling; positive moves values toward
    /// higher indices.
    pub shift: isize,
}

/// Aligns `source` onto `target`.
///
/// # Errors
///
/// Returns an [`AlignError`] if either profile is empty or contains a
/// non-finite value. A constant source is not an error; it is reported as
/// [`Rescale::Identity`].
pub fn align(source: &[f64], target: &[f64]) -> Result<Alignment, AlignError> {
    let (rescaled, rescale) = rescale_to_range(source, target)?;

    let target_center = steepest_gradient_index(target) as isize;
    let source_center = steepest_gradient_index(&rescaled) as isize;
    let shift = target_center - source_center;
    let profile = shift_with_edge_padding(&rescaled, shift);

    Ok(Alignment {
        profile,
        rescale,
        shift,
    })
}

/// Affinely maps `source` so its minimum and maximum match `target`'s.
///
/// # Errors
///
/// Returns an [`AlignError`] if either profile is empty or contains a
/// non-finite value.
pub fn rescale_to_range(
    source: &[f64],
    target: &[f64],
) -> Result<(Vec<f64>, Rescale), AlignError> {
    let (src_min, src_max) = finite_range(source).ok_or(AlignError::EmptySource)??;
    let (tgt_min, tgt_max) = finite_range(target).ok_or(AlignError::EmptyTarget)??;

    let src_span = src_max - src_min;
    let rescale = if src_span > 0.0 {
        let scale = (tgt_max - tgt_min) / src_span;
        Rescale::Affine {
            scale,
            offset: tgt_min - scale * src_min,
        }
    } else {
        log::warn!("constant source profile ({src_min}); skipping range rescale");
        Rescale::Identity
    };

    let rescaled = source.iter().map(|&x| rescale.apply(x)).collect();
    Ok((rescaled, rescale))
}

/// Returns the index of the largest absolute discrete derivative.
///
/// Interior points use central differences and the end points one-sided
/// differences. Ties resolve to the lowest index; profiles shorter than two
/// values return 0.
#[must_use]
pub fn steepest_gradient_index(values: &[f64]) -> usize {
    let n = values.len();
    if n < 2 {
        return 0;
    }

    let gradient = |i: usize| -> f64 {
        if i == 0 {
            values[1] - values[0]
        } else if i == n - 1 {
            values[n - 1] - values[n - 2]
        } else {
            0.5 * (values[i + 1] - values[i - 1])
        }
    };

    let mut best = 0;
    let mut best_abs = gradient(0).abs();
    for i in 1..n {
        let g = gradient(i).abs();
        if g > best_abs {
            best = i;
            best_abs = g;
        }
    }
    best
}

/// Shifts values by `shift` indices, repeating the nearest edge value into
/// vacated positions.
#[must_use]
pub fn shift_with_edge_padding(values: &[f64], shift: isize) -> Vec<f64> {
    let Some(last) = values.len().checked_sub(1) else {
        return Vec::new();
    };
    (0..values.len())
        .map(|i| {
            let from = (i as isize - shift).clamp(0, last as isize);
            values[from as usize]
        })
        .collect()
}

/// Returns `None` for an empty slice, otherwise the min and max or the first
/// non-finite value.
fn finite_range(values: &[f64]) -> Option<Result<(f64, f64), AlignError>> {
    if values.is_empty() {
        return None;
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Some(Err(AlignError::NonFinite { index, value }));
        }
        min = min.min(value);
        max = max.max(value);
    }
    Some(Ok((min, max)))
}
