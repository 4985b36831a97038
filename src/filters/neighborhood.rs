//! Binary neighborhood masks for local statistics.
//!
//! A neighborhood is described by a mask of zeros and ones where ones mark
//! the neighbors that participate in a local statistic. The mask must be
//! single-channel and odd-sized in both dimensions so that it has a unique
//! center pixel. The default neighborhood is 3x3 all-ones.

use log::debug;
use ndarray::ArrayView3;

use crate::error::FilterError;

/// Validated neighborhood used by local statistic filters.
///
/// Construction performs all input validation up front; once a
/// `Neighborhood` exists the filters that consume it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    /// Active cell positions relative to the mask center, row-major.
    offsets: Vec<(isize, isize)>,
}

impl Neighborhood {
    /// Validate a candidate mask and build a neighborhood from it.
    ///
    /// # Arguments
    /// * `mask` - Mask of shape (rows, cols, 1) with entries exactly 0.0 or 1.0
    ///
    /// # Errors
    /// In check order:
    /// * `"invalid neighborhood type"` - mask is not single-channel
    /// * `"invalid neighborhood value"` - an entry is neither 0 nor 1
    /// * `"invalid neighborhood size"` - a dimension is even-sized
    pub fn from_mask(mask: ArrayView3<f64>) -> Result<Self, FilterError> {
        let (rows, cols, channels) = mask.dim();

        if channels != 1 {
            return Err(FilterError::Validation("invalid neighborhood type"));
        }
        if mask.iter().any(|&v| v != 0.0 && v != 1.0) {
            return Err(FilterError::Validation("invalid neighborhood value"));
        }
        if rows % 2 == 0 || cols % 2 == 0 {
            return Err(FilterError::Validation("invalid neighborhood size"));
        }

        let center = (rows as isize / 2, cols as isize / 2);
        let offsets: Vec<(isize, isize)> = mask
            .indexed_iter()
            .filter(|&(_, &v)| v == 1.0)
            .map(|((r, c, _), _)| (r as isize - center.0, c as isize - center.1))
            .collect();

        debug!(
            "neighborhood: {}x{} mask, weight {}",
            rows,
            cols,
            offsets.len()
        );
        Ok(Self { offsets })
    }

    /// Count of active cells (the weight `w` of the neighborhood).
    pub fn weight(&self) -> usize {
        self.offsets.len()
    }

    /// Active cell offsets relative to the mask center.
    pub(crate) fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }
}

impl Default for Neighborhood {
    /// The 3x3 all-ones neighborhood (weight 9).
    fn default() -> Self {
        let mut offsets = Vec::with_capacity(9);
        for dy in -1..=1 {
            for dx in -1..=1 {
                offsets.push((dy, dx));
            }
        }
        Self { offsets }
    }
}
