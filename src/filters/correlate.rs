//! Neighborhood correlation with reflected borders.
//!
//! For every pixel, sums a 2D plane over the active offsets of a
//! neighborhood centered at that pixel. Reads past an edge are redirected
//! by mirror reflection of interior values (symmetric padding: the edge
//! pixel itself is repeated, `-1 -> 0`, `-2 -> 1`, `len -> len - 1`).
//! Never zero-padding, never clamping.

use ndarray::{Array2, ArrayView2, Axis};
use rayon::prelude::*;

use crate::filters::neighborhood::Neighborhood;

/// Map a possibly out-of-range index into `0..len` by mirror reflection.
///
/// The mapping is periodic with period `2 * len`:
/// `..cba|abc..xyz|zyx..` for a sequence of length `len`.
/// `len` must be non-zero.
pub fn reflect_index(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let r = i.rem_euclid(2 * len as isize) as usize;
    if r < len {
        r
    } else {
        2 * len - 1 - r
    }
}

/// Correlate a plane with a neighborhood: per-pixel sum over active offsets.
///
/// # Arguments
/// * `plane` - 2D input plane (height, width), both dimensions non-empty
/// * `neighborhood` - validated neighborhood supplying the active offsets
///
/// # Returns
/// New (height, width) array of neighborhood sums
pub fn correlate_reflect(plane: ArrayView2<f64>, neighborhood: &Neighborhood) -> Array2<f64> {
    let (height, width) = plane.dim();
    let offsets = neighborhood.offsets();
    let mut output = Array2::<f64>::zeros((height, width));

    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, mut row)| {
            for (x, out) in row.iter_mut().enumerate() {
                let mut sum = 0.0;
                for &(dy, dx) in offsets {
                    let sy = reflect_index(y as isize + dy, height);
                    let sx = reflect_index(x as isize + dx, width);
                    sum += plane[[sy, sx]];
                }
                *out = sum;
            }
        });

    output
}
