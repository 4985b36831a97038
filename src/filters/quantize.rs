//! Level-based quantization.
//!
//! Maps every sample into a bin defined by a sorted sequence of thresholds
//! and emits the bin's output value. With thresholds `t0 <= .. <= t(n-1)`
//! a sample `x` lands in the smallest bin `m` with `x <= tm`, or in bin `n`
//! when it exceeds every threshold. Bin outputs default to the ordinal
//! sequence `0..=n` in the image's own domain; custom outputs may live in
//! a different domain, which then becomes the output element type.
//!
//! Thresholds may be passed in row or column orientation and in any order;
//! they are canonicalized to an ascending sequence before use. Duplicate
//! thresholds are permitted and collapse ties: the bins between two equal
//! thresholds are structurally unreachable.
//!
//! All interior arithmetic uses f64, so widely spaced thresholds and
//! values survive without overflow or truncation; results are cast
//! (round + saturate for integer kinds) into the output domain last.

use log::debug;
use ndarray::{Array3, ArrayView2, ArrayView3};

use crate::error::FilterError;
use crate::sample::Sample;

// ============================================================================
// Sanitizer
// ============================================================================

/// Canonicalize a threshold vector: orientation check, comparability check
/// against the image's kind class, ascending sort into f64.
fn sanitize_levels<T: Sample, L: Sample>(
    levels: ArrayView2<L>,
) -> Result<Vec<f64>, FilterError> {
    if T::KIND.class() != L::KIND.class() {
        return Err(FilterError::TypeMismatch {
            image: T::KIND,
            levels: L::KIND,
        });
    }

    let (rows, cols) = levels.dim();
    if rows != 1 && cols != 1 {
        return Err(FilterError::Validation("invalid shape"));
    }

    let mut sorted: Vec<f64> = levels.iter().map(|&v| v.to_f64()).collect();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Canonicalize a bin value vector: orientation check plus the
/// `|values| == |levels| + 1` requirement. Order is preserved.
fn sanitize_values<V: Sample>(
    values: ArrayView2<V>,
    level_count: usize,
) -> Result<Vec<f64>, FilterError> {
    let (rows, cols) = values.dim();
    if rows != 1 && cols != 1 {
        return Err(FilterError::Validation("invalid shape"));
    }

    let expected = level_count + 1;
    if values.len() != expected {
        return Err(FilterError::SizeMismatch {
            expected,
            actual: values.len(),
        });
    }

    Ok(values.iter().map(|&v| v.to_f64()).collect())
}

// ============================================================================
// Engine
// ============================================================================

/// Shared mapping core: per-sample bin search over ascending thresholds.
///
/// `levels` must already be ascending and `values.len() == levels.len() + 1`.
fn map_samples<T: Sample, V: Sample>(
    image: ArrayView3<T>,
    levels: &[f64],
    values: &[f64],
) -> Array3<V> {
    Array3::from_shape_fn(image.dim(), |(row, col, ch)| {
        let sample = image[[row, col, ch]].to_f64();
        // Count of thresholds strictly below the sample = smallest m
        // with sample <= levels[m].
        let bin = levels.partition_point(|&t| t < sample);
        V::from_f64(values[bin])
    })
}

/// Quantize an image against a threshold sequence with ordinal bin values.
///
/// Bin `i` outputs the ordinal `i` cast into the image's element domain
/// (saturating: with more bins than the domain can represent, high
/// ordinals clip to the domain maximum).
///
/// # Arguments
/// * `image` - Image with shape (height, width, channels); thresholds are
///   shared across channels and applied to each channel independently
/// * `levels` - Thresholds as a row (1, n) or column (n, 1) vector, any order
///
/// # Returns
/// Newly allocated image of the same shape and element type
///
/// # Errors
/// * `Validation("invalid shape")` - levels is not one-dimensional
/// * `TypeMismatch` - levels' kind class differs from the image's
pub fn quantize<T: Sample, L: Sample>(
    image: ArrayView3<T>,
    levels: ArrayView2<L>,
) -> Result<Array3<T>, FilterError> {
    let levels = sanitize_levels::<T, L>(levels)?;
    let ordinals: Vec<f64> = (0..=levels.len()).map(|i| i as f64).collect();

    debug!("quantize: {} thresholds, ordinal values", levels.len());
    Ok(map_samples::<T, T>(image, &levels, &ordinals))
}

/// Quantize an image with explicit per-bin output values.
///
/// The output element type is that of `values`, which may differ from the
/// image's (e.g. a u8 image quantized to named f32 outputs).
///
/// # Arguments
/// * `image` - Image with shape (height, width, channels)
/// * `levels` - Thresholds as a row or column vector, any order
/// * `values` - One output per bin, length `levels.len() + 1`, row or
///   column vector; `values[i]` is emitted for bin `i`
///
/// # Returns
/// Newly allocated image of the same shape, element type of `values`
///
/// # Errors
/// * `Validation("invalid shape")` - levels or values is not one-dimensional
/// * `SizeMismatch` - values length is not `levels.len() + 1`
/// * `TypeMismatch` - levels' kind class differs from the image's
pub fn quantize_with_values<T: Sample, L: Sample, V: Sample>(
    image: ArrayView3<T>,
    levels: ArrayView2<L>,
    values: ArrayView2<V>,
) -> Result<Array3<V>, FilterError> {
    let levels = sanitize_levels::<T, L>(levels)?;
    let values = sanitize_values(values, levels.len())?;

    debug!(
        "quantize: {} thresholds, {} custom values",
        levels.len(),
        values.len()
    );
    Ok(map_samples::<T, V>(image, &levels, &values))
}
