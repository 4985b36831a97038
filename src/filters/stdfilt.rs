//! Local standard deviation filter.
//!
//! Every output pixel holds the standard deviation of its neighborhood,
//! with borders extended by mirror reflection (MATLAB `stdfilt` semantics).
//! Integer images are first rescaled into 0.0-1.0 by the maximum value of
//! their kind; float images are used as-is. The output element type is the
//! floating kind of that working copy: f32 for u8/u16/f32 inputs, f64 for
//! f64 inputs.
//!
//! The deviation comes from the moment identity, with matched
//! unbiased-style normalization over a neighborhood of weight `w`:
//!
//! ```text
//! E2  = C(I.*I) / (w - 1)
//! M2  = C(I)^2  / (w * (w - 1))
//! out = sqrt(max(E2 - M2, 0))
//! ```
//!
//! where `C` is the neighborhood correlation of [`correlate_reflect`].
//! The clamp before the square root absorbs floating rounding that can
//! push the variance marginally negative in near-constant regions.
//!
//! Inf and NaN samples are not handled.

use log::debug;
use ndarray::{Array2, Array3, ArrayView3};

use crate::filters::correlate::correlate_reflect;
use crate::filters::neighborhood::Neighborhood;
use crate::sample::{KindClass, Sample};

/// Local standard deviation - u8 version.
///
/// Samples are rescaled to 0.0-1.0 (divided by 255) before filtering.
///
/// # Arguments
/// * `input` - Image with shape (height, width, channels)
/// * `neighborhood` - Validated neighborhood; channels are filtered
///   independently with the same neighborhood
///
/// # Returns
/// Newly allocated f32 image of the same shape
pub fn std_filt_u8(input: ArrayView3<u8>, neighborhood: &Neighborhood) -> Array3<f32> {
    std_filt_impl(input, neighborhood)
}

/// Local standard deviation - u16 version.
///
/// Samples are rescaled to 0.0-1.0 (divided by 65535) before filtering.
///
/// # Returns
/// Newly allocated f32 image of the same shape
pub fn std_filt_u16(input: ArrayView3<u16>, neighborhood: &Neighborhood) -> Array3<f32> {
    std_filt_impl(input, neighborhood)
}

/// Local standard deviation - f32 version.
///
/// Input values are used as-is (expected range 0.0-1.0).
///
/// # Arguments
/// * `input` - Image with shape (height, width, channels), values 0.0-1.0
/// * `neighborhood` - Validated neighborhood
///
/// # Returns
/// Newly allocated f32 image of the same shape
pub fn std_filt_f32(input: ArrayView3<f32>, neighborhood: &Neighborhood) -> Array3<f32> {
    std_filt_impl(input, neighborhood)
}

/// Local standard deviation - f64 version.
///
/// Input values are used as-is and full f64 precision is kept in the
/// output.
///
/// # Returns
/// Newly allocated f64 image of the same shape
pub fn std_filt_f64(input: ArrayView3<f64>, neighborhood: &Neighborhood) -> Array3<f64> {
    std_filt_impl(input, neighborhood)
}

fn std_filt_impl<T: Sample, O: Sample>(
    input: ArrayView3<T>,
    neighborhood: &Neighborhood,
) -> Array3<O> {
    let (height, width, channels) = input.dim();
    let weight = neighborhood.weight();

    debug!(
        "std_filt: {}x{}x{} image, neighborhood weight {}",
        height, width, channels, weight
    );

    // A single-sample (or empty) neighborhood has no variance. Deliberate
    // policy, not just a divide-by-zero guard.
    if weight <= 1 {
        return Array3::from_shape_fn((height, width, channels), |_| O::from_f64(0.0));
    }

    let w1 = (weight - 1) as f64;
    let ww1 = weight as f64 * w1;
    let scale = match T::KIND.class() {
        KindClass::Integer => T::KIND.max_value(),
        KindClass::Float => 1.0,
    };

    let mut deviations: Vec<Array2<f64>> = Vec::with_capacity(channels);
    for ch in 0..channels {
        let plane = Array2::from_shape_fn((height, width), |(y, x)| {
            input[[y, x, ch]].to_f64() / scale
        });
        let squared = plane.mapv(|v| v * v);

        let sums = correlate_reflect(plane.view(), neighborhood);
        let sums_sq = correlate_reflect(squared.view(), neighborhood);

        deviations.push(Array2::from_shape_fn((height, width), |(y, x)| {
            let e2 = sums_sq[[y, x]] / w1;
            let m2 = sums[[y, x]] * sums[[y, x]] / ww1;
            (e2 - m2).max(0.0).sqrt()
        }));
    }

    Array3::from_shape_fn((height, width, channels), |(y, x, ch)| {
        O::from_f64(deviations[ch][[y, x]])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{s, Array3};

    fn pattern_u8(height: usize, width: usize, channels: usize) -> Array3<u8> {
        Array3::from_shape_fn((height, width, channels), |(y, x, c)| {
            ((y * 31 + x * 17 + c * 101) % 256) as u8
        })
    }

    #[test]
    fn test_constant_image_is_all_zeros() {
        let img = Array3::<u8>::from_elem((5, 6, 1), 128);

        let result = std_filt_u8(img.view(), &Neighborhood::default());

        // Including borders: reflection of a constant region adds no
        // variance, only floating residue absorbed by the clamp.
        for &v in result.iter() {
            assert!(v.abs() < 1e-6, "expected 0, got {v}");
        }
    }

    #[test]
    fn test_weight_one_neighborhood_is_all_zeros() {
        let mut mask = Array3::<f64>::zeros((3, 3, 1));
        mask[[1, 1, 0]] = 1.0;
        let nh = Neighborhood::from_mask(mask.view()).unwrap();

        let result = std_filt_u8(pattern_u8(4, 4, 1).view(), &nh);

        for &v in result.iter() {
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn test_zero_weight_neighborhood_is_all_zeros() {
        let mask = Array3::<f64>::zeros((1, 1, 1));
        let nh = Neighborhood::from_mask(mask.view()).unwrap();

        let result = std_filt_f32(Array3::<f32>::ones((3, 3, 1)).view(), &nh);

        for &v in result.iter() {
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn test_two_pixel_step() {
        let mut img = Array3::<f32>::zeros((1, 2, 1));
        img[[0, 1, 0]] = 1.0;

        let result = std_filt_f32(img.view(), &Neighborhood::default());

        // Reflection gives both pixels the neighborhood {0,0,1} repeated
        // over three rows: E2 = 3/8, M2 = 1/8 (resp. 6/8 and 4/8),
        // variance 1/4 either way.
        assert!((result[[0, 0, 0]] - 0.5).abs() < 1e-6);
        assert!((result[[0, 1, 0]] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_f64_two_pixel_step() {
        let mut img = Array3::<f64>::zeros((1, 2, 1));
        img[[0, 1, 0]] = 1.0;

        let result = std_filt_f64(img.view(), &Neighborhood::default());

        assert!((result[[0, 0, 0]] - 0.5).abs() < 1e-12);
        assert!((result[[0, 1, 0]] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_u16_matches_u8_at_matching_depth() {
        // 65535 = 255 * 257, so v * 257 in u16 is the same gray level
        // as v in u8; the normalized pipelines must agree.
        let img = pattern_u8(5, 5, 1);
        let img_u16 = img.mapv(|v| u16::from(v) * 257);
        let nh = Neighborhood::default();

        let from_u8 = std_filt_u8(img.view(), &nh);
        let from_u16 = std_filt_u16(img_u16.view(), &nh);

        for (a, b) in from_u8.iter().zip(from_u16.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_horizontal_flip_symmetry() {
        let img = pattern_u8(6, 7, 1);
        let nh = Neighborhood::default();

        let direct = std_filt_u8(img.view(), &nh);
        let flipped = std_filt_u8(img.slice(s![.., ..;-1, ..]), &nh);
        let unflipped = flipped.slice(s![.., ..;-1, ..]);

        for (a, b) in direct.iter().zip(unflipped.iter()) {
            assert!((a - b).abs() < 1e-5, "{a} vs {b}");
        }
    }

    #[test]
    fn test_multichannel_matches_per_channel_runs() {
        use ndarray::Axis;

        let img = pattern_u8(4, 5, 3);
        let nh = Neighborhood::default();

        let combined = std_filt_u8(img.view(), &nh);

        for ch in 0..3 {
            let single = img.index_axis(Axis(2), ch).insert_axis(Axis(2));
            let expected = std_filt_u8(single, &nh);
            for y in 0..4 {
                for x in 0..5 {
                    assert_eq!(combined[[y, x, ch]], expected[[y, x, 0]]);
                }
            }
        }
    }

    #[test]
    fn test_u8_matches_normalized_f32() {
        let img = pattern_u8(5, 5, 1);
        let img_f32 = img.mapv(|v| f32::from(v) / 255.0);
        let nh = Neighborhood::default();

        let from_u8 = std_filt_u8(img.view(), &nh);
        let from_f32 = std_filt_f32(img_f32.view(), &nh);

        for (a, b) in from_u8.iter().zip(from_f32.iter()) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let img = pattern_u8(3, 3, 1);
        let before = img.clone();

        let _ = std_filt_u8(img.view(), &Neighborhood::default());

        assert_eq!(img, before);
    }
}
