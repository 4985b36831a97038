//! Image quantization and local standard deviation filters.
//!
//! Two pixel-wise/neighborhood numeric transforms over dense 2D,
//! optionally multi-channel arrays:
//!
//! - [`quantize`] / [`quantize_with_values`] map every sample into an
//!   ordinal or custom-valued bin defined by a sorted threshold sequence.
//! - [`std_filt_u8`] / [`std_filt_f32`] compute the per-pixel standard
//!   deviation of a binary neighborhood with mirror-reflected borders.
//!
//! ## Image Format
//! Images are `ndarray` arrays of shape (height, width, channels):
//! - **Grayscale**: (height, width, 1) - single channel
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha
//!
//! Integer samples span the full range of their kind (u8: 0-255); float
//! samples are nominally 0.0-1.0. Filters process whatever channels are
//! present and apply the same parameters to each independently.
//!
//! ## Ownership
//! Inputs are read-only views; every call returns a freshly allocated
//! output and keeps no state between calls. Image decode/encode and
//! display are out of scope: callers hand in already-decoded arrays and
//! consume the returned ones.

pub mod error;
pub mod filters;
pub mod sample;

pub use error::FilterError;
pub use filters::correlate::{correlate_reflect, reflect_index};
pub use filters::neighborhood::Neighborhood;
pub use filters::quantize::{quantize, quantize_with_values};
pub use filters::stdfilt::{std_filt_f32, std_filt_f64, std_filt_u16, std_filt_u8};
pub use sample::{KindClass, Sample, SampleKind};
