//! Filter input validation errors.
//!
//! All validation happens before any numeric work starts; once an engine
//! begins computing it cannot fail, and no output array is allocated when
//! an error is returned. Every error is a caller-input problem, never a
//! transient condition.

use core::fmt;

use crate::sample::SampleKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Malformed shape or content of levels, values or a neighborhood mask.
    Validation(&'static str),
    /// Bin values must number exactly one more than the thresholds.
    SizeMismatch { expected: usize, actual: usize },
    /// Image samples and thresholds belong to different kind classes.
    TypeMismatch { image: SampleKind, levels: SampleKind },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => f.write_str(msg),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected} values, got {actual}")
            }
            Self::TypeMismatch { image, levels } => {
                write!(
                    f,
                    "type mismatch: {image} samples are not comparable with {levels} levels"
                )
            }
        }
    }
}

impl std::error::Error for FilterError {}
