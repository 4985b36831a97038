//! Sample element kinds and numeric domain handling.
//!
//! Every supported element type carries a [`SampleKind`] describing its
//! runtime numeric domain: the kind class (integer vs. float) and, for
//! integer kinds, the maximum representable value used when rescaling
//! samples into the 0.0-1.0 working range.
//!
//! ## Bit Depth Support
//!
//! - **u8 (8-bit)**: Values 0-255, standard for web/display
//! - **u16 (16-bit)**: Values 0-65535, for high bit depth pipelines
//! - **f32 / f64 (float)**: Values 0.0-1.0, for HDR/linear workflows

use core::fmt;

/// Broad class of a numeric sample domain.
///
/// Two kinds are comparable when they belong to the same class; a filter
/// given an integer image and floating thresholds (or vice versa) rejects
/// the combination instead of silently reinterpreting one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindClass {
    Integer,
    Float,
}

/// Runtime descriptor of a supported element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    U8,
    U16,
    F32,
    F64,
}

impl SampleKind {
    /// Kind class used for the comparability check between an image and
    /// its threshold sequence.
    pub fn class(self) -> KindClass {
        match self {
            SampleKind::U8 | SampleKind::U16 => KindClass::Integer,
            SampleKind::F32 | SampleKind::F64 => KindClass::Float,
        }
    }

    /// Maximum representable value of the kind.
    ///
    /// Integer samples are divided by this when a filter needs a 0.0-1.0
    /// floating working copy. Float kinds are nominally 0.0-1.0 already
    /// and report 1.0.
    pub fn max_value(self) -> f64 {
        match self {
            SampleKind::U8 => 255.0,
            SampleKind::U16 => 65535.0,
            SampleKind::F32 | SampleKind::F64 => 1.0,
        }
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleKind::U8 => "u8",
            SampleKind::U16 => "u16",
            SampleKind::F32 => "f32",
            SampleKind::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// Element type usable as an image sample, threshold or bin value.
///
/// All filter arithmetic happens in `f64`; a `Sample` only needs to move
/// in and out of that wide domain. `from_f64` must saturate, not wrap:
/// integer kinds round to nearest and clamp to their representable range.
pub trait Sample: Copy + PartialOrd + Send + Sync + 'static {
    const KIND: SampleKind;

    fn to_f64(self) -> f64;

    /// Cast from the wide working domain back into this kind
    /// (round + saturate for integer kinds).
    fn from_f64(v: f64) -> Self;
}

impl Sample for u8 {
    const KIND: SampleKind = SampleKind::U8;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(v: f64) -> Self {
        v.round().clamp(0.0, 255.0) as u8
    }
}

impl Sample for u16 {
    const KIND: SampleKind = SampleKind::U16;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(v: f64) -> Self {
        v.round().clamp(0.0, 65535.0) as u16
    }
}

impl Sample for f32 {
    const KIND: SampleKind = SampleKind::F32;

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Sample for f64 {
    const KIND: SampleKind = SampleKind::F64;

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(v: f64) -> Self {
        v
    }
}
