//! Filter modules for image quantization and local statistics.
//!
//! ## Supported Formats
//!
//! All filters accept images of shape (height, width, channels) with one
//! or more channels. Channel count is inferred from the input array;
//! thresholds and neighborhoods are shared across channels and each
//! channel is processed independently.
//!
//! | Kind | Range | Notes |
//! |------|-------|-------|
//! | u8 | 0-255 | standard for web/display |
//! | u16 | 0-65535 | high bit depth |
//! | f32 | 0.0-1.0 | float working format |
//! | f64 | 0.0-1.0 | wide float |
//!
//! ## Architecture
//!
//! Two independent pipelines that share no state:
//! - **Quantization**: threshold/value sanitization feeding the per-sample
//!   bin mapping ([`quantize`]).
//! - **Local standard deviation**: neighborhood validation feeding the
//!   moment computation over reflected-border correlations ([`stdfilt`]).
//!
//! Every entry point treats its inputs as read-only and returns a freshly
//! allocated output. Calls are pure and safe to issue concurrently on
//! disjoint or shared read-only inputs; internal parallelism is fork-join
//! only and deterministic.

pub mod correlate;
pub mod neighborhood;
pub mod quantize;
pub mod stdfilt;
