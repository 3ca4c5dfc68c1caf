//! Per-image feature extraction feeding the scoring pipelines

/// Oriented-gradient descriptor computation
pub mod descriptor;
/// RGB intensity histogram computation
pub mod histogram;
