//! Numeric helpers shared by the scoring pipelines

/// Variance, distance and normalization primitives
pub mod statistics;
