//! Per-image scoring pipelines and the hybrid ranking that merges them

/// Color dissimilarity scoring against a reference image
pub mod color;
/// Edge-texture complexity scoring from descriptor variance
pub mod edges;
/// Hybrid score combination and tile selection
pub mod ranking;

pub use crate::math::statistics::ScoreMap;
