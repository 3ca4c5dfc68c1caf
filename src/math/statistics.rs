//! Variance, distance and score-map normalization primitives

use crate::io::error::{CollageError, Result};
use ndarray::Array1;
use std::collections::BTreeMap;

/// Normalized or raw per-image scores keyed by image identifier
pub type ScoreMap = BTreeMap<String, f64>;

/// Population variance of a value sequence
///
/// Returns 0.0 for an empty sequence. Uses the biased estimator (divide by
/// n), matching the statistical variance of the flattened descriptor values.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Chebyshev (L-infinity) distance between two equal-length vectors
///
/// The maximum absolute difference over corresponding entries. Extra entries
/// of the longer vector are ignored, but the scoring pipelines only compare
/// histograms of identical fixed length.
pub fn chebyshev_distance(a: &Array1<f64>, b: &Array1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0_f64, |max, (x, y)| max.max((x - y).abs()))
}

/// Divide every score by the maximum value in the map
///
/// After normalization all values lie in [0, 1] and at least one entry is
/// exactly 1.0.
///
/// # Errors
///
/// Returns a `Normalization` error when the maximum raw value is zero or
/// non-finite, instead of silently producing NaN for all-equal inputs.
pub fn normalize_scores(raw: ScoreMap, operation: &'static str) -> Result<ScoreMap> {
    let max = raw.values().fold(0.0_f64, |m, &v| m.max(v));
    if max <= 0.0 || !max.is_finite() {
        return Err(CollageError::Normalization { operation });
    }

    Ok(raw.into_iter().map(|(name, v)| (name, v / max)).collect())
}
