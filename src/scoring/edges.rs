//! Edge-texture complexity scoring from oriented-gradient descriptor variance

use crate::analysis::descriptor::edge_descriptor;
use crate::io::collection::ImageCollection;
use crate::io::error::{CollageError, Result};
use crate::math::statistics::{ScoreMap, normalize_scores, variance};

/// Score every image by the variance of its oriented-gradient descriptor
///
/// A busy, high-texture image spreads descriptor energy unevenly across
/// orientations and cells and therefore scores a high variance; a flat image
/// scores near zero. Raw variances are normalized by the maximum across the
/// collection.
///
/// # Errors
///
/// Returns an error if the collection is empty, an image is unusable for
/// descriptor extraction, or every variance is zero (all images flat).
pub fn edge_variance_scores(collection: &ImageCollection) -> Result<ScoreMap> {
    if collection.is_empty() {
        return Err(CollageError::EmptyInput {
            reason: "edge scoring needs at least one image".to_string(),
        });
    }

    let mut raw = ScoreMap::new();
    for (name, image) in collection.iter() {
        let descriptor = edge_descriptor(name, image)?;
        let values: Vec<f64> = descriptor.iter().map(|&v| f64::from(v)).collect();
        raw.insert(name.to_string(), variance(&values));
    }

    normalize_scores(raw, "edge variance scores")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn checkerboard(side: u32, period: u32) -> RgbImage {
        RgbImage::from_fn(side, side, |x, y| {
            if (x / period + y / period) % 2 == 0 {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }

    #[test]
    fn test_scores_are_normalized_to_unit_peak() {
        let collection = ImageCollection::from_images([
            ("busy.jpg".to_string(), checkerboard(48, 4)),
            ("calm.jpg".to_string(), checkerboard(48, 24)),
        ]);
        let scores = edge_variance_scores(&collection).unwrap();

        assert_eq!(scores.len(), 2);
        assert!(scores.values().all(|&v| (0.0..=1.0).contains(&v)));
        let peak = scores.values().fold(0.0_f64, |m, &v| m.max(v));
        assert!((peak - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_flat_images_fail_normalization() {
        let collection = ImageCollection::from_images([
            ("a.jpg".to_string(), RgbImage::from_pixel(32, 32, Rgb([4, 4, 4]))),
            ("b.jpg".to_string(), RgbImage::from_pixel(32, 32, Rgb([200, 200, 200]))),
        ]);
        let err = edge_variance_scores(&collection).unwrap_err();
        assert!(matches!(err, CollageError::Normalization { .. }));
    }

    #[test]
    fn test_empty_collection_is_rejected() {
        let collection = ImageCollection::from_images(Vec::new());
        let err = edge_variance_scores(&collection).unwrap_err();
        assert!(matches!(err, CollageError::EmptyInput { .. }));
    }
}
