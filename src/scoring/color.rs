//! Color dissimilarity scoring via histogram distance from a reference image

use crate::analysis::histogram::rgb_histogram;
use crate::io::collection::ImageCollection;
use crate::io::error::{CollageError, Result, invalid_image};
use crate::math::statistics::{ScoreMap, chebyshev_distance, normalize_scores};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// How the color baseline image is chosen
///
/// Color dissimilarity is measured against a single reference image from the
/// collection. The selection is explicit so runs are reproducible and tests
/// can pin the baseline.
#[derive(Debug, Clone)]
pub enum ReferenceSelection {
    /// Draw the reference uniformly from the collection with a seeded RNG
    Seeded(u64),
    /// Use the image with this exact file name
    Named(String),
}

impl ReferenceSelection {
    fn resolve<'a>(&'a self, collection: &'a ImageCollection) -> Result<&'a str> {
        match self {
            Self::Named(name) => collection
                .get(name)
                .map(|_| name.as_str())
                .ok_or_else(|| invalid_image(name, &"not present in the source collection")),
            Self::Seeded(seed) => {
                let names: Vec<&str> = collection.names().collect();
                let mut rng = StdRng::seed_from_u64(*seed);
                names
                    .choose(&mut rng)
                    .copied()
                    .ok_or_else(|| CollageError::EmptyInput {
                        reason: "cannot draw a reference image from an empty collection"
                            .to_string(),
                    })
            }
        }
    }
}

/// Score every image by its color distance from the reference image
///
/// Each image's flattened RGB histogram is compared to the reference
/// histogram with the Chebyshev (L-infinity) distance; the reference itself
/// scores a raw 0. Raw distances are normalized by the maximum across the
/// collection.
///
/// # Errors
///
/// Returns an error if the collection is empty, a named reference is
/// missing, or every distance is zero (all images share one histogram).
pub fn color_distance_scores(
    collection: &ImageCollection,
    reference: &ReferenceSelection,
) -> Result<ScoreMap> {
    if collection.is_empty() {
        return Err(CollageError::EmptyInput {
            reason: "color scoring needs at least one image".to_string(),
        });
    }

    let reference_name = reference.resolve(collection)?;
    let reference_histogram = collection
        .get(reference_name)
        .map(rgb_histogram)
        .ok_or_else(|| invalid_image(&reference_name, &"not present in the source collection"))?;

    let mut raw = ScoreMap::new();
    for (name, image) in collection.iter() {
        let histogram = rgb_histogram(image);
        raw.insert(
            name.to_string(),
            chebyshev_distance(&reference_histogram, &histogram),
        );
    }

    normalize_scores(raw, "color distance scores")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn collection_of_three() -> ImageCollection {
        ImageCollection::from_images([
            ("dark.jpg".to_string(), RgbImage::from_pixel(8, 8, Rgb([10, 10, 10]))),
            ("gray.jpg".to_string(), RgbImage::from_pixel(8, 8, Rgb([10, 10, 10]))),
            ("light.jpg".to_string(), RgbImage::from_pixel(8, 8, Rgb([250, 250, 250]))),
        ])
    }

    #[test]
    fn test_pinned_reference_scores_zero_and_peak_is_one() {
        let collection = collection_of_three();
        let reference = ReferenceSelection::Named("dark.jpg".to_string());
        let scores = color_distance_scores(&collection, &reference).unwrap();

        assert!(scores.get("dark.jpg").copied().unwrap_or(1.0).abs() < f64::EPSILON);
        // Identical histogram to the reference
        assert!(scores.get("gray.jpg").copied().unwrap_or(1.0).abs() < f64::EPSILON);
        assert!((scores.get("light.jpg").copied().unwrap_or(0.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let collection = collection_of_three();
        let reference = ReferenceSelection::Seeded(7);
        let first = color_distance_scores(&collection, &reference).unwrap();
        let second = color_distance_scores(&collection, &reference).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_reference_is_rejected() {
        let collection = collection_of_three();
        let reference = ReferenceSelection::Named("missing.jpg".to_string());
        let err = color_distance_scores(&collection, &reference).unwrap_err();
        assert!(matches!(err, CollageError::InvalidImage { .. }));
    }

    #[test]
    fn test_identical_histograms_fail_normalization() {
        let collection = ImageCollection::from_images([
            ("a.jpg".to_string(), RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]))),
            ("b.jpg".to_string(), RgbImage::from_pixel(8, 8, Rgb([1, 2, 3]))),
        ]);
        let reference = ReferenceSelection::Named("a.jpg".to_string());
        let err = color_distance_scores(&collection, &reference).unwrap_err();
        assert!(matches!(err, CollageError::Normalization { .. }));
    }
}
