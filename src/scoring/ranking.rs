//! Hybrid score combination and deterministic selection of the mosaic images

use crate::io::configuration::SELECTION_SIZE;
use crate::io::error::{CollageError, Result, invalid_image};
use crate::math::statistics::ScoreMap;
use std::cmp::Ordering;

/// The six images chosen for the mosaic, ordered by ascending hybrid score
///
/// The composer reads entries by fixed positional rank (0 through 5); rank 0
/// is the lowest hybrid score and receives the most central tile.
#[derive(Debug, Clone)]
pub struct RankedSelection {
    entries: Vec<(String, f64)>,
}

impl RankedSelection {
    /// Identifier of the image at the given rank
    pub fn name_at(&self, rank: usize) -> Option<&str> {
        self.entries.get(rank).map(|(name, _)| name.as_str())
    }

    /// All selected (identifier, hybrid score) pairs in rank order
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }
}

/// Merge the two score maps and select the images with the lowest hybrid scores
///
/// The hybrid score of an image is the pointwise sum of its normalized edge
/// variance and color distance. Pairs are sorted ascending by score, with
/// ties broken lexicographically on the identifier so the selection is
/// deterministic, and the first six are kept.
///
/// # Errors
///
/// Returns an error if an identifier is missing from the color map or if
/// fewer than six images are available for the fixed layout.
pub fn rank_hybrid(edge_scores: &ScoreMap, color_scores: &ScoreMap) -> Result<RankedSelection> {
    let mut hybrid: Vec<(String, f64)> = Vec::with_capacity(edge_scores.len());
    for (name, &edge) in edge_scores {
        let color = color_scores
            .get(name)
            .copied()
            .ok_or_else(|| invalid_image(name, &"missing from the color score map"))?;
        hybrid.push((name.clone(), edge + color));
    }

    if hybrid.len() < SELECTION_SIZE {
        return Err(CollageError::InsufficientImages {
            found: hybrid.len(),
            required: SELECTION_SIZE,
        });
    }

    hybrid.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    hybrid.truncate(SELECTION_SIZE);

    Ok(RankedSelection { entries: hybrid })
}
