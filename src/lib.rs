//! Fixed-layout photo collage builder using a hybrid edge-texture and color-dissimilarity ranking
//!
//! The pipeline scores every image in a source folder twice (variance of an
//! oriented-gradient descriptor, Chebyshev distance between RGB histograms),
//! selects the six lowest hybrid scores and composes them into a 640x840
//! mosaic with blurred seams between the tiles.

#![forbid(unsafe_code)]

/// Per-image feature extraction: RGB histograms and oriented-gradient descriptors
pub mod analysis;
/// Fixed mosaic layout, canvas composition and seam blurring
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Numeric helpers for variance, distance and score normalization
pub mod math;
/// End-to-end pipeline orchestration from source folder to written collage
pub mod pipeline;
/// Scoring pipelines and hybrid ranking
pub mod scoring;

pub use io::error::{CollageError, Result};
