//! End-to-end orchestration from source folder to written collage

use crate::compose::canvas::compose_canvas;
use crate::compose::seams::blur_seams;
use crate::io::collection::ImageCollection;
use crate::io::error::Result;
use crate::io::output::write_collage;
use crate::io::progress::ProgressReporter;
use crate::scoring::color::{ReferenceSelection, color_distance_scores};
use crate::scoring::edges::edge_variance_scores;
use crate::scoring::ranking::rank_hybrid;
use std::path::{Path, PathBuf};

/// Runs the whole collage pipeline over one source folder
///
/// Data flows strictly forward: folder -> image collection -> the two score
/// maps -> ranked selection -> canvas -> blurred canvas -> output file. Any
/// stage error aborts the run; the output directory is only touched by the
/// final write, after scoring and selection have succeeded.
pub struct CollagePipeline {
    source_dir: PathBuf,
    output_dir: PathBuf,
    reference: ReferenceSelection,
    progress: ProgressReporter,
}

impl CollagePipeline {
    /// Create a pipeline with progress reporting disabled
    pub fn new(source_dir: &Path, output_dir: &Path, reference: ReferenceSelection) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            reference,
            progress: ProgressReporter::new(false),
        }
    }

    /// Enable or disable stage progress output
    #[must_use]
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = ProgressReporter::new(enabled);
        self
    }

    /// Build the collage and return the path of the written file
    ///
    /// # Errors
    ///
    /// Propagates the first failure of any stage: unreadable input, fewer
    /// than six images, degenerate scores, or filesystem problems while
    /// writing the result.
    pub fn run(&self) -> Result<PathBuf> {
        self.progress.stage("Loading source images");
        let collection = ImageCollection::from_directory(&self.source_dir)?;

        self.progress.stage("Computing descriptor variances for edge scoring");
        let edge_scores = edge_variance_scores(&collection)?;

        self.progress.stage("Computing histogram distances for color scoring");
        let color_scores = color_distance_scores(&collection, &self.reference)?;

        self.progress.stage("Ranking images by hybrid score");
        let selection = rank_hybrid(&edge_scores, &color_scores)?;

        self.progress.stage("Composing the mosaic canvas");
        let mut canvas = compose_canvas(&selection, &collection)?;

        self.progress.stage("Blurring tile seams");
        blur_seams(&mut canvas)?;

        self.progress.stage("Writing the collage");
        let path = write_collage(&canvas, &self.output_dir)?;

        self.progress
            .finish(&format!("Collage written to '{}'", path.display()));
        Ok(path)
    }
}
