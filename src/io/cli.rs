//! Command-line interface for the collage builder

use crate::io::configuration::{DEFAULT_OUTPUT_DIR, DEFAULT_SEED, DEFAULT_SOURCE_DIR};
use crate::io::error::Result;
use crate::pipeline::CollagePipeline;
use crate::scoring::color::ReferenceSelection;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the collage builder
#[derive(Parser)]
#[command(name = "hybridcollage")]
#[command(
    author,
    version,
    about = "Build a six-tile photo collage ranked by edge texture and color dissimilarity"
)]
pub struct Cli {
    /// Source directory containing .jpg photographs
    #[arg(value_name = "SOURCE", default_value = DEFAULT_SOURCE_DIR)]
    pub source: PathBuf,

    /// Output directory, destroyed and recreated on every run
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Random seed for the reference-image draw in color scoring
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Pin the color baseline to this file name instead of a seeded draw
    #[arg(short, long, value_name = "NAME")]
    pub reference: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    fn reference_selection(&self) -> ReferenceSelection {
        self.reference.clone().map_or(
            ReferenceSelection::Seeded(self.seed),
            ReferenceSelection::Named,
        )
    }
}

/// Builds and runs the pipeline described by the CLI arguments
pub struct CollageRunner {
    cli: Cli,
}

impl CollageRunner {
    /// Create a runner from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the pipeline once
    ///
    /// # Errors
    ///
    /// Propagates any pipeline failure unchanged; the process exit status
    /// reflects it via the error return from `main`.
    pub fn process(&self) -> Result<()> {
        let pipeline = CollagePipeline::new(
            &self.cli.source,
            &self.cli.output,
            self.cli.reference_selection(),
        )
        .with_progress(self.cli.should_show_progress());

        pipeline.run().map(|_path| ())
    }
}
