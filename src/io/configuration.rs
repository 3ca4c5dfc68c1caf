//! Fixed scoring, layout and output parameters

// Histogram scoring parameters
/// Intensity bins per color channel in the RGB histogram
pub const HISTOGRAM_BINS: usize = 256;
/// Number of color channels processed per image
pub const COLOR_CHANNELS: usize = 3;

// Oriented-gradient descriptor parameters
/// Orientation bins in each cell histogram
pub const DESCRIPTOR_ORIENTATIONS: usize = 9;
/// Side length of one descriptor cell in pixels
pub const DESCRIPTOR_CELL_SIDE: usize = 8;
/// Side length of one normalization block in cells
pub const DESCRIPTOR_BLOCK_SIDE: usize = 2;
/// Block stride in cells
pub const DESCRIPTOR_BLOCK_STRIDE: usize = 1;

// Mosaic geometry
/// Number of images placed on the canvas
pub const SELECTION_SIZE: usize = 6;
/// Canvas width in pixels
pub const CANVAS_WIDTH: u32 = 640;
/// Canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 840;

/// Gaussian sigma applied to every seam rectangle
pub const SEAM_SIGMA: f32 = 5.0;

// Defaults for configurable parameters
/// Fixed seed for the reference-image draw
pub const DEFAULT_SEED: u64 = 42;
/// Directory scanned for source images when none is given
pub const DEFAULT_SOURCE_DIR: &str = "images";
/// Directory recreated for the finished collage
pub const DEFAULT_OUTPUT_DIR: &str = "output";

// Input and output naming
/// Extension accepted by the source-folder filter
pub const SOURCE_EXTENSION: &str = "jpg";
/// File name of the written collage
pub const OUTPUT_FILE_NAME: &str = "HybridCollage.jpg";
