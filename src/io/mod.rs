//! Input/output operations: image loading, error handling, configuration and the CLI

/// Command-line interface and run orchestration
pub mod cli;
/// Source-folder scanning and decoded image storage
pub mod collection;
/// Fixed parameters for scoring, layout and output
pub mod configuration;
/// Error types for all collage operations
pub mod error;
/// Output directory handling and collage export
pub mod output;
/// Stage progress reporting
pub mod progress;
