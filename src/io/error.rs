//! Error types for collage generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// No usable images were found
    EmptyInput {
        /// Description of what was scanned or expected
        reason: String,
    },

    /// Failed to decode a source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A decoded image cannot be used for analysis or composition
    InvalidImage {
        /// Identifier of the offending image
        name: String,
        /// Explanation of why the image is unusable
        reason: String,
    },

    /// Fewer images than the fixed mosaic layout requires
    InsufficientImages {
        /// Number of images available
        found: usize,
        /// Number of tiles in the layout
        required: usize,
    },

    /// A score map or canvas could not be normalized because its maximum is zero
    Normalization {
        /// Name of the normalization that failed
        operation: &'static str,
    },

    /// Failed to save the collage to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { reason } => {
                write!(f, "No input images: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidImage { name, reason } => {
                write!(f, "Image '{name}' is unusable: {reason}")
            }
            Self::InsufficientImages { found, required } => {
                write!(
                    f,
                    "The mosaic layout needs {required} images but only {found} were found"
                )
            }
            Self::Normalization { operation } => {
                write!(
                    f,
                    "Cannot normalize {operation}: all raw values are zero or non-finite"
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export collage to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

/// Create an error for an image that cannot be analyzed or composed
pub fn invalid_image(name: &impl ToString, reason: &impl ToString) -> CollageError {
    CollageError::InvalidImage {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error with path and operation context
pub fn filesystem_error(
    path: &std::path::Path,
    operation: &'static str,
    source: std::io::Error,
) -> CollageError {
    CollageError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_images_display() {
        let err = CollageError::InsufficientImages {
            found: 4,
            required: 6,
        };
        let message = err.to_string();
        assert!(message.contains('4'));
        assert!(message.contains('6'));
    }

    #[test]
    fn test_filesystem_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = filesystem_error(std::path::Path::new("output"), "create directory", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("create directory"));
    }
}
