//! Source-folder scanning and decoded image storage

use crate::io::configuration::SOURCE_EXTENSION;
use crate::io::error::{CollageError, Result, filesystem_error};
use image::RgbImage;
use std::collections::BTreeMap;
use std::path::Path;

/// Decoded source images keyed by file name
///
/// Populated once per run and immutable afterwards; every downstream stage
/// reads from the same collection instead of re-decoding files or keeping a
/// hidden process-wide cache.
#[derive(Debug, Default)]
pub struct ImageCollection {
    images: BTreeMap<String, RgbImage>,
}

impl ImageCollection {
    /// Scan a directory for `.jpg` files and decode each into the collection
    ///
    /// Non-matching files are ignored. File names are the image identifiers
    /// and must therefore be unique, which a single directory guarantees.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory cannot be read
    /// - A matching file cannot be decoded
    /// - No file matches the extension filter
    pub fn from_directory(dir: &Path) -> Result<Self> {
        let mut images = BTreeMap::new();

        let entries = std::fs::read_dir(dir).map_err(|e| filesystem_error(dir, "read directory", e))?;
        for entry in entries {
            let path = entry
                .map_err(|e| filesystem_error(dir, "read directory entry", e))?
                .path();
            if path.extension().and_then(|s| s.to_str()) != Some(SOURCE_EXTENSION) {
                continue;
            }

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let decoded = image::open(&path)
                .map_err(|e| CollageError::ImageLoad {
                    path: path.clone(),
                    source: e,
                })?
                .to_rgb8();
            images.insert(name, decoded);
        }

        if images.is_empty() {
            return Err(CollageError::EmptyInput {
                reason: format!("no .{SOURCE_EXTENSION} files in '{}'", dir.display()),
            });
        }

        Ok(Self { images })
    }

    /// Build a collection from already decoded images
    pub fn from_images<I>(images: I) -> Self
    where
        I: IntoIterator<Item = (String, RgbImage)>,
    {
        Self {
            images: images.into_iter().collect(),
        }
    }

    /// Number of images in the collection
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the collection holds no images
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Look up an image by its identifier
    pub fn get(&self, name: &str) -> Option<&RgbImage> {
        self.images.get(name)
    }

    /// Iterate images in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RgbImage)> {
        self.images.iter().map(|(name, image)| (name.as_str(), image))
    }

    /// Iterate identifiers in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }
}
