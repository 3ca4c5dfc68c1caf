//! Output directory handling and collage export

use crate::io::configuration::OUTPUT_FILE_NAME;
use crate::io::error::{CollageError, Result, filesystem_error};
use image::{Rgb, Rgb32FImage, RgbImage};
use std::path::{Path, PathBuf};

/// Write the finished canvas into a freshly recreated output directory
///
/// Any pre-existing output directory is removed first, so a second run
/// overwrites rather than accumulates. This is the only stage that mutates
/// the filesystem; every scoring or composition failure aborts the run
/// before it is reached.
///
/// # Errors
///
/// Returns an error if the directory cannot be removed or created, or if
/// the image cannot be encoded to the output path.
pub fn write_collage(canvas: &Rgb32FImage, output_dir: &Path) -> Result<PathBuf> {
    if output_dir.exists() {
        std::fs::remove_dir_all(output_dir)
            .map_err(|e| filesystem_error(output_dir, "remove output directory", e))?;
    }
    std::fs::create_dir_all(output_dir)
        .map_err(|e| filesystem_error(output_dir, "create output directory", e))?;

    let (width, height) = canvas.dimensions();
    let mut export = RgbImage::new(width, height);
    for (x, y, pixel) in canvas.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        export.put_pixel(x, y, Rgb([to_byte(r), to_byte(g), to_byte(b)]));
    }

    let path = output_dir.join(OUTPUT_FILE_NAME);
    export.save(&path).map_err(|e| CollageError::ImageExport {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}

fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
