//! Oriented-gradient descriptor extraction for texture scoring

use crate::io::configuration::{
    COLOR_CHANNELS, DESCRIPTOR_BLOCK_SIDE, DESCRIPTOR_BLOCK_STRIDE, DESCRIPTOR_CELL_SIDE,
    DESCRIPTOR_ORIENTATIONS,
};
use crate::io::error::{Result, invalid_image};
use image::{GrayImage, RgbImage, imageops};
use imageproc::hog::{HogOptions, hog};

/// Compute the oriented-gradient descriptor of an image
///
/// Each RGB channel is extracted as a grayscale plane and run through the
/// histogram-of-oriented-gradients feature extractor with the fixed
/// parameters (9 unsigned orientation bins, 8x8 pixel cells, 2x2 cell
/// blocks, stride 1); the three per-channel descriptors are concatenated.
///
/// The extractor requires dimensions that divide evenly into cells, so the
/// image is cropped at the right and bottom to the nearest cell multiple
/// first. Remainder pixels carry negligible weight for a variance-based
/// texture proxy.
///
/// # Errors
///
/// Returns an error if the image is smaller than a single descriptor block
/// after cropping, or if the feature extractor rejects the plane.
pub fn edge_descriptor(name: &str, image: &RgbImage) -> Result<Vec<f32>> {
    let (width, height) = image.dimensions();
    let cell = DESCRIPTOR_CELL_SIDE as u32;
    let cropped_width = width - width % cell;
    let cropped_height = height - height % cell;

    let min_side = cell * DESCRIPTOR_BLOCK_SIDE as u32;
    if cropped_width < min_side || cropped_height < min_side {
        return Err(invalid_image(
            &name,
            &format!(
                "{width}x{height} is smaller than the {min_side}x{min_side} descriptor minimum"
            ),
        ));
    }

    let cropped = imageops::crop_imm(image, 0, 0, cropped_width, cropped_height).to_image();

    let mut descriptor = Vec::new();
    for channel in 0..COLOR_CHANNELS {
        let plane: Vec<u8> = cropped
            .pixels()
            .map(|pixel| pixel.0.get(channel).copied().unwrap_or(0))
            .collect();
        let gray = GrayImage::from_raw(cropped_width, cropped_height, plane).ok_or_else(|| {
            invalid_image(&name, &"channel plane does not match image dimensions")
        })?;

        let options = HogOptions {
            orientations: DESCRIPTOR_ORIENTATIONS,
            signed: false,
            cell_side: DESCRIPTOR_CELL_SIDE,
            block_side: DESCRIPTOR_BLOCK_SIDE,
            block_stride: DESCRIPTOR_BLOCK_STRIDE,
        };
        let channel_descriptor =
            hog(&gray, options).map_err(|reason| invalid_image(&name, &reason))?;
        descriptor.extend_from_slice(&channel_descriptor);
    }

    Ok(descriptor)
}
