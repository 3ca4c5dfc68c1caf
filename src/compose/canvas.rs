//! Assembles the selected images into the fixed mosaic canvas

use crate::compose::layout::TILE_LAYOUT;
use crate::io::collection::ImageCollection;
use crate::io::configuration::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::io::error::{Result, invalid_image};
use crate::scoring::ranking::RankedSelection;
use image::{Rgb, Rgb32FImage, imageops};

/// Compose the 640x840 canvas from the ranked selection
///
/// Every tile placement resizes its source image to the exact tile
/// dimensions with bilinear resampling (aspect ratio is not preserved) and
/// pastes it at the tile rectangle. Subpixels are converted to f32 in
/// [0, 1] so the seam blurrer can operate on a normalized canvas.
///
/// # Errors
///
/// Returns an error if a ranked identifier has no decoded image in the
/// collection, which would mean the selection and collection diverged.
pub fn compose_canvas(
    selection: &RankedSelection,
    collection: &ImageCollection,
) -> Result<Rgb32FImage> {
    let mut canvas = Rgb32FImage::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    for placement in &TILE_LAYOUT {
        let name = selection.name_at(placement.rank).ok_or_else(|| {
            invalid_image(
                &placement.rank,
                &"selection holds no image at this tile rank",
            )
        })?;
        let source = collection
            .get(name)
            .ok_or_else(|| invalid_image(&name, &"selected but missing from the collection"))?;

        let resized = imageops::resize(
            source,
            placement.width,
            placement.height,
            imageops::FilterType::Triangle,
        );
        for (x, y, pixel) in resized.enumerate_pixels() {
            let [r, g, b] = pixel.0;
            canvas.put_pixel(
                placement.x + x,
                placement.y + y,
                Rgb([
                    f32::from(r) / 255.0,
                    f32::from(g) / 255.0,
                    f32::from(b) / 255.0,
                ]),
            );
        }
    }

    Ok(canvas)
}
