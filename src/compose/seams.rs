//! Gaussian smoothing of the seam rectangles between tiles

use crate::compose::layout::SEAM_REGIONS;
use crate::io::configuration::SEAM_SIGMA;
use crate::io::error::{CollageError, Result};
use image::{Rgb32FImage, imageops};
use imageproc::filter::gaussian_blur_f32;

/// Blur the five fixed seam rectangles of the canvas in place
///
/// The canvas is first divided by its maximum subpixel value so every value
/// lies in [0, 1]. Each seam rectangle is then extracted, blurred with a
/// sigma-5 Gaussian and written back over its source pixels. Regions are
/// processed sequentially and each blur reads only its own rectangle, so
/// pixels outside the five regions are never rewritten.
///
/// # Errors
///
/// Returns a `Normalization` error when the canvas maximum is zero or
/// non-finite (an all-black canvas cannot be normalized).
pub fn blur_seams(canvas: &mut Rgb32FImage) -> Result<()> {
    let max = canvas.iter().copied().fold(0.0_f32, f32::max);
    if max <= 0.0 || !max.is_finite() {
        return Err(CollageError::Normalization {
            operation: "canvas pixel values",
        });
    }
    for value in canvas.iter_mut() {
        *value /= max;
    }

    for region in &SEAM_REGIONS {
        let roi = imageops::crop_imm(&*canvas, region.x, region.y, region.width, region.height)
            .to_image();
        let blurred = gaussian_blur_f32(&roi, SEAM_SIGMA);
        imageops::replace(canvas, &blurred, i64::from(region.x), i64::from(region.y));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::layout::SeamRegion;
    use crate::io::configuration::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use image::Rgb;

    fn inside_any_region(x: u32, y: u32) -> bool {
        SEAM_REGIONS.iter().any(|region| region.contains(x, y))
    }

    // A canvas whose maximum is already 1.0, so normalization is the identity
    fn patterned_canvas() -> Rgb32FImage {
        Rgb32FImage::from_fn(CANVAS_WIDTH, CANVAS_HEIGHT, |x, y| {
            if (x + y) % 7 == 0 {
                Rgb([1.0, 0.5, 0.25])
            } else {
                Rgb([0.1, 0.2, 0.3])
            }
        })
    }

    #[test]
    fn test_pixels_outside_regions_are_untouched() {
        let mut canvas = patterned_canvas();
        let before = canvas.clone();
        blur_seams(&mut canvas).unwrap();

        for (x, y, pixel) in canvas.enumerate_pixels() {
            if !inside_any_region(x, y) {
                assert_eq!(pixel, before.get_pixel(x, y), "pixel ({x},{y}) changed");
            }
        }
    }

    #[test]
    fn test_seam_regions_are_smoothed() {
        let mut canvas = patterned_canvas();
        let before = canvas.clone();
        blur_seams(&mut canvas).unwrap();

        // The checker-like pattern must lose contrast somewhere in each region
        for region in &SEAM_REGIONS {
            let SeamRegion { x, y, width, height } = *region;
            let changed = (y..y + height).any(|py| {
                (x..x + width).any(|px| canvas.get_pixel(px, py) != before.get_pixel(px, py))
            });
            assert!(changed, "region at ({x},{y}) was not blurred");
        }
    }

    #[test]
    fn test_black_canvas_fails_normalization() {
        let mut canvas = Rgb32FImage::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        let err = blur_seams(&mut canvas).unwrap_err();
        assert!(matches!(err, CollageError::Normalization { .. }));
    }

    #[test]
    fn test_values_stay_in_unit_range() {
        let mut canvas = patterned_canvas();
        // Scale up so the normalization pass has real work to do
        for value in canvas.iter_mut() {
            *value *= 3.0;
        }
        blur_seams(&mut canvas).unwrap();
        assert!(canvas.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}
