//! Flattened RGB intensity histograms for color comparison

use crate::io::configuration::{COLOR_CHANNELS, HISTOGRAM_BINS};
use image::RgbImage;
use ndarray::Array1;

/// Compute the flattened RGB intensity histogram of an image
///
/// One 256-bin histogram per channel, concatenated in channel order into a
/// single 768-entry vector of raw pixel counts. Counts are not normalized;
/// the Chebyshev comparison operates on the raw bins.
pub fn rgb_histogram(image: &RgbImage) -> Array1<f64> {
    let mut histogram = Array1::<f64>::zeros(HISTOGRAM_BINS * COLOR_CHANNELS);

    for pixel in image.pixels() {
        for (channel, &value) in pixel.0.iter().enumerate() {
            let bin = channel * HISTOGRAM_BINS + value as usize;
            if let Some(slot) = histogram.get_mut(bin) {
                *slot += 1.0;
            }
        }
    }

    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_histogram_length_and_total_counts() {
        let image = RgbImage::from_pixel(10, 10, Rgb([7, 0, 255]));
        let histogram = rgb_histogram(&image);

        assert_eq!(histogram.len(), HISTOGRAM_BINS * COLOR_CHANNELS);
        // 100 pixels land in exactly one bin per channel
        assert!((histogram.get(7).copied().unwrap_or(0.0) - 100.0).abs() < f64::EPSILON);
        assert!((histogram.get(HISTOGRAM_BINS).copied().unwrap_or(0.0) - 100.0).abs() < f64::EPSILON);
        assert!(
            (histogram.get(2 * HISTOGRAM_BINS + 255).copied().unwrap_or(0.0) - 100.0).abs()
                < f64::EPSILON
        );
        assert!((histogram.sum() - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_identical_images_have_identical_histograms() {
        let a = RgbImage::from_fn(8, 8, |x, y| Rgb([(x * 20) as u8, (y * 20) as u8, 128]));
        let b = a.clone();
        assert_eq!(rgb_histogram(&a), rgb_histogram(&b));
    }
}
