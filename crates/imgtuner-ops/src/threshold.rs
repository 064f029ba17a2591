//! Binary thresholding.
//!
//! Wraps [`imageproc::contrast::threshold`] to turn a luminance image
//! into a two-valued image: pixels above the level become 255, the rest
//! become 0.

use image::GrayImage;
use imageproc::contrast::ThresholdType;

/// Fixed threshold level used by the `binary` transform.
///
/// The midpoint of the 8-bit range, matching the service's historical
/// behavior.
pub const BINARY_LEVEL: u8 = 127;

/// Threshold a luminance image into a binary {0, 255} image.
#[must_use = "returns the thresholded image"]
pub fn binarize(image: &GrayImage, level: u8) -> GrayImage {
    imageproc::contrast::threshold(image, level, ThresholdType::Binary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_contains_only_two_values() {
        // A horizontal gradient covering the full 8-bit range.
        #[allow(clippy::cast_possible_truncation)]
        let img = GrayImage::from_fn(256, 4, |x, _y| image::Luma([x as u8]));
        let binary = binarize(&img, BINARY_LEVEL);
        for pixel in binary.pixels() {
            assert!(
                pixel.0[0] == 0 || pixel.0[0] == 255,
                "expected only 0 or 255, got {}",
                pixel.0[0],
            );
        }
    }

    #[test]
    fn values_above_level_become_white() {
        let img = GrayImage::from_pixel(3, 3, image::Luma([200]));
        let binary = binarize(&img, BINARY_LEVEL);
        assert!(binary.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn values_at_or_below_level_become_black() {
        let img = GrayImage::from_pixel(3, 3, image::Luma([BINARY_LEVEL]));
        let binary = binarize(&img, BINARY_LEVEL);
        assert!(binary.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = GrayImage::new(17, 31);
        let binary = binarize(&img, BINARY_LEVEL);
        assert_eq!(binary.width(), 17);
        assert_eq!(binary.height(), 31);
    }
}
