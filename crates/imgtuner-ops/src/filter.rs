//! Convolution-style filters: blur, sharpen, edge detection, inversion.
//!
//! Blur and sharpen operate on the full color image. Edge detection runs
//! Canny over a luminance conversion and returns a binary edge map.

use image::{DynamicImage, GrayImage};

use crate::grayscale;

/// Minimum allowed Canny threshold.
///
/// A low threshold of zero treats every pixel with any gradient as a
/// potential edge, producing a uselessly dense edge map.
pub const MIN_EDGE_THRESHOLD: f32 = 1.0;
const _: () = assert!(MIN_EDGE_THRESHOLD > 0.0);

/// Apply Gaussian blur.
///
/// Higher `sigma` values produce more smoothing. Non-positive sigma
/// values return the image unchanged.
#[must_use = "returns the blurred image"]
pub fn blur(image: &DynamicImage, sigma: f32) -> DynamicImage {
    if sigma <= 0.0 {
        return image.clone();
    }

    image.blur(sigma)
}

/// Sharpen via unsharp masking.
///
/// `sigma` controls the blur radius of the mask; `threshold` is the
/// minimum per-pixel difference that gets amplified, which keeps flat
/// regions from picking up noise. Non-positive sigma values return the
/// image unchanged.
#[must_use = "returns the sharpened image"]
pub fn sharpen(image: &DynamicImage, sigma: f32, threshold: i32) -> DynamicImage {
    if sigma <= 0.0 {
        return image.clone();
    }

    image.unsharpen(sigma, threshold)
}

/// Detect edges with the Canny algorithm.
///
/// Converts to luminance first and returns a binary image: 255 for edge
/// pixels, 0 for background. Both thresholds are clamped to a minimum of
/// [`MIN_EDGE_THRESHOLD`] and `low` is clamped to at most `high`.
#[must_use = "returns the binary edge map"]
pub fn edge(image: &DynamicImage, low: f32, high: f32) -> GrayImage {
    let gray = grayscale::to_luminance(image);
    let high = high.max(MIN_EDGE_THRESHOLD);
    let low = low.max(MIN_EDGE_THRESHOLD).min(high);
    imageproc::edges::canny(&gray, low, high)
}

/// Invert every channel (255 - value).
#[must_use = "returns the inverted image"]
pub fn invert(image: &DynamicImage) -> DynamicImage {
    let mut inverted = image.clone();
    inverted.invert();
    inverted
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10x10 color image with a sharp red/blue boundary at x = 5.
    fn sharp_boundary() -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_fn(10, 10, |x, _y| {
            if x < 5 {
                image::Rgb([255, 0, 0])
            } else {
                image::Rgb([0, 0, 255])
            }
        }))
    }

    #[test]
    fn zero_sigma_blur_is_identity() {
        let img = sharp_boundary();
        assert_eq!(blur(&img, 0.0).to_rgb8(), img.to_rgb8());
    }

    #[test]
    fn blur_smooths_sharp_boundary() {
        let blurred = blur(&sharp_boundary(), 2.0).to_rgb8();
        // Red channel next to the boundary should be intermediate.
        let left = blurred.get_pixel(4, 5).0[0];
        assert!(left < 255, "expected red to drop near boundary, got {left}");
        let right = blurred.get_pixel(5, 5).0[0];
        assert!(right > 0, "expected red to rise near boundary, got {right}");
    }

    #[test]
    fn blur_preserves_dimensions() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(17, 31));
        let blurred = blur(&img, 1.4);
        assert_eq!(blurred.width(), 17);
        assert_eq!(blurred.height(), 31);
    }

    #[test]
    fn zero_sigma_sharpen_is_identity() {
        let img = sharp_boundary();
        assert_eq!(sharpen(&img, 0.0, 1).to_rgb8(), img.to_rgb8());
    }

    #[test]
    fn sharpen_preserves_dimensions() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::new(17, 31));
        let sharpened = sharpen(&img, 1.0, 2);
        assert_eq!(sharpened.width(), 17);
        assert_eq!(sharpened.height(), 31);
    }

    #[test]
    fn edge_map_is_binary_and_marks_boundary() {
        let edges = edge(&sharp_boundary(), 50.0, 150.0);
        assert_eq!(edges.width(), 10);
        assert_eq!(edges.height(), 10);
        for pixel in edges.pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
        let edge_count: u32 = edges.pixels().map(|p| u32::from(p.0[0] > 0)).sum();
        assert!(edge_count > 0, "expected edges at the color boundary");
    }

    #[test]
    fn edge_on_uniform_image_is_empty() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            10,
            10,
            image::Rgb([128, 128, 128]),
        ));
        let edges = edge(&img, 50.0, 150.0);
        assert!(edges.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn invert_flips_channels() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            2,
            2,
            image::Rgb([10, 100, 250]),
        ));
        let inverted = invert(&img).to_rgb8();
        assert_eq!(inverted.get_pixel(0, 0).0, [245, 155, 5]);
    }

    #[test]
    fn double_invert_is_identity() {
        let img = sharp_boundary();
        assert_eq!(invert(&invert(&img)).to_rgb8(), img.to_rgb8());
    }
}
