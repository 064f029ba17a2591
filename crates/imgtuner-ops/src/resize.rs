//! Exact-size resizing.
//!
//! The service resizes every output to the caller's requested
//! `(width, height)` with bilinear interpolation and no aspect-ratio
//! preservation — a 200x100 source requested at 50x50 comes back 50x50,
//! stretched.

use image::DynamicImage;
use image::imageops::FilterType;

use crate::types::Dimensions;

/// Resize an image to exactly `target`, ignoring aspect ratio.
#[must_use = "returns the resized image"]
pub fn resize_to(image: &DynamicImage, target: Dimensions) -> DynamicImage {
    image.resize_exact(target.width, target.height, FilterType::Triangle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(image::RgbImage::from_pixel(w, h, image::Rgb([128, 64, 32])))
    }

    #[test]
    fn upscale_to_exact_dimensions() {
        let resized = resize_to(&test_image(10, 10), Dimensions::new(40, 30));
        assert_eq!(resized.width(), 40);
        assert_eq!(resized.height(), 30);
    }

    #[test]
    fn downscale_to_exact_dimensions() {
        let resized = resize_to(&test_image(200, 200), Dimensions::new(50, 50));
        assert_eq!(resized.width(), 50);
        assert_eq!(resized.height(), 50);
    }

    #[test]
    fn aspect_ratio_is_not_preserved() {
        let resized = resize_to(&test_image(200, 100), Dimensions::new(50, 50));
        assert_eq!(resized.width(), 50);
        assert_eq!(resized.height(), 50);
    }

    #[test]
    fn grayscale_input_stays_single_channel() {
        let gray = DynamicImage::ImageLuma8(image::GrayImage::new(20, 20));
        let resized = resize_to(&gray, Dimensions::new(10, 10));
        assert_eq!(resized.color().channel_count(), 1);
    }
}
