//! Luminance (grayscale) conversion.
//!
//! Reduces a multi-channel color image to a single intensity channel
//! using the standard weights: `0.299*R + 0.587*G + 0.114*B`.

use image::{DynamicImage, GrayImage};

/// Convert a decoded image to single-channel luminance.
#[must_use = "returns the grayscale image"]
pub fn to_luminance(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}
