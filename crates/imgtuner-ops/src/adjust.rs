//! Brightness and contrast adjustment.
//!
//! Thin wrappers over the `image` crate's per-pixel adjustments, kept
//! here so every transform the UI offers has one library entry point.

use image::DynamicImage;

/// Adjust brightness by adding `offset` to every channel, clamped to
/// the 8-bit range. Negative offsets darken.
#[must_use = "returns the adjusted image"]
pub fn brightness(image: &DynamicImage, offset: i32) -> DynamicImage {
    image.brighten(offset)
}

/// Adjust contrast. Positive `amount` increases contrast, negative
/// decreases it; zero is the identity.
#[must_use = "returns the adjusted image"]
pub fn contrast(image: &DynamicImage, amount: f32) -> DynamicImage {
    image.adjust_contrast(amount)
}
