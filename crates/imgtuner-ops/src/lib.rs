//! imgtuner-ops: Pure image transforms (sans-IO).
//!
//! Houses the canned transforms the tuning service dispatches on
//! (color passthrough, grayscale, binary threshold, exact resize) plus
//! the local adjustments the interactive front end offers
//! (brightness/contrast, blur/sharpen/edge/invert) and region editing.
//!
//! This crate has **no I/O dependencies** — it operates on in-memory
//! byte slices and `image` buffers. Filesystem and HTTP interaction
//! live in `imgtuner-serve`.

pub mod adjust;
pub mod decode;
pub mod filter;
pub mod grayscale;
pub mod resize;
pub mod roi;
pub mod threshold;
pub mod types;

pub use decode::decode;
pub use roi::{Region, Selection};
pub use types::{Dimensions, DynamicImage, TuneError, TuneKind};

/// Apply one canned transform and resize to the requested dimensions.
///
/// This is the dispatch step of the tuning service: branch on `kind`
/// for the channel conversion, then always resize the converted buffer
/// to exactly `target` (no aspect-ratio preservation).
///
/// - [`TuneKind::Grayscale`]: single-channel luminance.
/// - [`TuneKind::Binary`]: luminance thresholded at
///   [`threshold::BINARY_LEVEL`], producing only {0, 255}.
/// - [`TuneKind::Color`]: three-channel Rgb8 (alpha dropped).
///
/// Unrecognized transform names never reach this function;
/// [`TuneKind::from_name`] coerces them to `Color`.
#[must_use = "returns the transformed image"]
pub fn tune(image: &DynamicImage, kind: TuneKind, target: Dimensions) -> DynamicImage {
    let converted = match kind {
        TuneKind::Grayscale => DynamicImage::ImageLuma8(grayscale::to_luminance(image)),
        TuneKind::Binary => DynamicImage::ImageLuma8(threshold::binarize(
            &grayscale::to_luminance(image),
            threshold::BINARY_LEVEL,
        )),
        TuneKind::Color => DynamicImage::ImageRgb8(image.to_rgb8()),
    };

    resize::resize_to(&converted, target)
}

/// Decode raw bytes, then apply [`tune`].
///
/// # Errors
///
/// Returns [`TuneError::EmptyInput`] or [`TuneError::ImageDecode`] when
/// the bytes cannot be decoded.
pub fn tune_bytes(
    bytes: &[u8],
    kind: TuneKind,
    target: Dimensions,
) -> Result<DynamicImage, TuneError> {
    let image = decode::decode(bytes)?;
    Ok(tune(&image, kind, target))
}
