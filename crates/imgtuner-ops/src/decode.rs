//! Image decoding from raw bytes.
//!
//! Accepts whatever formats the `image` crate is built with (PNG, JPEG,
//! BMP, WebP) and produces a [`DynamicImage`] for the transform stages.

use image::DynamicImage;

use crate::types::TuneError;

/// Decode raw image bytes.
///
/// # Errors
///
/// Returns [`TuneError::EmptyInput`] if `bytes` is empty.
/// Returns [`TuneError::ImageDecode`] if the format is unrecognized or
/// the data is corrupt.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, TuneError> {
    if bytes.is_empty() {
        return Err(TuneError::EmptyInput);
    }

    Ok(image::load_from_memory(bytes)?)
}
