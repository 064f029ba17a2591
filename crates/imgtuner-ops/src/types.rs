//! Shared types for the imgtuner transform library.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Re-export `DynamicImage` so downstream crates can hold decoded images
/// without depending on `image` directly.
pub use image::DynamicImage;

/// Re-export `GrayImage` for single-channel intermediate buffers.
pub use image::GrayImage;

/// Which channel conversion to apply before resizing.
///
/// Parsed from the endpoint's `type` query parameter. Unrecognized names
/// coerce to [`TuneKind::Color`] rather than failing — the service has
/// always treated unknown values as a passthrough request, and callers
/// depend on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TuneKind {
    /// No channel conversion; three-channel Rgb8 output.
    #[default]
    Color,
    /// Single-channel luminance output.
    Grayscale,
    /// Luminance thresholded at a fixed level; output pixels are 0 or 255.
    Binary,
}

impl TuneKind {
    /// Parse a transform name, coercing unknown names to `Color`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "grayscale" => Self::Grayscale,
            "binary" => Self::Binary,
            _ => Self::Color,
        }
    }

    /// The canonical name for this kind, as accepted by [`Self::from_name`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Grayscale => "grayscale",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for TuneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TuneKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for TuneKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Target image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Errors that can occur while decoding or transforming an image.
#[derive(Debug, thiserror::Error)]
pub enum TuneError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,
}
