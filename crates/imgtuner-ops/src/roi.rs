//! Region selection and region-scoped editing.
//!
//! Models the drag-to-select interaction of the cropping tool as an
//! explicit state machine instead of mutable globals. A pointer drag
//! moves the machine `Idle -> Dragging -> Selected`; the selected
//! [`Region`] then feeds [`crop`] or [`blur_region`].

use image::DynamicImage;

use crate::filter;

/// A rectangular region in image coordinates.
///
/// Always normalized: `(x, y)` is the top-left corner and the extents
/// are non-negative. Construction from two arbitrary drag corners goes
/// through [`Region::from_corners`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Region {
    /// Build a normalized region from two drag corners, in either order.
    #[must_use]
    pub const fn from_corners(a: (u32, u32), b: (u32, u32)) -> Self {
        let x = if a.0 < b.0 { a.0 } else { b.0 };
        let y = if a.1 < b.1 { a.1 } else { b.1 };
        Self {
            x,
            y,
            width: a.0.abs_diff(b.0),
            height: a.1.abs_diff(b.1),
        }
    }

    /// Returns `true` if the region covers no pixels.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Clamp the region to fit within `(image_width, image_height)`.
    ///
    /// A region entirely outside the image clamps to an empty region at
    /// the nearest edge.
    #[must_use]
    pub fn clamp_to(self, image_width: u32, image_height: u32) -> Self {
        let x = self.x.min(image_width);
        let y = self.y.min(image_height);
        Self {
            x,
            y,
            width: self.width.min(image_width - x),
            height: self.height.min(image_height - y),
        }
    }
}

/// Interaction state for drag-to-select.
///
/// Transitions are driven by pointer events:
///
/// - `pointer_down` starts a drag from any state.
/// - `pointer_move` while dragging yields the live rubber-band region.
/// - `pointer_up` while dragging normalizes the corners into `Selected`.
///
/// Events that do not match the current state leave it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No drag in progress and nothing selected.
    #[default]
    Idle,
    /// Pointer is down; `start` is the anchor corner.
    Dragging {
        /// The corner where the drag began.
        start: (u32, u32),
    },
    /// A completed selection.
    Selected {
        /// The normalized selected region.
        region: Region,
    },
}

impl Selection {
    /// Begin a drag at `(x, y)`. Discards any previous selection.
    #[must_use]
    pub const fn pointer_down(self, x: u32, y: u32) -> Self {
        Self::Dragging { start: (x, y) }
    }

    /// The live rubber-band region for the current pointer position,
    /// or `None` when no drag is in progress.
    #[must_use]
    pub const fn pointer_move(self, x: u32, y: u32) -> Option<Region> {
        match self {
            Self::Dragging { start } => Some(Region::from_corners(start, (x, y))),
            Self::Idle | Self::Selected { .. } => None,
        }
    }

    /// Finish a drag at `(x, y)`, normalizing the corners.
    ///
    /// A pointer-up without a drag in progress is a no-op.
    #[must_use]
    pub const fn pointer_up(self, x: u32, y: u32) -> Self {
        match self {
            Self::Dragging { start } => Self::Selected {
                region: Region::from_corners(start, (x, y)),
            },
            Self::Idle | Self::Selected { .. } => self,
        }
    }

    /// The completed selection, if any.
    #[must_use]
    pub const fn region(self) -> Option<Region> {
        match self {
            Self::Selected { region } => Some(region),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }
}

/// Crop an image to `region`, clamped to the image bounds.
#[must_use = "returns the cropped image"]
pub fn crop(image: &DynamicImage, region: Region) -> DynamicImage {
    let r = region.clamp_to(image.width(), image.height());
    image.crop_imm(r.x, r.y, r.width, r.height)
}

/// Blur only `region`, splicing the blurred patch back into a copy of
/// the full image. An empty (or fully out-of-bounds) region returns the
/// image unchanged.
#[must_use = "returns the edited image"]
pub fn blur_region(image: &DynamicImage, region: Region, sigma: f32) -> DynamicImage {
    let r = region.clamp_to(image.width(), image.height());
    if r.is_empty() {
        return image.clone();
    }

    let patch = filter::blur(&image.crop_imm(r.x, r.y, r.width, r.height), sigma);
    let mut edited = image.clone();
    image::imageops::replace(&mut edited, &patch, i64::from(r.x), i64::from(r.y));
    edited
}
