//! Transform dispatch over a saved upload.
//!
//! Bridges the filesystem side of a request (the temp file) to the pure
//! transforms in `imgtuner-ops`.

use std::path::Path;

use imgtuner_ops::{Dimensions, DynamicImage, TuneKind};

use crate::error::ServiceError;

/// Load the image at `path`, apply the `kind` conversion, and resize to
/// exactly `target`.
///
/// # Errors
///
/// Returns [`ServiceError::Read`] when the file cannot be read and
/// [`ServiceError::Tune`] when the bytes cannot be decoded — both the
/// "not found / undecodable" condition.
pub fn apply(path: &Path, kind: TuneKind, target: Dimensions) -> Result<DynamicImage, ServiceError> {
    let bytes = std::fs::read(path).map_err(ServiceError::Read)?;
    Ok(imgtuner_ops::tune_bytes(&bytes, kind, target)?)
}
