//! Request-scoped temporary file store.
//!
//! Persists an uploaded byte stream under a configured root directory
//! and deletes it once the request finishes. Files are keyed by the
//! upload's base filename: two concurrent uploads sharing a name race
//! on the same path and the last write wins. Callers must not assume
//! isolation between same-named uploads.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::ServiceError;

/// Fallback file name for uploads whose filename has no base component.
const FALLBACK_NAME: &str = "upload";

/// Handle to the temp directory, cheap to clone into request handlers.
#[derive(Debug, Clone)]
pub struct TempStore {
    root: Arc<PathBuf>,
}

impl TempStore {
    /// Create a store rooted at `root`. The directory is created lazily
    /// on the first save.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// The configured root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` to `<root>/<base name of filename>`, creating the
    /// root directory if absent. Returns the path written.
    ///
    /// Only the base name of `filename` is used, so client-supplied
    /// directory components cannot place files outside the root.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Save`] when the directory cannot be
    /// created or the file cannot be written.
    pub fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, ServiceError> {
        std::fs::create_dir_all(self.root.as_path()).map_err(ServiceError::Save)?;

        let name = Path::new(filename)
            .file_name()
            .unwrap_or_else(|| OsStr::new(FALLBACK_NAME));
        let path = self.root.join(name);
        std::fs::write(&path, bytes).map_err(ServiceError::Save)?;

        log::debug!("saved {} byte upload to {}", bytes.len(), path.display());
        Ok(path)
    }

    /// Remove the file at `path`. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Delete`] for any failure other than the
    /// file already being gone.
    pub fn delete(&self, path: &Path) -> Result<(), ServiceError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(ServiceError::Delete(err)),
        }
    }
}
