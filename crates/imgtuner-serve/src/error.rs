//! Service error taxonomy and HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use imgtuner_ops::TuneError;

/// Everything that can go wrong while handling a tuning request.
///
/// Upload I/O failures are server-side errors carrying the underlying
/// cause; an unreadable or undecodable image is a not-found condition.
/// Unrecognized transform names are never an error — they coerce to the
/// color passthrough before dispatch.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Writing the upload to the temp directory failed.
    #[error("failed to save upload: {0}")]
    Save(#[source] std::io::Error),

    /// Removing the temp file failed during cleanup.
    #[error("failed to delete temporary file: {0}")]
    Delete(#[source] std::io::Error),

    /// Reading the saved file back for processing failed.
    #[error("image not found: {0}")]
    Read(#[source] std::io::Error),

    /// The saved bytes could not be decoded as an image.
    #[error(transparent)]
    Tune(#[from] TuneError),

    /// JPEG-encoding the processed buffer failed.
    #[error("failed to encode result as JPEG: {0}")]
    Encode(#[source] image::ImageError),

    /// The multipart body was malformed or exceeded limits.
    #[error("invalid multipart upload: {0}")]
    Upload(#[from] axum::extract::multipart::MultipartError),

    /// The multipart body carried no `file` field.
    #[error("request is missing the `file` field")]
    MissingFile,
}

impl ServiceError {
    /// HTTP status for this error.
    const fn status(&self) -> StatusCode {
        match self {
            Self::Read(_) | Self::Tune(_) => StatusCode::NOT_FOUND,
            Self::Upload(_) | Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::Save(_) | Self::Delete(_) | Self::Encode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::debug!("request failed ({status}): {self}");
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
