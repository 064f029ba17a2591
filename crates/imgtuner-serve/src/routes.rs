//! Router and the image-processing request handler.
//!
//! Per-request lifecycle:
//! `received -> saved -> dispatched -> encoded -> cleaned-up -> responded`,
//! where cleanup of the temp file runs on every path, including failure.

use axum::Router;
use axum::extract::{Multipart, Query, State};
use axum::response::Json;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};

use imgtuner_ops::{Dimensions, DynamicImage, TuneKind};

use crate::dispatch;
use crate::error::ServiceError;
use crate::store::TempStore;

/// Build the application router.
pub fn router(store: TempStore) -> Router {
    Router::new()
        .route("/", get(|| async { "Welcome to the imgtuner API" }))
        .route("/image/image_processing", post(image_processing))
        .with_state(store)
}

/// Query parameters of the processing endpoint.
///
/// All parameters are optional: `type` defaults to the color
/// passthrough (and unknown names coerce to it), `width` and `height`
/// default to 100.
#[derive(Debug, Deserialize)]
pub struct TuneQuery {
    #[serde(rename = "type", default)]
    kind: TuneKind,
    #[serde(default = "default_extent")]
    width: u32,
    #[serde(default = "default_extent")]
    height: u32,
}

const fn default_extent() -> u32 {
    100
}

/// Successful response body.
#[derive(Debug, Serialize)]
pub struct TuneResponse {
    /// The uploaded file's original name.
    pub filename: String,
    /// Raw JPEG bytes. Serializes as a JSON integer array; the service
    /// has never base64-wrapped the payload at this layer.
    pub content: Vec<u8>,
}

/// `POST /image/image_processing`
///
/// Accepts a multipart `file` field, saves it to the temp store, runs
/// the requested transform, and returns the JPEG-encoded result. The
/// temp file is deleted whether processing succeeds or fails; a cleanup
/// failure after a processing failure is logged rather than returned so
/// it cannot mask the original error.
async fn image_processing(
    State(store): State<TempStore>,
    Query(query): Query<TuneQuery>,
    multipart: Multipart,
) -> Result<Json<TuneResponse>, ServiceError> {
    let (filename, bytes) = read_upload(multipart).await?;
    log::debug!(
        "processing {filename:?}: type={} target={}x{}",
        query.kind,
        query.width,
        query.height,
    );

    let path = store.save(&filename, &bytes)?;
    let outcome = dispatch::apply(&path, query.kind, Dimensions::new(query.width, query.height));
    let cleanup = store.delete(&path);

    let tuned = match outcome {
        Ok(image) => {
            cleanup?;
            image
        }
        Err(err) => {
            if let Err(cleanup_err) = cleanup {
                log::warn!("cleanup after failed request also failed: {cleanup_err}");
            }
            return Err(err);
        }
    };

    let content = encode_jpeg(&tuned)?;
    Ok(Json(TuneResponse { filename, content }))
}

/// Pull the `file` field out of the multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Vec<u8>), ServiceError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload").to_owned();
            let bytes = field.bytes().await?;
            return Ok((filename, bytes.to_vec()));
        }
    }

    Err(ServiceError::MissingFile)
}

/// Encode the processed buffer as JPEG bytes.
fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>, ServiceError> {
    let mut buf = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut buf, image::ImageFormat::Jpeg)
        .map_err(ServiceError::Encode)?;
    Ok(buf.into_inner())
}
