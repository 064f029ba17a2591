//! imgtuner-serve: HTTP surface of the image-tuning service.
//!
//! One endpoint accepts a multipart image upload plus query parameters,
//! persists the upload to a request-scoped temp file, dispatches the
//! requested transform via `imgtuner-ops`, JPEG-encodes the result, and
//! responds with JSON. The temp file is removed on every path, success
//! or failure.

pub mod dispatch;
pub mod error;
pub mod routes;
pub mod store;

pub use error::ServiceError;
pub use store::TempStore;
