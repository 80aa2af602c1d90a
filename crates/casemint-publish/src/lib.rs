//! Publishing the newest archive to object storage.
//!
//! Scans a directory for `.7z` archives, selects the most recently
//! modified one, and uploads it through an [`ObjectStore`]. Production
//! code uses the S3-backed store; tests inject an in-memory one.

pub mod errors;
pub mod publisher;
pub mod store;

pub use errors::PublishError;
pub use publisher::{ARCHIVE_EXTENSION, UploadTarget, latest_archive, publish_latest};
pub use store::{ObjectStore, S3ObjectStore};
