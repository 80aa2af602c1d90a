//! Folder-to-archive compression for casemint.
//!
//! Serializes a directory tree into a single timestamped `.7z` archive,
//! optionally password-protected with AES-256.

pub mod errors;
pub mod writer;

pub use errors::ArchiveError;
pub use writer::{ARCHIVE_EXTENSION, ARCHIVE_ROOT, ArchiveOptions, archive_name, compress};
