use thiserror::Error;

/// Errors emitted while building an archive.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive error: {0}")]
    Sevenz(#[from] sevenz_rust::Error),
}
