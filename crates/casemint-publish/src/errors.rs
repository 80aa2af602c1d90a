use thiserror::Error;

/// Errors emitted by the publisher.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("upload error: {0}")]
    Upload(String),
}
