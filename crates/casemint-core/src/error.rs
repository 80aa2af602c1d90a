use thiserror::Error;

/// Core error type shared across casemint crates.
#[derive(Debug, Error)]
pub enum Error {
    /// An identifier does not name a known dataset category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Convenience alias for results returned by casemint crates.
pub type Result<T> = std::result::Result<T, Error>;
