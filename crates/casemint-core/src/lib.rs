//! Core contracts shared across casemint crates.
//!
//! This crate defines the dataset categories, the synthetic case record
//! model, and the error type shared by the generation, archive, and
//! publishing crates.

pub mod category;
pub mod error;
pub mod record;

pub use category::Category;
pub use error::{Error, Result};
pub use record::{CaseRecord, Dataset};
