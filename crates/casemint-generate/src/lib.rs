//! Synthetic case dataset generation for casemint.
//!
//! This crate produces deterministic per-category CSV datasets from a
//! seeded RNG: shared fields come from a fixed catalog, the area field
//! from an injected locality-name source, and category-dependent fields
//! from the category's declared value sets.

pub mod engine;
pub mod errors;
pub mod model;
pub mod names;
pub mod output;
pub mod records;

pub use engine::{GenerationEngine, GenerationResult, assemble};
pub use errors::GenerationError;
pub use model::{DatasetReport, GenerateOptions, GenerationReport};
pub use names::{FakeLocalityNames, LocalityNames};
pub use records::RecordGenerator;
