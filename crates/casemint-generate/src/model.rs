use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where the per-category CSV files are written.
    pub out_dir: PathBuf,
    /// Rows generated for each category dataset.
    pub rows: u64,
    /// Seed for deterministic generation.
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dummy_data/raw_data"),
            rows: 100,
            seed: 0,
        }
    }
}

/// Summary of one written dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    pub category: String,
    pub rows: u64,
    pub bytes_written: u64,
    pub path: PathBuf,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub datasets: Vec<DatasetReport>,
    pub duration_ms: u64,
}
