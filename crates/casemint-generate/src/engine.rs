use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use casemint_core::{Category, Dataset};

use crate::errors::GenerationError;
use crate::model::{DatasetReport, GenerateOptions, GenerationReport};
use crate::names::{FakeLocalityNames, LocalityNames};
use crate::output::csv::write_dataset_csv;
use crate::records::RecordGenerator;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating the per-category dummy datasets.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        self.run_with_names(&FakeLocalityNames)
    }

    /// Run with a caller-supplied locality-name source.
    pub fn run_with_names(
        &self,
        names: &dyn LocalityNames,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        std::fs::create_dir_all(&self.options.out_dir)?;

        info!(
            run_id = %run_id,
            rows = self.options.rows,
            seed = self.options.seed,
            out_dir = %self.options.out_dir.display(),
            "generation started"
        );

        let generator = RecordGenerator::new(names);
        let mut report = GenerationReport {
            run_id: run_id.clone(),
            seed: self.options.seed,
            datasets: Vec::new(),
            duration_ms: 0,
        };

        for category in Category::ALL {
            let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(self.options.seed, category.key()));
            let dataset = assemble(category, self.options.rows, &generator, &mut rng);
            let path = self
                .options
                .out_dir
                .join(format!("{}.csv", category.file_stem()));
            let bytes_written = write_dataset_csv(&path, &dataset)?;

            info!(
                category = category.key(),
                rows = dataset.len(),
                bytes_written,
                path = %path.display(),
                "dataset written"
            );

            report.datasets.push(DatasetReport {
                category: category.key().to_string(),
                rows: dataset.len() as u64,
                bytes_written,
                path,
            });
        }

        report.duration_ms = start.elapsed().as_millis() as u64;
        let report_path = self.options.out_dir.join("generation_report.json");
        std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;

        info!(
            run_id = %run_id,
            datasets = report.datasets.len(),
            duration_ms = report.duration_ms,
            "generation completed"
        );

        Ok(GenerationResult {
            out_dir: self.options.out_dir.clone(),
            report,
        })
    }
}

/// Attach the category-dependent fields to freshly generated records.
///
/// The case sub-type is drawn uniformly from the category's fixed set; the
/// charge type is the category's constant, where one is defined.
pub fn assemble(
    category: Category,
    count: u64,
    generator: &RecordGenerator<'_>,
    rng: &mut ChaCha8Rng,
) -> Dataset {
    let mut records = generator.generate(count, rng);
    for record in &mut records {
        record.case_subtype = category
            .case_subtypes()
            .choose(rng)
            .copied()
            .unwrap_or_default()
            .to_string();
        record.charge_type = category.charge_type().map(str::to_string);
    }
    Dataset { category, records }
}

// FNV-style mix so each category draws from an independent stream.
fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
