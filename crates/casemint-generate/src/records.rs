use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use casemint_core::CaseRecord;

use crate::names::LocalityNames;

pub const OFFENCES: &[&str] = &["Theft", "Assault", "Fraud", "Burglary", "Drug Offense"];
pub const COURT_TYPES: &[&str] = &["Crown Court", "Magistrates' Court"];
pub const OUTCOMES: &[&str] = &[
    "Guilty",
    "Not Guilty",
    "Dismissed",
    "Sentenced",
    "Community Service",
    "Fine",
];
pub const GENDERS: &[&str] = &["Male", "Female"];
pub const ETHNICITIES: &[&str] = &["White", "Black", "Asian", "Mixed", "Other"];

pub const MIN_YEAR: i32 = 2023;
pub const MAX_YEAR: i32 = 2025;
pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 80;
pub const MIN_ID: u32 = 1000;
pub const MAX_ID: u32 = 9999;

/// "%B %Y" labels for every month from January of the first covered year
/// through December of the last.
pub fn month_labels() -> Vec<String> {
    let mut labels = Vec::with_capacity(36);
    for year in MIN_YEAR..=MAX_YEAR {
        for month in 1..=12 {
            let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default();
            labels.push(date.format("%B %Y").to_string());
        }
    }
    labels
}

/// Draws independent synthetic case rows from a fixed field catalog.
///
/// Every categorical field is sampled uniformly from its declared set and
/// every numeric field from its declared inclusive range. The category
/// fields (`case_subtype`, `charge_type`) are left for the assembler.
pub struct RecordGenerator<'a> {
    months: Vec<String>,
    names: &'a dyn LocalityNames,
}

impl<'a> RecordGenerator<'a> {
    pub fn new(names: &'a dyn LocalityNames) -> Self {
        Self {
            months: month_labels(),
            names,
        }
    }

    /// Generate `count` independent records. Zero yields an empty vec.
    pub fn generate(&self, count: u64, rng: &mut ChaCha8Rng) -> Vec<CaseRecord> {
        (0..count).map(|_| self.record(rng)).collect()
    }

    fn record(&self, rng: &mut ChaCha8Rng) -> CaseRecord {
        CaseRecord {
            month: self.months.choose(rng).cloned().unwrap_or_default(),
            year: rng.random_range(MIN_YEAR..=MAX_YEAR),
            id: rng.random_range(MIN_ID..=MAX_ID),
            offence: pick(OFFENCES, rng),
            area: self.names.locality(rng),
            court_type: pick(COURT_TYPES, rng),
            outcome: pick(OUTCOMES, rng),
            gender: pick(GENDERS, rng),
            age: rng.random_range(MIN_AGE..=MAX_AGE),
            ethnicity: pick(ETHNICITIES, rng),
            case_subtype: String::new(),
            charge_type: None,
        }
    }
}

fn pick(values: &[&'static str], rng: &mut ChaCha8Rng) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}
