use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use casemint_core::{CaseRecord, Dataset};

/// Column headers shared by every category dataset, in emission order.
pub const BASE_COLUMNS: [&str; 11] = [
    "Month",
    "Year",
    "ID",
    "Offence",
    "Area",
    "CourtType",
    "Outcome",
    "Gender",
    "Age",
    "Ethnicity",
    "Casetype",
];

/// Extra column present when the category carries a fixed charge type.
pub const CHARGE_TYPE_COLUMN: &str = "ChargeType";

/// Write a dataset as UTF-8 CSV with a header row.
///
/// The charge type column is emitted only for categories that define one,
/// so datasets of different categories have different widths.
pub fn write_dataset_csv(path: &Path, dataset: &Dataset) -> Result<u64, csv::Error> {
    let with_charge_type = dataset.category.charge_type().is_some();
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    let mut header: Vec<&str> = BASE_COLUMNS.to_vec();
    if with_charge_type {
        header.push(CHARGE_TYPE_COLUMN);
    }
    writer.write_record(&header)?;

    for record in &dataset.records {
        writer.write_record(&record_fields(record, with_charge_type))?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

fn record_fields(record: &CaseRecord, with_charge_type: bool) -> Vec<String> {
    let mut fields = vec![
        record.month.clone(),
        record.year.to_string(),
        record.id.to_string(),
        record.offence.clone(),
        record.area.clone(),
        record.court_type.clone(),
        record.outcome.clone(),
        record.gender.clone(),
        record.age.to_string(),
        record.ethnicity.clone(),
        record.case_subtype.clone(),
    ];
    if with_charge_type {
        fields.push(record.charge_type.clone().unwrap_or_default());
    }
    fields
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
