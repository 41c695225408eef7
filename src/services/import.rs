//! Batch wheel import from CSV.
//!
//! Rows are validated independently: valid rows are inserted with the same
//! defaulting as single-wheel creation, invalid rows are reported with their
//! row number. A bad row never aborts the rest of the batch.

use std::io::Read;

use serde::Serialize;

use crate::domain::auth::Principal;
use crate::forms::wheels::AddWheelForm;
use crate::repository::WheelWriter;
use crate::services::{ServiceResult, require_admin};

/// Row-level import failure, reported back to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRowError {
    pub row_number: usize,
    pub sku: Option<String>,
    pub message: String,
}

/// Aggregated import outcome.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub total_rows: usize,
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<ImportRowError>,
}

impl ImportReport {
    fn push_error(&mut self, row_number: usize, sku: Option<String>, message: impl Into<String>) {
        self.skipped += 1;
        self.errors.push(ImportRowError {
            row_number,
            sku,
            message: message.into(),
        });
    }
}

/// Import wheels from CSV data with a header row.
///
/// Column names match the single-wheel form fields (`sku`, `year`, `make`,
/// `model`, `boltPattern`, `price`, ...). Partial success is the contract:
/// the report says how many rows were imported and why the rest were not.
pub fn import_wheels<R: WheelWriter>(
    csv_data: impl Read,
    principal: &Principal,
    repo: &R,
) -> ServiceResult<ImportReport> {
    require_admin(principal)?;
    let mut report = ImportReport::default();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_data);
    for (index, row) in reader.deserialize::<AddWheelForm>().enumerate() {
        // Row 1 is the header.
        let row_number = index + 2;
        report.total_rows += 1;
        let form = match row {
            Ok(form) => form,
            Err(e) => {
                report.push_error(row_number, None, e.to_string());
                continue;
            }
        };
        let sku = form.sku.clone();
        let new = match form.into_new_wheel() {
            Ok(new) => new,
            Err(errors) => {
                report.push_error(row_number, sku, errors.to_string());
                continue;
            }
        };
        match repo.create_wheel(new, Some(&principal.username)) {
            Ok(_) => report.imported += 1,
            Err(e) => {
                log::error!("failed to import wheel row {row_number}: {e}");
                report.push_error(row_number, sku, "storage failure");
            }
        }
    }
    Ok(report)
}
