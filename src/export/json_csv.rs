// src/export/json_csv.rs

use crate::core::process::ReportSet;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Serialize rows as CSV; the header row comes from the serde field names.
pub(crate) fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// One CSV file per table.
pub(crate) fn export_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(file, rows)?;

    notify_export_success("CSV", path);
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    formatted: &'a [crate::models::ListingRow],
    pivot: &'a [crate::models::PivotRow],
    #[serde(skip_serializing_if = "Option::is_none")]
    wage_split: Option<&'a [crate::models::WageSplitRow]>,
}

/// All tables in one pretty-printed JSON document.
pub(crate) fn export_json(reports: &ReportSet, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = JsonReport {
        formatted: &reports.listing,
        pivot: &reports.pivot,
        wage_split: reports.wage_split.as_deref(),
    };

    let json_data = serde_json::to_string_pretty(&doc)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
