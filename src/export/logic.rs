// src/export/logic.rs

use crate::core::process::ReportSet;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::archive::write_archive;
use crate::export::fs_utils::{ensure_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json, write_csv};
use crate::export::xlsx::export_xlsx;
use std::path::{Path, PathBuf};

/// File names of the generated outputs.
pub struct OutputNames;

impl OutputNames {
    pub const FORMATTED: &'static str = "All_Stores_Formatted.csv";
    pub const PIVOT: &'static str = "All_Stores_Pivot.csv";
    pub const WAGE_SPLIT: &'static str = "All_Stores_WageSplit.csv";
    pub const JSON: &'static str = "payroll_results.json";
    pub const XLSX: &'static str = "payroll_results.xlsx";
}

/// High level export of a run's tables.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `reports` under `dir`; returns the files created.
    ///
    /// CSV tables with no rows are not written. With `archive` the CSV files
    /// go into `archive_name` instead of loose files.
    pub fn export(
        reports: &ReportSet,
        dir: &Path,
        format: ExportFormat,
        archive: Option<&str>,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        ensure_dir(dir)?;

        match format {
            ExportFormat::Csv => match archive {
                Some(name) => {
                    let path = dir.join(name);
                    ensure_writable(&[path.as_path()], force)?;
                    write_archive(&path, &csv_entries(reports)?)?;
                    Ok(vec![path])
                }
                None => Self::export_csv_files(reports, dir, force),
            },
            ExportFormat::Json => {
                let path = dir.join(OutputNames::JSON);
                ensure_writable(&[path.as_path()], force)?;
                export_json(reports, &path)?;
                Ok(vec![path])
            }
            ExportFormat::Xlsx => {
                let path = dir.join(OutputNames::XLSX);
                ensure_writable(&[path.as_path()], force)?;
                export_xlsx(reports, &path)?;
                Ok(vec![path])
            }
        }
    }

    fn export_csv_files(reports: &ReportSet, dir: &Path, force: bool) -> AppResult<Vec<PathBuf>> {
        let formatted = dir.join(OutputNames::FORMATTED);
        let pivot = dir.join(OutputNames::PIVOT);
        let wage_split = dir.join(OutputNames::WAGE_SPLIT);

        let mut targets: Vec<&Path> = Vec::new();
        if !reports.listing.is_empty() {
            targets.push(&formatted);
        }
        if !reports.pivot.is_empty() {
            targets.push(&pivot);
        }
        let wage_rows = reports.wage_split.as_deref().unwrap_or_default();
        if !wage_rows.is_empty() {
            targets.push(&wage_split);
        }
        ensure_writable(&targets, force)?;

        let mut written = Vec::new();
        if !reports.listing.is_empty() {
            export_csv(&reports.listing, &formatted)?;
            written.push(formatted.clone());
        }
        if !reports.pivot.is_empty() {
            export_csv(&reports.pivot, &pivot)?;
            written.push(pivot.clone());
        }
        if !wage_rows.is_empty() {
            export_csv(wage_rows, &wage_split)?;
            written.push(wage_split.clone());
        }
        Ok(written)
    }
}

/// Serialize the non-empty tables to in-memory CSV archive entries.
fn csv_entries(reports: &ReportSet) -> AppResult<Vec<(String, Vec<u8>)>> {
    let mut entries = Vec::new();

    if !reports.listing.is_empty() {
        entries.push((OutputNames::FORMATTED.to_string(), to_csv_bytes(&reports.listing)?));
    }
    if !reports.pivot.is_empty() {
        entries.push((OutputNames::PIVOT.to_string(), to_csv_bytes(&reports.pivot)?));
    }
    if let Some(rows) = reports.wage_split.as_deref()
        && !rows.is_empty()
    {
        entries.push((OutputNames::WAGE_SPLIT.to_string(), to_csv_bytes(rows)?));
    }

    Ok(entries)
}

fn to_csv_bytes<T: serde::Serialize>(rows: &[T]) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows)?;
    Ok(buf)
}
