//! Multi-file orchestration.

use crate::core::listing::build_listing;
use crate::core::pivot::build_pivot;
use crate::core::wage_split::build_wage_split;
use crate::errors::{AppError, AppResult};
use crate::models::{Dialect, ListingRow, PivotRow, PunchRecord, StoreFile, WageSplitRow};
use crate::parser::parse_report;
use crate::ui::messages::{error, info, warning};
use crate::utils::text::decode_report;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The three caller-supplied run values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub pay_period_start: NaiveDate,
    /// `Some` when the wage split is enabled.
    pub wage_change: Option<NaiveDate>,
}

/// One parsed upload.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub name: String,
    pub dialect: Dialect,
    pub records: Vec<PunchRecord>,
    pub store_ids: Vec<String>,
}

impl FileOutcome {
    pub fn usable_count(&self) -> usize {
        self.records.iter().filter(|r| r.store_id.is_some()).count()
    }
}

/// Decode and parse one file's bytes.
pub fn ingest_file(name: &str, bytes: &[u8]) -> AppResult<FileOutcome> {
    let content = decode_report(name, bytes)?;
    let parsed = parse_report(&content);

    Ok(FileOutcome {
        name: name.to_string(),
        dialect: parsed.dialect,
        records: parsed.records,
        store_ids: parsed.store_ids,
    })
}

/// Per-file line of the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub name: String,
    pub dialect: Option<Dialect>,
    pub records: usize,
}

/// Records accumulated per store across every file of a run.
#[derive(Debug, Default)]
pub struct PayrollBatch {
    pub stores: BTreeMap<String, StoreFile>,
    pub files: Vec<FileSummary>,
}

impl PayrollBatch {
    /// Merge a parsed file; returns the number of records merged.
    pub fn add(&mut self, outcome: FileOutcome) -> usize {
        let mut merged = 0;
        for record in outcome.records {
            let Some(store_id) = record.store_id.clone() else {
                continue;
            };
            self.stores
                .entry(store_id.clone())
                .or_insert_with(|| StoreFile::new(store_id))
                .merge([record]);
            merged += 1;
        }

        self.files.push(FileSummary {
            name: outcome.name,
            dialect: Some(outcome.dialect),
            records: merged,
        });
        merged
    }

    /// Read, parse and merge every path, reporting progress. Unreadable
    /// files are reported and skipped.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut batch = Self::default();

        for path in paths {
            let path = path.as_ref();
            let name = path.display().to_string();

            let outcome = fs::read(path)
                .map_err(AppError::from)
                .and_then(|bytes| ingest_file(&name, &bytes));

            match outcome {
                Ok(outcome) => {
                    let dialect = outcome.dialect;
                    let merged = batch.add(outcome);
                    if merged == 0 {
                        warning(format!("0 records recovered from file {name}"));
                    } else {
                        info(format!("{name}: {dialect} report, {merged} records"));
                    }
                }
                Err(e) => {
                    error(format!("{name}: {e}"));
                    batch.files.push(FileSummary {
                        name,
                        dialect: None,
                        records: 0,
                    });
                }
            }
        }

        batch
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

/// Output tables of one run, stores concatenated in ascending id order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSet {
    pub listing: Vec<ListingRow>,
    pub pivot: Vec<PivotRow>,
    /// `None` when the wage split is disabled.
    pub wage_split: Option<Vec<WageSplitRow>>,
}

impl ReportSet {
    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
            && self.pivot.is_empty()
            && self.wage_split.as_ref().is_none_or(|w| w.is_empty())
    }
}

pub fn build_reports(batch: &PayrollBatch, settings: &RunSettings) -> ReportSet {
    let mut out = ReportSet {
        wage_split: settings.wage_change.map(|_| Vec::new()),
        ..ReportSet::default()
    };

    for store in batch.stores.values() {
        out.listing.extend(build_listing(store));
        out.pivot
            .extend(build_pivot(store, settings.pay_period_start));

        if let (Some(rows), Some(wage_change)) = (out.wage_split.as_mut(), settings.wage_change) {
            rows.extend(build_wage_split(
                store,
                settings.pay_period_start,
                wage_change,
            ));
        }
    }

    out
}
