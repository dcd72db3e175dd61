//! Timeclock dialect ("Timeclock Report/Summary").

use super::StoreTracker;
use super::line::{LineKind, classify_timeclock_line};
use crate::models::{PunchRecord, RecordType};
use crate::utils::parse_duration_to_decimal;
use regex::Regex;
use std::sync::LazyLock;

static DATE_FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2}/\d{1,2}/\d{4})").unwrap());

static TIME_FIELD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{1,2}:\d{2})").unwrap());

/// Column where `{day, date/time, end time, entry type, duration}` starts.
const DAY_COLUMN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Scanner state. Punch rows are only accepted inside an employee block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    SeekingStore,
    SeekingEmployeeHeader,
    ParsingPunchRows(Employee),
}

impl ScanState {
    /// Next state after a line of the given kind.
    pub fn next(self, kind: &LineKind, store_known: bool) -> ScanState {
        match (self, kind) {
            (
                _,
                LineKind::EmployeeHeader {
                    employee_id,
                    first_name,
                    last_name,
                },
            ) => ScanState::ParsingPunchRows(Employee {
                id: employee_id.clone(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
            }),
            (ScanState::SeekingStore, LineKind::StoreHeader(_)) if store_known => {
                ScanState::SeekingEmployeeHeader
            }
            (state, _) => state,
        }
    }

    pub fn employee(&self) -> Option<&Employee> {
        match self {
            ScanState::ParsingPunchRows(e) => Some(e),
            _ => None,
        }
    }
}

/// Parse a timeclock report; returns the records and the store ids seen.
pub fn parse_timeclock(content: &str) -> (Vec<PunchRecord>, Vec<String>) {
    let mut stores = StoreTracker::default();
    let mut state = ScanState::SeekingStore;
    let mut records = Vec::new();

    for line in content.lines() {
        let kind = classify_timeclock_line(line);

        match &kind {
            LineKind::StoreHeader(id) => stores.update(id.clone()),
            LineKind::DataPunch(parts) => {
                if let Some(emp) = state.employee()
                    && let Some(r) = punch_record(parts, emp, stores.current())
                {
                    records.push(r);
                }
            }
            _ => {}
        }

        state = state.next(&kind, stores.has_store());
    }

    let store_ids = stores.finish(&mut records);
    (records, store_ids)
}

fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .map(|c| c[1].to_string())
        .unwrap_or_default()
}

fn punch_record(
    parts: &[String],
    employee: &Employee,
    store_id: Option<String>,
) -> Option<PunchRecord> {
    let fields = parts.get(DAY_COLUMN..=DAY_COLUMN + 4)?;
    let [day, date_raw, end_raw, entry_type, duration] = fields else {
        return None;
    };

    let record_type = RecordType::rt_from_entry(entry_type)?;

    let date = capture(&DATE_FIELD, date_raw);
    if date.is_empty() {
        return None;
    }

    Some(PunchRecord {
        employee_id: employee.id.clone(),
        first_name: employee.first_name.clone(),
        last_name: employee.last_name.clone(),
        day_of_week: day.clone(),
        date,
        start_time: capture(&TIME_FIELD, date_raw),
        end_time: capture(&TIME_FIELD, end_raw),
        record_type,
        duration_text: duration.clone(),
        decimal_hours: parse_duration_to_decimal(duration),
        store_id,
    })
}
