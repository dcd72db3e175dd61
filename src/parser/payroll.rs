//! Payroll dialect ("Previous/Reclose Payroll Report").

use super::StoreTracker;
use super::line::{LineKind, classify_payroll_line};
use crate::models::{PunchRecord, RecordType};
use crate::utils::date::{format_mdy, month_from_abbr, today};
use crate::utils::round2;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PERIOD_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Period: (\d{2})/(\d{2})/(\d{4})").unwrap());

static MONTH_ABBR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)").unwrap()
});

static LEADING_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)").unwrap());

static NAME_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"--.*").unwrap());

const PLACEHOLDER_FIRST: &str = "OVERTIME";
const PLACEHOLDER_LAST: &str = "REPORTED";

/// Month/year the pay period starts in, used to complete `DD-Mon` dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodHeader {
    pub month: u32,
    pub year: i32,
}

impl PeriodHeader {
    /// Read `Period: MM/DD/YYYY`; December of `fallback_year` when absent.
    pub fn from_content(content: &str, fallback_year: i32) -> Self {
        PERIOD_HEADER
            .captures(content)
            .and_then(|c| {
                Some(Self {
                    month: c[1].parse().ok()?,
                    year: c[3].parse().ok()?,
                })
            })
            .unwrap_or(Self {
                month: 12,
                year: fallback_year,
            })
    }

    /// Year of a date fragment in `fragment_month`, for periods that straddle
    /// new year.
    pub fn infer_year(&self, fragment_month: u32) -> i32 {
        if self.month == 12 && fragment_month <= 6 {
            self.year + 1
        } else if self.month <= 6 && fragment_month == 12 {
            self.year - 1
        } else {
            self.year
        }
    }

    /// `06-Jan` → `01/06/<inferred year>`; other texts are returned unchanged.
    pub fn complete_date(&self, date_text: &str) -> String {
        if !date_text.contains('-') {
            return date_text.to_string();
        }

        let Some(month) = MONTH_ABBR
            .captures(date_text)
            .and_then(|c| month_from_abbr(&c[1]))
        else {
            return date_text.to_string();
        };

        let year = self.infer_year(month);
        NaiveDate::parse_from_str(&format!("{date_text}-{year}"), "%d-%b-%Y")
            .map(format_mdy)
            .unwrap_or_else(|_| date_text.to_string())
    }
}

/// Parse a payroll report; returns the records and the store ids seen.
pub fn parse_payroll(content: &str) -> (Vec<PunchRecord>, Vec<String>) {
    parse_payroll_with_year(content, today().year())
}

/// Same as [`parse_payroll`] with an explicit fallback year for reports
/// lacking a `Period:` header.
pub fn parse_payroll_with_year(
    content: &str,
    fallback_year: i32,
) -> (Vec<PunchRecord>, Vec<String>) {
    let header = PeriodHeader::from_content(content, fallback_year);
    let mut stores = StoreTracker::default();
    let mut records = Vec::new();

    for line in content.lines() {
        match classify_payroll_line(line) {
            LineKind::StoreHeader(id) => stores.update(id),
            LineKind::OvertimeCorrection {
                employee_id,
                hours_text,
            } => {
                if let Some(r) = overtime_record(employee_id, hours_text, stores.current()) {
                    records.push(r);
                }
            }
            LineKind::WeekdayPunch(parts) => {
                if let Some(r) = weekday_record(&parts, &header, stores.current()) {
                    records.push(r);
                }
            }
            _ => {}
        }
    }

    let mut records = resolve_overtime_names(records);
    let store_ids = stores.finish(&mut records);
    (records, store_ids)
}

fn overtime_record(
    employee_id: String,
    hours_text: String,
    store_id: Option<String>,
) -> Option<PunchRecord> {
    let hours: f64 = hours_text.parse().ok()?;

    Some(PunchRecord {
        employee_id,
        first_name: PLACEHOLDER_FIRST.to_string(),
        last_name: PLACEHOLDER_LAST.to_string(),
        day_of_week: String::new(),
        date: String::new(),
        start_time: String::new(),
        end_time: String::new(),
        record_type: RecordType::OvertimeReported,
        duration_text: hours_text,
        decimal_hours: Some(round2(hours)),
        store_id,
    })
}

fn strip_name_suffix(name: &str) -> String {
    NAME_SUFFIX.replace(name, "").trim().to_string()
}

fn weekday_record(
    parts: &[String],
    header: &PeriodHeader,
    store_id: Option<String>,
) -> Option<PunchRecord> {
    let date_text = parts[1].trim();
    let duration_hhmm = parts[2].trim();
    let duration_decimal = parts[3].trim();

    let employee_id = LEADING_DIGITS
        .captures(parts[6].trim())
        .map(|c| c[1].to_string())?;

    if duration_decimal.is_empty() || duration_decimal == "--" || date_text.is_empty() {
        return None;
    }
    let hours: f64 = duration_decimal.parse().ok()?;

    Some(PunchRecord {
        employee_id,
        first_name: strip_name_suffix(parts[8].trim()),
        last_name: strip_name_suffix(parts[9].trim()),
        day_of_week: parts[0].trim().to_string(),
        date: header.complete_date(date_text),
        start_time: String::new(),
        end_time: String::new(),
        record_type: RecordType::Clockset,
        duration_text: duration_hhmm.to_string(),
        decimal_hours: Some(round2(hours)),
        store_id,
    })
}

/// Give each overtime row the name (and full id) of the lowest Clockset
/// employee id starting with the row's id. Unmatched rows are dropped.
fn resolve_overtime_names(records: Vec<PunchRecord>) -> Vec<PunchRecord> {
    // first names seen per id, ascending id order
    let mut names: BTreeMap<String, (String, String)> = BTreeMap::new();
    for r in records
        .iter()
        .filter(|r| r.record_type == RecordType::Clockset)
    {
        names
            .entry(r.employee_id.clone())
            .or_insert_with(|| (r.first_name.clone(), r.last_name.clone()));
    }

    records
        .into_iter()
        .filter_map(|mut r| {
            if !r.record_type.is_overtime_reported() {
                return Some(r);
            }

            let (id, (first, last)) = names
                .iter()
                .find(|(id, _)| id.starts_with(r.employee_id.as_str()))?;

            r.employee_id = id.clone();
            r.first_name = first.clone();
            r.last_name = last.clone();
            Some(r)
        })
        .collect()
}
