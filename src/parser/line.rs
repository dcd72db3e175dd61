//! Line classification shared by both dialect parsers.

use regex::Regex;
use std::sync::LazyLock;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Weekday rows of the payroll layout have at least this many columns.
pub const MIN_WEEKDAY_COLUMNS: usize = 11;
/// Employee header rows of the timeclock layout.
pub const MIN_EMPLOYEE_COLUMNS: usize = 3;
/// Punch rows of the timeclock layout.
pub const MIN_DATA_COLUMNS: usize = 6;

static OVERTIME_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"?(\d+)\s+([\d.]+)\s*"?$"#).unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Brand line, with the store id when one could be extracted.
    StoreHeader(Option<String>),
    /// `<employee id> <hours>` correction row (payroll layout).
    OvertimeCorrection {
        employee_id: String,
        hours_text: String,
    },
    /// Weekday-prefixed punch row (payroll layout).
    WeekdayPunch(Vec<String>),
    /// `<id>,<first>,<last>,...` row opening an employee block (timeclock layout).
    EmployeeHeader {
        employee_id: String,
        first_name: String,
        last_name: String,
    },
    /// Punch row inside an employee block (timeclock layout).
    DataPunch(Vec<String>),
    Noise,
}

/// Payroll layout columns: `","`-separated when quoted, bare commas otherwise.
/// A quoted line without `","` has no columns.
pub fn split_payroll_columns(line: &str) -> Option<Vec<String>> {
    if line.contains("\",\"") {
        let mut parts: Vec<String> = line
            .split("\",\"")
            .map(|p| p.trim().trim_matches('"').to_string())
            .collect();
        if let Some(last) = parts.last_mut() {
            *last = last.trim_end_matches(['"', '\n']).to_string();
        }
        Some(parts)
    } else if line.contains(',') && !line.starts_with('"') {
        Some(line.split(',').map(|p| p.trim().to_string()).collect())
    } else {
        None
    }
}

/// Timeclock layout columns: always split, every column trimmed and unquoted.
pub fn split_timeclock_columns(line: &str) -> Vec<String> {
    let pieces: Vec<&str> = if line.contains("\",\"") {
        line.split("\",\"").collect()
    } else {
        line.split(',').collect()
    };
    pieces
        .into_iter()
        .map(|p| p.trim().trim_matches('"').to_string())
        .collect()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Classify one line of a payroll report.
pub fn classify_payroll_line(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Noise;
    }

    if super::store_marker::has_brand_marker(line) {
        return LineKind::StoreHeader(super::store_marker::extract_store_id(line));
    }

    let Some(parts) = split_payroll_columns(line) else {
        return match OVERTIME_ROW.captures(line) {
            Some(c) => LineKind::OvertimeCorrection {
                employee_id: c[1].to_string(),
                hours_text: c[2].to_string(),
            },
            None => LineKind::Noise,
        };
    };

    let weekday = parts.first().map(|p| p.trim()).unwrap_or("");
    if WEEKDAYS.contains(&weekday) && parts.len() >= MIN_WEEKDAY_COLUMNS {
        LineKind::WeekdayPunch(parts)
    } else {
        LineKind::Noise
    }
}

/// Classify one line of a timeclock report.
pub fn classify_timeclock_line(line: &str) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Noise;
    }

    let parts = split_timeclock_columns(line);
    let first = parts[0].as_str();

    if super::store_marker::has_brand_marker(first) {
        return LineKind::StoreHeader(super::store_marker::extract_store_id(first));
    }

    if is_digits(first) && parts.len() >= MIN_EMPLOYEE_COLUMNS {
        return LineKind::EmployeeHeader {
            employee_id: first.to_string(),
            first_name: parts[1].clone(),
            last_name: parts[2].clone(),
        };
    }

    if parts.len() >= MIN_DATA_COLUMNS {
        LineKind::DataPunch(parts)
    } else {
        LineKind::Noise
    }
}
