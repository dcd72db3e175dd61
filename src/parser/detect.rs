use crate::models::Dialect;

/// Only the beginning of a file carries the report title.
const HEAD_CHARS: usize = 1000;

const PAYROLL_TITLES: [&str; 2] = ["Previous Payroll Report", "Reclose Payroll Report"];
const TIMECLOCK_TITLES: [&str; 3] = ["Timeclock Report", "All Employees:", "Timeclock Summary"];

/// Classify a report by its leading text. First match wins; no marker at all
/// falls back to the payroll dialect.
pub fn detect_dialect(content: &str) -> Dialect {
    let head = match content.char_indices().nth(HEAD_CHARS) {
        Some((idx, _)) => &content[..idx],
        None => content,
    };

    if PAYROLL_TITLES.iter().any(|t| head.contains(t)) {
        return Dialect::Payroll;
    }
    if TIMECLOCK_TITLES.iter().any(|t| head.contains(t)) {
        return Dialect::Timeclock;
    }
    if head.contains("Clockset") && head.contains("ACTIVE") {
        return Dialect::Timeclock;
    }

    Dialect::Payroll
}
