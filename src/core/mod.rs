pub mod calculator;
pub mod config;
pub mod listing;
pub mod pivot;
pub mod process;
pub mod wage_split;

use crate::core::calculator::week::{PeriodWeek, classify};
use crate::models::PunchRecord;
use crate::models::punch::EmployeeKey;
use chrono::NaiveDate;
use std::collections::HashMap;

/// A punch that fell inside the pay period.
pub(crate) struct WeekPunch<'a> {
    pub record: &'a PunchRecord,
    pub date: NaiveDate,
    pub week: PeriodWeek,
}

/// Classify punches into the pay period, dropping unparseable and
/// out-of-period dates.
pub(crate) fn punches_in_period<'a>(
    records: impl Iterator<Item = &'a PunchRecord>,
    period_start: NaiveDate,
) -> Vec<WeekPunch<'a>> {
    records
        .filter(|r| r.record_type.is_punch())
        .filter_map(|record| {
            let c = classify(&record.date, period_start)?;
            Some(WeekPunch {
                record,
                date: c.date,
                week: c.week?,
            })
        })
        .collect()
}

/// Reported overtime summed per employee id.
pub(crate) fn reported_overtime<'a>(
    records: impl Iterator<Item = &'a PunchRecord>,
) -> HashMap<String, f64> {
    let mut out: HashMap<String, f64> = HashMap::new();
    for r in records.filter(|r| r.record_type.is_overtime_reported()) {
        *out.entry(r.employee_id.clone()).or_default() += r.hours();
    }
    out
}

/// Hours per employee per week.
pub(crate) fn weekly_totals(punches: &[WeekPunch<'_>]) -> HashMap<(EmployeeKey, PeriodWeek), f64> {
    let mut out: HashMap<(EmployeeKey, PeriodWeek), f64> = HashMap::new();
    for p in punches {
        *out.entry((p.record.employee_key(), p.week)).or_default() += p.record.hours();
    }
    out
}
