use crate::core::calculator::overtime::HoursSplit;
use crate::core::{punches_in_period, reported_overtime, weekly_totals};
use crate::models::punch::EmployeeKey;
use crate::models::{PivotRow, StoreFile};
use crate::utils::round2;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sum weekly splits per employee, then let reported overtime override the
/// calculated figure. Total hours always stay the sum of actual punches.
pub fn build_pivot(store: &StoreFile, period_start: NaiveDate) -> Vec<PivotRow> {
    let punches = punches_in_period(store.records.iter(), period_start);
    if punches.is_empty() {
        return Vec::new();
    }

    let mut per_employee: BTreeMap<EmployeeKey, HoursSplit> = BTreeMap::new();
    for ((key, _week), hours) in weekly_totals(&punches) {
        per_employee
            .entry(key)
            .or_default()
            .add(HoursSplit::weekly(hours));
    }

    let reported = reported_overtime(store.overtime_corrections());

    per_employee
        .into_iter()
        .map(|(key, split)| {
            let split = match reported.get(&key.id) {
                Some(ot) => split.reconciled(*ot),
                None => split,
            };
            PivotRow {
                store_no: store.store_id.clone(),
                name: String::new(),
                total: round2(split.total),
                regular: round2(split.regular),
                overtime: round2(split.overtime),
                id: key.id,
                first_name: key.first_name,
                last_name: key.last_name,
            }
        })
        .collect()
}
