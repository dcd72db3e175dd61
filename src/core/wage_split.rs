//! Wage-period split across a wage-change date.

use crate::core::calculator::overtime::HoursSplit;
use crate::core::{punches_in_period, reported_overtime, weekly_totals};
use crate::models::punch::EmployeeKey;
use crate::models::{StoreFile, WageSplitRow};
use crate::utils::round2;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// The two fixed buckets. Labels are output tokens, not calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WagePeriod {
    /// Punches strictly before the wage-change date ("2025").
    Before,
    /// Punches on or after the wage-change date ("2026").
    After,
}

impl WagePeriod {
    pub fn of(date: NaiveDate, wage_change: NaiveDate) -> Self {
        if date < wage_change {
            WagePeriod::Before
        } else {
            WagePeriod::After
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WagePeriod::Before => "2025",
            WagePeriod::After => "2026",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PeriodPair {
    before: HoursSplit,
    after: HoursSplit,
}

impl PeriodPair {
    fn slot(&mut self, period: WagePeriod) -> &mut HoursSplit {
        match period {
            WagePeriod::Before => &mut self.before,
            WagePeriod::After => &mut self.after,
        }
    }

    /// Share the reported overtime by each period's calculated overtime, or
    /// by hours when no overtime was calculated.
    fn reconciled(self, reported: f64) -> Self {
        let calc_ot = self.before.overtime + self.after.overtime;
        let total = self.before.total + self.after.total;

        let share = |s: &HoursSplit| {
            if calc_ot > 0.0 {
                s.overtime / calc_ot
            } else if total > 0.0 {
                s.total / total
            } else {
                0.0
            }
        };

        Self {
            before: self.before.reconciled(reported * share(&self.before)),
            after: self.after.reconciled(reported * share(&self.after)),
        }
    }
}

/// Allocate each punch `hours / week_total` of its week's regular and
/// overtime hours, then sum per employee per wage period.
pub fn build_wage_split(
    store: &StoreFile,
    period_start: NaiveDate,
    wage_change: NaiveDate,
) -> Vec<WageSplitRow> {
    let punches = punches_in_period(store.records.iter(), period_start);
    if punches.is_empty() {
        return Vec::new();
    }

    let weeks = weekly_totals(&punches);

    let mut per_employee: BTreeMap<EmployeeKey, PeriodPair> = BTreeMap::new();
    for p in &punches {
        let key = p.record.employee_key();
        let week_total = weeks.get(&(key.clone(), p.week)).copied().unwrap_or(0.0);
        let week = HoursSplit::weekly(week_total);

        let hours = p.record.hours();
        let proportion = if week_total > 0.0 {
            hours / week_total
        } else {
            0.0
        };

        let slot = per_employee
            .entry(key)
            .or_default()
            .slot(WagePeriod::of(p.date, wage_change));
        slot.add(HoursSplit {
            total: hours,
            regular: proportion * week.regular,
            overtime: proportion * week.overtime,
        });
    }

    let reported = reported_overtime(store.overtime_corrections());

    per_employee
        .into_iter()
        .map(|(key, pair)| {
            let pair = match reported.get(&key.id) {
                Some(ot) => pair.reconciled(*ot),
                None => pair,
            };
            WageSplitRow {
                store_no: store.store_id.clone(),
                name: String::new(),
                id: key.id,
                first_name: key.first_name,
                last_name: key.last_name,
                total_hours_2025: round2(pair.before.total),
                regular_2025: round2(pair.before.regular),
                overtime_2025: round2(pair.before.overtime),
                total_hours_2026: round2(pair.after.total),
                regular_2026: round2(pair.after.regular),
                overtime_2026: round2(pair.after.overtime),
            }
        })
        .collect()
}
