use crate::utils::date::parse_mdy;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeriodWeek {
    First,
    Second,
}

impl PeriodWeek {
    pub fn number(&self) -> u8 {
        match self {
            PeriodWeek::First => 1,
            PeriodWeek::Second => 2,
        }
    }
}

/// A parsed punch date and its week, `None` when outside the pay period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub date: NaiveDate,
    pub week: Option<PeriodWeek>,
}

pub fn classify_date(date: NaiveDate, period_start: NaiveDate) -> Classified {
    let days = (date - period_start).num_days();
    let week = match days {
        0..=6 => Some(PeriodWeek::First),
        7..=13 => Some(PeriodWeek::Second),
        _ => None,
    };
    Classified { date, week }
}

/// Classify an `MM/DD/YYYY` date. `None` means the text is unparseable.
pub fn classify(date_text: &str, period_start: NaiveDate) -> Option<Classified> {
    parse_mdy(date_text).map(|d| classify_date(d, period_start))
}
