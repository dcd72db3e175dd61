use serde::Serialize;

/// Kind of a parsed punch line.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum RecordType {
    #[serde(rename = "Clockset")]
    Clockset,
    #[serde(rename = "Paid Break")]
    PaidBreak,
    /// Overtime figure stated explicitly by the report.
    #[serde(rename = "Overtime_Reported")]
    OvertimeReported,
}

impl RecordType {
    pub fn rt_as_str(&self) -> &'static str {
        match self {
            RecordType::Clockset => "Clockset",
            RecordType::PaidBreak => "Paid Break",
            RecordType::OvertimeReported => "Overtime_Reported",
        }
    }

    /// Parse the entry-type column of a timeclock row (trailing padding allowed).
    pub fn rt_from_entry(s: &str) -> Option<Self> {
        match s.trim() {
            "Clockset" => Some(Self::Clockset),
            "Paid Break" => Some(Self::PaidBreak),
            _ => None,
        }
    }

    /// Clock events that count as worked time.
    pub fn is_punch(&self) -> bool {
        matches!(self, RecordType::Clockset | RecordType::PaidBreak)
    }

    pub fn is_overtime_reported(&self) -> bool {
        matches!(self, RecordType::OvertimeReported)
    }
}

/// One clock event, or one reported-overtime correction.
#[derive(Debug, Clone, PartialEq)]
pub struct PunchRecord {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub day_of_week: String,
    /// `MM/DD/YYYY`, empty for overtime corrections.
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub record_type: RecordType,
    pub duration_text: String,
    /// `None` when `duration_text` could not be normalized.
    pub decimal_hours: Option<f64>,
    pub store_id: Option<String>,
}

impl PunchRecord {
    /// Hours used by the aggregations; a missing duration counts as absent.
    pub fn hours(&self) -> f64 {
        self.decimal_hours.unwrap_or(0.0)
    }

    /// Key used to group rows per employee in every report.
    pub fn employee_key(&self) -> EmployeeKey {
        EmployeeKey {
            id: self.employee_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Grouping key: employee id plus the names carried by the report.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeKey {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}
