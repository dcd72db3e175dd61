use serde::Serialize;

/// Flat listing row: one per punch.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ListingRow {
    pub store_no: String,
    pub emp_id: String,
    pub first_name: String,
    pub last_name: String,
    pub day: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub duration: Option<f64>,
}

/// Biweekly regular/overtime pivot: one per employee per store.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PivotRow {
    #[serde(rename = "store no")]
    pub store_no: String,
    /// Always blank in the output.
    pub name: String,
    pub total: f64,
    pub regular: f64,
    pub overtime: f64,
    pub id: String,
    #[serde(rename = "first name")]
    pub first_name: String,
    #[serde(rename = "last name")]
    pub last_name: String,
}

/// Wage-period split: one wide row per employee per store.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WageSplitRow {
    pub store_no: String,
    pub name: String,
    pub id: String,
    #[serde(rename = "first name")]
    pub first_name: String,
    #[serde(rename = "last name")]
    pub last_name: String,
    pub total_hours_2025: f64,
    pub regular_2025: f64,
    pub overtime_2025: f64,
    pub total_hours_2026: f64,
    pub regular_2026: f64,
    pub overtime_2026: f64,
}

pub const LISTING_HEADERS: [&str; 10] = [
    "store_no",
    "emp_id",
    "first_name",
    "last_name",
    "day",
    "date",
    "start_time",
    "end_time",
    "type",
    "duration",
];

pub const PIVOT_HEADERS: [&str; 8] = [
    "store no",
    "name",
    "total",
    "regular",
    "overtime",
    "id",
    "first name",
    "last name",
];

pub const WAGE_SPLIT_HEADERS: [&str; 11] = [
    "store_no",
    "name",
    "id",
    "first name",
    "last name",
    "total_hours_2025",
    "regular_2025",
    "overtime_2025",
    "total_hours_2026",
    "regular_2026",
    "overtime_2026",
];
