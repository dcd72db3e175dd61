// src/export/model.rs

use crate::models::report::{LISTING_HEADERS, PIVOT_HEADERS, WAGE_SPLIT_HEADERS};
use crate::models::{ListingRow, PivotRow, WageSplitRow};

/// A typed spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

/// A report row that can be laid out as a spreadsheet row.
pub trait SheetRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

fn text(s: &str) -> Cell {
    if s.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(s.to_string())
    }
}

impl SheetRow for ListingRow {
    fn headers() -> &'static [&'static str] {
        &LISTING_HEADERS
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            text(&self.store_no),
            text(&self.emp_id),
            text(&self.first_name),
            text(&self.last_name),
            text(&self.day),
            text(&self.date),
            text(&self.start_time),
            text(&self.end_time),
            text(&self.record_type),
            self.duration.map(Cell::Number).unwrap_or(Cell::Empty),
        ]
    }
}

impl SheetRow for PivotRow {
    fn headers() -> &'static [&'static str] {
        &PIVOT_HEADERS
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            text(&self.store_no),
            text(&self.name),
            Cell::Number(self.total),
            Cell::Number(self.regular),
            Cell::Number(self.overtime),
            text(&self.id),
            text(&self.first_name),
            text(&self.last_name),
        ]
    }
}

impl SheetRow for WageSplitRow {
    fn headers() -> &'static [&'static str] {
        &WAGE_SPLIT_HEADERS
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            text(&self.store_no),
            text(&self.name),
            text(&self.id),
            text(&self.first_name),
            text(&self.last_name),
            Cell::Number(self.total_hours_2025),
            Cell::Number(self.regular_2025),
            Cell::Number(self.overtime_2025),
            Cell::Number(self.total_hours_2026),
            Cell::Number(self.regular_2026),
            Cell::Number(self.overtime_2026),
        ]
    }
}
