// src/export/xlsx.rs

use crate::core::process::ReportSet;
use crate::errors::{AppError, AppResult};
use crate::export::model::{Cell, SheetRow};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// One workbook, one sheet per table, styled header and banded rows.
pub(crate) fn export_xlsx(reports: &ReportSet, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    write_sheet(workbook.add_worksheet(), "Formatted", &reports.listing)?;
    write_sheet(workbook.add_worksheet(), "Pivot", &reports.pivot)?;
    if let Some(rows) = &reports.wage_split {
        write_sheet(workbook.add_worksheet(), "WageSplit", rows)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet<T: SheetRow>(worksheet: &mut Worksheet, name: &str, rows: &[T]) -> AppResult<()> {
    worksheet.set_name(name).map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = T::headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, item) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in item.cells().iter().enumerate() {
            let width = write_cell(worksheet, row, col as u16, cell, band_color)?;
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(width);
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

/// Write one cell; returns its display width.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<usize> {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Number(n) => {
            let fmt = fmt.set_align(FormatAlign::Right).set_num_format("0.00");
            worksheet
                .write_with_format(row, col, *n, &fmt)
                .map_err(to_app_error)?;
            Ok(format!("{n:.2}").len())
        }
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &fmt)
                .map_err(to_app_error)?;
            Ok(UnicodeWidthStr::width(s.as_str()))
        }
        Cell::Empty => {
            worksheet
                .write_blank(row, col, &fmt)
                .map_err(to_app_error)?;
            Ok(0)
        }
    }
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
