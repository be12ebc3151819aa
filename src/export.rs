//! Excel export functionality.

use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use std::path::{Path, PathBuf};

use crate::table::DataTable;

/// Export every row of the table's current view (filter and sort applied,
/// all pages) to an Excel file.
///
/// Columns without a text projection are left out. Returns the number of
/// data rows written.
pub fn export_table_to_excel<T>(
    table: &DataTable<T>,
    rows: &[T],
    sheet_name: &str,
    path: &Path,
) -> Result<usize, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(sheet_name)?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    let columns: Vec<_> = table.columns().iter().filter(|c| c.has_text()).collect();

    for (col, column) in columns.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, column.title(), &header_format)?;
        // Roughly one character per 7px of on-screen width
        let width = (column.width() / 7.0).max(column.title().len() as f32 + 2.0);
        worksheet.set_column_width(col as u16, f64::from(width))?;
    }

    let view = table.derive(rows);
    let ordered = view.ordered_indices();

    // Data rows
    for (idx, &source) in ordered.iter().enumerate() {
        let row = (idx + 1) as u32;
        for (col, column) in columns.iter().enumerate() {
            let text = column.text(&rows[source]).unwrap_or_default();
            worksheet.write_string(row, col as u16, text)?;
        }
    }

    // Autofilter
    if !ordered.is_empty() && !columns.is_empty() {
        let last_row = ordered.len() as u32;
        worksheet.autofilter(0, 0, last_row, (columns.len() - 1) as u16)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    tracing::info!("Exported {} rows to {:?}", ordered.len(), path);
    Ok(ordered.len())
}

/// Open save file dialog and return selected path.
pub fn show_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Ask for a destination and export the table there.
///
/// Returns `None` when the dialog was cancelled.
pub fn export_with_dialog<T>(
    table: &DataTable<T>,
    rows: &[T],
    prefix: &str,
    sheet_name: &str,
) -> crate::Result<Option<(PathBuf, usize)>> {
    let Some(path) = show_save_dialog(&generate_export_filename(prefix)) else {
        return Ok(None);
    };
    let written = export_table_to_excel(table, rows, sheet_name, &path)?;
    Ok(Some((path, written)))
}

/// Generate default filename for export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}
