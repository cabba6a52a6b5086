// src/export/xlsx.rs

use crate::core::{Cell, ReportTable};
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Sheet1";

/// Write the report table to an XLSX workbook, with task links on the
/// Task ID column.
pub fn export_xlsx(table: &ReportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    write_table(worksheet, table)?;

    workbook.save(path)?;
    notify_export_success("XLSX", path);
    Ok(())
}

/// Same workbook, kept in memory.
pub fn xlsx_bytes(table: &ReportTable) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    write_table(worksheet, table)?;
    Ok(workbook.save_to_buffer()?)
}

fn write_table(worksheet: &mut Worksheet, table: &ReportTable) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in table.columns.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, header.as_str(), &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = table.columns.iter().map(|h| h.width()).collect();

    let number_format = Format::new()
        .set_num_format("0.00")
        .set_align(FormatAlign::Right)
        .set_border(FormatBorder::Thin);
    let text_format = Format::new().set_border(FormatBorder::Thin);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, cells) in table.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;

        for (col, cell) in cells.iter().enumerate() {
            let c = col as u16;
            match cell {
                Cell::Blank => {}
                Cell::Text(s) => {
                    worksheet.write_with_format(row, c, s.as_str(), &text_format)?;
                }
                Cell::Number(v) => {
                    worksheet.write_with_format(row, c, *v, &number_format)?;
                }
            }
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(cell.render().width());
            }
        }
    }

    // ---------------------------
    // Task links (overwrite the plain Task ID text)
    // ---------------------------
    for link in &table.links {
        worksheet.write_url_with_text(
            (link.row + 1) as u32,
            link.column as u16,
            link.url.as_str(),
            link.text.as_str(),
        )?;
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, *w as f64 + 2.0)?;
    }

    Ok(())
}
