use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{entry_to_row, get_headers};
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: Color = Color::RGB(0x1F4E79);
const BAND_BG: Color = Color::RGB(0xDCE6F1);

/// What a cell string turned out to be once inspected.
enum CellValue {
    Serial { serial: f64, num_format: &'static str },
    Number(f64),
    Text,
}

fn classify(s: &str) -> CellValue {
    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        return CellValue::Serial { serial, num_format };
    }
    if let Ok(n) = s.parse::<f64>() {
        return CellValue::Number(n);
    }
    CellValue::Text
}

/// Styled XLSX export: frozen header, banded rows, auto-fitted columns and
/// a totals row for hours and wage. The caller guarantees a non-empty set.
pub(crate) fn export_xlsx(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Shifts").map_err(to_export_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_BG)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }
    sheet.set_freeze_panes(1, 0).ok();

    let mut widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (i, entry) in entries.iter().enumerate() {
        let row = (i + 1) as u32;
        let banded = i % 2 == 0;

        for (col, value) in entry_to_row(entry).iter().enumerate() {
            write_cell(sheet, row, col as u16, value, banded)?;
            widths[col] = widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    write_totals_row(sheet, entries, headers.len())?;

    for (col, w) in widths.iter().enumerate() {
        sheet
            .set_column_width(col as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(banded: bool) -> Format {
    let fmt = Format::new().set_border(FormatBorder::Thin);
    if banded {
        fmt.set_background_color(BAND_BG)
            .set_pattern(FormatPattern::Solid)
    } else {
        fmt
    }
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    banded: bool,
) -> AppResult<()> {
    match classify(value) {
        CellValue::Serial { serial, num_format } => {
            let fmt = cell_format(banded).set_num_format(num_format);
            sheet
                .write_with_format(row, col, serial, &fmt)
                .map_err(to_export_error)?;
        }
        CellValue::Number(n) => {
            sheet
                .write_with_format(row, col, n, &cell_format(banded))
                .map_err(to_export_error)?;
        }
        CellValue::Text => {
            sheet
                .write_with_format(row, col, value, &cell_format(banded))
                .map_err(to_export_error)?;
        }
    }
    Ok(())
}

/// Bold totals under the last entry: summed hours and wage in the final
/// two columns.
fn write_totals_row(sheet: &mut Worksheet, entries: &[EntryExport], cols: usize) -> AppResult<()> {
    let row = (entries.len() + 1) as u32;

    let fmt = Format::new().set_bold().set_border_top(FormatBorder::Double);

    let total_hours: f64 = entries.iter().map(|e| e.hours_worked).sum();
    let total_wage: f64 = entries.iter().map(|e| e.daily_wage).sum();

    sheet
        .write_with_format(row, 0, "Total", &fmt)
        .map_err(to_export_error)?;
    sheet
        .write_with_format(row, (cols - 2) as u16, total_hours, &fmt)
        .map_err(to_export_error)?;
    sheet
        .write_with_format(row, (cols - 1) as u16, total_wage, &fmt)
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid path".into()))
}
