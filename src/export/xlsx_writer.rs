//! Spreadsheet encoding with `rust_xlsxwriter`.

use rust_xlsxwriter::Workbook;

use crate::config::ExportSettings;
use crate::error::DashboardResult;

use super::{CellValue, ExportField, ProjectedRow};

/// Column width in characters: the label length, but never below `floor`.
pub(crate) fn column_width(label: &str, floor: u16) -> f64 {
    label.chars().count().max(usize::from(floor)) as f64
}

pub(crate) fn write_xlsx(
    fields: &[&'static ExportField],
    rows: &[ProjectedRow],
    settings: &ExportSettings,
) -> DashboardResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&settings.sheet_name)?;

    for (col, field) in fields.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string(0, col, field.label)?;
        worksheet.set_column_width(col, column_width(field.label, settings.min_column_width))?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = index as u32 + 1;
        for (col, value) in row.values().enumerate() {
            let col = col as u16;
            match value {
                CellValue::Text(text) => {
                    worksheet.write_string(row_num, col, text)?;
                }
                CellValue::Number(number) => {
                    worksheet.write_number(row_num, col, *number)?;
                }
                CellValue::Boolean(flag) => {
                    worksheet.write_boolean(row_num, col, *flag)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
