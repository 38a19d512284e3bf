//! CSV encoding: every header and value quoted, quotes doubled, `\n` between rows.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{DashboardError, DashboardResult};

use super::{ExportField, ProjectedRow};

pub(crate) fn write_csv(
    fields: &[&'static ExportField],
    rows: &[ProjectedRow],
) -> DashboardResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(fields.iter().map(|f| f.label))
        .map_err(csv_failure)?;
    for row in rows {
        writer
            .write_record(row.values().map(|v| v.to_string()))
            .map_err(csv_failure)?;
    }

    let mut content = writer.into_inner().map_err(|e| DashboardError::ExportFailed {
        message: e.to_string(),
    })?;
    // No newline after the last row.
    if content.last() == Some(&b'\n') {
        content.pop();
    }
    Ok(content)
}

fn csv_failure(error: csv::Error) -> DashboardError {
    DashboardError::ExportFailed {
        message: error.to_string(),
    }
}
