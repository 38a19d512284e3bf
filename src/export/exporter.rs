//! The export entry points.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::ExportSettings;
use crate::error::{DashboardError, DashboardResult};
use crate::models::Employee;

use super::csv_writer::write_csv;
use super::json_writer::write_json;
use super::xlsx_writer::write_xlsx;
use super::{
    DownloadSink, ExportDocument, ExportField, ExportFormat, ProjectedRow, generate_filename,
    project_rows, resolve_fields,
};

/// Builds export documents and previews using a fixed set of [`ExportSettings`].
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    settings: ExportSettings,
}

impl Exporter {
    /// Creates an exporter with the given settings.
    pub fn new(settings: ExportSettings) -> Self {
        Self { settings }
    }

    /// The settings in use.
    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    /// Exports `records` stamped with the current time.
    pub fn export<S: AsRef<str>>(
        &self,
        records: &[Employee],
        format: ExportFormat,
        field_keys: &[S],
    ) -> DashboardResult<ExportDocument> {
        self.export_at(records, format, field_keys, Utc::now())
    }

    /// Exports `records` as `format`, projecting onto `field_keys`.
    ///
    /// # Errors
    ///
    /// - `NoData` when `records` is empty
    /// - `NoFieldsSelected` when no key names a known field
    /// - `ExportFailed` / `Spreadsheet` when encoding fails
    pub fn export_at<S: AsRef<str>>(
        &self,
        records: &[Employee],
        format: ExportFormat,
        field_keys: &[S],
        exported_at: DateTime<Utc>,
    ) -> DashboardResult<ExportDocument> {
        let fields = check_preconditions(records, field_keys)?;
        let rows = project_rows(records, &fields);

        let content = match format {
            ExportFormat::Csv => write_csv(&fields, &rows)?,
            ExportFormat::Json => write_json(&fields, &rows, exported_at)?,
            ExportFormat::Xlsx => write_xlsx(&fields, &rows, &self.settings)?,
        };
        let filename = generate_filename(&self.settings.filename_prefix, format, exported_at);

        info!(
            format = %format,
            records = records.len(),
            fields = fields.len(),
            filename = %filename,
            "Export document assembled"
        );

        Ok(ExportDocument {
            filename,
            format,
            content,
        })
    }

    /// Exports with a format given by name, checking preconditions in the
    /// order empty data, empty field selection, unknown format.
    pub fn export_named<S: AsRef<str>>(
        &self,
        records: &[Employee],
        format_name: &str,
        field_keys: &[S],
    ) -> DashboardResult<ExportDocument> {
        check_preconditions(records, field_keys)?;
        let format = format_name.parse::<ExportFormat>().inspect_err(|err| {
            warn!(error = %err, "Export rejected");
        })?;
        self.export(records, format, field_keys)
    }

    /// Exports and hands the document to `sink`, returning the file name.
    pub fn deliver<S, D>(
        &self,
        records: &[Employee],
        format: ExportFormat,
        field_keys: &[S],
        sink: &mut D,
    ) -> DashboardResult<String>
    where
        S: AsRef<str>,
        D: DownloadSink + ?Sized,
    {
        let document = self.export(records, format, field_keys)?;
        let filename = document.filename.clone();
        sink.deliver(document)?;
        Ok(filename)
    }

    /// Exports the configured default field set.
    pub fn quick_export<D: DownloadSink + ?Sized>(
        &self,
        records: &[Employee],
        format: ExportFormat,
        sink: &mut D,
    ) -> DashboardResult<String> {
        self.deliver(records, format, self.settings.default_fields.as_slice(), sink)
    }

    /// Label-addressed preview of the first `max_rows` records.
    pub fn preview<S: AsRef<str>>(
        &self,
        records: &[Employee],
        field_keys: &[S],
        max_rows: usize,
    ) -> Vec<ProjectedRow> {
        let fields = resolve_fields(field_keys);
        let shown = &records[..records.len().min(max_rows)];
        project_rows(shown, &fields)
    }
}

fn check_preconditions<S: AsRef<str>>(
    records: &[Employee],
    field_keys: &[S],
) -> DashboardResult<Vec<&'static ExportField>> {
    if records.is_empty() {
        warn!("Export rejected: no records");
        return Err(DashboardError::NoData);
    }
    let fields = resolve_fields(field_keys);
    if fields.is_empty() {
        warn!(requested = field_keys.len(), "Export rejected: no known fields selected");
        return Err(DashboardError::NoFieldsSelected);
    }
    Ok(fields)
}

/// Exports with default settings.
pub fn export_data<S: AsRef<str>>(
    records: &[Employee],
    format: ExportFormat,
    field_keys: &[S],
) -> DashboardResult<ExportDocument> {
    Exporter::default().export(records, format, field_keys)
}

/// Previews the first `max_rows` records projected onto `field_keys`.
pub fn get_export_preview<S: AsRef<str>>(
    records: &[Employee],
    field_keys: &[S],
    max_rows: usize,
) -> Vec<ProjectedRow> {
    Exporter::default().preview(records, field_keys, max_rows)
}
