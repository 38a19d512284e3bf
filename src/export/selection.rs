//! Export dialog state: the chosen format and field keys.

use serde::Serialize;

use crate::error::DashboardResult;
use crate::models::Employee;

use super::{
    DEFAULT_EXPORT_FIELDS, DownloadSink, EXPORT_FIELDS, ExportFormat, Exporter, ProjectedRow,
};

/// Rows shown in the dialog's live preview.
pub const DIALOG_PREVIEW_ROWS: usize = 3;

/// What the user has picked in the export dialog.
///
/// Exporting borrows the selection immutably, so a failed export always
/// leaves the format and fields as they were for a retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSelection {
    format: ExportFormat,
    fields: Vec<String>,
}

impl Default for ExportSelection {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            fields: DEFAULT_EXPORT_FIELDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl ExportSelection {
    /// Creates a selection with explicit format and fields.
    pub fn new(format: ExportFormat, fields: Vec<String>) -> Self {
        Self { format, fields }
    }

    /// The chosen format.
    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// The chosen field keys, in the order they were picked.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns true if `key` is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.fields.iter().any(|k| k == key)
    }

    /// Changes the format.
    pub fn set_format(&mut self, format: ExportFormat) {
        self.format = format;
    }

    /// Adds `key` if absent, removes it if present.
    pub fn toggle_field(&mut self, key: &str) {
        if self.is_selected(key) {
            self.fields.retain(|k| k != key);
        } else {
            self.fields.push(key.to_string());
        }
    }

    /// Selects every exportable field.
    pub fn select_all(&mut self) {
        self.fields = EXPORT_FIELDS.iter().map(|f| f.key.to_string()).collect();
    }

    /// Clears the field selection.
    pub fn select_none(&mut self) {
        self.fields.clear();
    }

    /// Restores the default field set.
    pub fn select_default(&mut self) {
        *self = Self {
            format: self.format,
            ..Self::default()
        };
    }

    /// Preview rows for the dialog; empty while nothing can be shown.
    pub fn preview(&self, records: &[Employee], exporter: &Exporter) -> Vec<ProjectedRow> {
        if self.fields.is_empty() {
            return Vec::new();
        }
        exporter.preview(records, self.fields.as_slice(), DIALOG_PREVIEW_ROWS)
    }

    /// Exports `records` with this selection and delivers the result.
    pub fn export<D: DownloadSink + ?Sized>(
        &self,
        records: &[Employee],
        exporter: &Exporter,
        sink: &mut D,
    ) -> DashboardResult<String> {
        exporter.deliver(records, self.format, self.fields.as_slice(), sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::export::ExportDocument;
    use crate::testing::create_test_employee;

    #[test]
    fn test_default_selection() {
        let selection = ExportSelection::default();
        assert_eq!(selection.format(), ExportFormat::Csv);
        assert_eq!(selection.fields().len(), DEFAULT_EXPORT_FIELDS.len());
        assert!(selection.is_selected("fullName"));
        assert!(!selection.is_selected("skills"));
    }

    #[test]
    fn test_toggle_field() {
        let mut selection = ExportSelection::default();
        selection.toggle_field("skills");
        assert!(selection.is_selected("skills"));
        selection.toggle_field("skills");
        assert!(!selection.is_selected("skills"));
    }

    #[test]
    fn test_select_all_none_default() {
        let mut selection = ExportSelection::default();
        selection.set_format(ExportFormat::Json);

        selection.select_all();
        assert_eq!(selection.fields().len(), EXPORT_FIELDS.len());

        selection.select_none();
        assert!(selection.fields().is_empty());

        selection.select_default();
        assert_eq!(selection.fields().len(), DEFAULT_EXPORT_FIELDS.len());
        assert_eq!(selection.format(), ExportFormat::Json);
    }

    #[test]
    fn test_preview_limited_to_three_rows() {
        let records: Vec<_> = (0..5)
            .map(|i| create_test_employee(&i.to_string(), "A", "B"))
            .collect();
        let selection = ExportSelection::default();
        assert_eq!(selection.preview(&records, &Exporter::default()).len(), 3);
    }

    #[test]
    fn test_preview_empty_without_fields() {
        let records = vec![create_test_employee("1", "A", "B")];
        let mut selection = ExportSelection::default();
        selection.select_none();
        assert!(selection.preview(&records, &Exporter::default()).is_empty());
    }

    #[test]
    fn test_failed_export_keeps_selection() {
        let mut selection = ExportSelection::default();
        selection.set_format(ExportFormat::Xlsx);
        let before = selection.clone();

        let mut sink: Vec<ExportDocument> = Vec::new();
        let err = selection
            .export(&[], &Exporter::default(), &mut sink)
            .unwrap_err();

        assert!(matches!(err, DashboardError::NoData));
        assert_eq!(selection, before);
        assert!(sink.is_empty());
    }
}
