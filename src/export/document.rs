//! Export formats, finished documents and file naming.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::DashboardError;

/// Supported export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Comma-separated values.
    #[default]
    Csv,
    /// Spreadsheet workbook.
    Xlsx,
    /// JSON document with a field manifest.
    Json,
}

impl ExportFormat {
    /// Every format, in the order the export dialog lists them.
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Xlsx, ExportFormat::Json];

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "Excel",
            ExportFormat::Json => "JSON",
        }
    }

    /// One-line description for the format picker.
    pub fn description(self) -> &'static str {
        match self {
            ExportFormat::Csv => "Comma-separated values",
            ExportFormat::Xlsx => "Microsoft Excel format",
            ExportFormat::Json => "JavaScript Object Notation",
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }

    /// MIME type of the generated file.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Json => "application/json;charset=utf-8",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = DashboardError;

    /// Parses `csv`, `json`, `excel` or `xlsx`, ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "excel" | "xlsx" => Ok(ExportFormat::Xlsx),
            _ => Err(DashboardError::UnsupportedFormat {
                format: value.to_string(),
            }),
        }
    }
}

/// A finished export, ready to hand to a download sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    /// Generated file name.
    pub filename: String,
    /// Document format.
    pub format: ExportFormat,
    /// Encoded file content.
    pub content: Vec<u8>,
}

impl ExportDocument {
    /// MIME type of the content.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// The content as UTF-8 text, for text formats.
    pub fn as_text(&self) -> Option<&str> {
        match self.format {
            ExportFormat::Xlsx => None,
            _ => std::str::from_utf8(&self.content).ok(),
        }
    }
}

/// Builds `<prefix>_<YYYY-MM-DDTHH-MM-SS>.<ext>`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use employee_dashboard::export::{ExportFormat, generate_filename};
///
/// let at = Utc.with_ymd_and_hms(2026, 3, 9, 14, 5, 30).unwrap();
/// assert_eq!(
///     generate_filename("employees", ExportFormat::Csv, at),
///     "employees_2026-03-09T14-05-30.csv"
/// );
/// ```
pub fn generate_filename(prefix: &str, format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        at.format("%Y-%m-%dT%H-%M-%S"),
        format.extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_formats() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("excel".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
    }

    #[test]
    fn test_unknown_format_is_unsupported() {
        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported export format: pdf");
    }

    #[test]
    fn test_filename_has_no_colons_or_dots_in_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 8, 0, 1).unwrap();
        let name = generate_filename("employees", ExportFormat::Xlsx, at);
        assert_eq!(name, "employees_2026-10-17T08-00-01.xlsx");
        assert_eq!(name.matches('.').count(), 1);
        assert!(!name.contains(':'));
    }

    #[test]
    fn test_document_text_access() {
        let doc = ExportDocument {
            filename: "x.csv".to_string(),
            format: ExportFormat::Csv,
            content: b"\"A\"".to_vec(),
        };
        assert_eq!(doc.as_text(), Some("\"A\""));
        assert_eq!(doc.mime_type(), "text/csv;charset=utf-8");
    }
}
