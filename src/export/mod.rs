//! Export engine.
//!
//! Records are projected onto a set of [`ExportField`]s and encoded as CSV,
//! JSON or an XLSX workbook. Preconditions (records present, at least one
//! known field, a supported format) are checked before anything is encoded,
//! so a rejected export never produces a partial file.

mod csv_writer;
mod document;
mod exporter;
mod fields;
mod json_writer;
mod row;
mod selection;
mod sink;
mod value;
mod xlsx_writer;

pub use document::{ExportDocument, ExportFormat, generate_filename};
pub use exporter::{Exporter, export_data, get_export_preview};
pub use fields::{
    DEFAULT_EXPORT_FIELDS, EXPORT_FIELDS, ExportField, FieldCategory, LIST_SEPARATOR,
    fields_in_category, find_field, resolve_fields,
};
pub use row::{KeyedRow, LabelledRow, ProjectedRow, project_rows};
pub use selection::{DIALOG_PREVIEW_ROWS, ExportSelection};
pub use sink::{DirectorySink, DownloadSink};
pub use value::CellValue;
