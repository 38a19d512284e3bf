//! Delivery of finished documents (the "download" side effect).
//!
//! A sink takes ownership of the document, so one export delivers at most once.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{DashboardError, DashboardResult};

use super::ExportDocument;

/// Receives finished export documents.
pub trait DownloadSink {
    /// Delivers `document`.
    fn deliver(&mut self, document: ExportDocument) -> DashboardResult<()>;
}

/// Collects documents in memory.
impl DownloadSink for Vec<ExportDocument> {
    fn deliver(&mut self, document: ExportDocument) -> DashboardResult<()> {
        self.push(document);
        Ok(())
    }
}

/// Writes each document into a directory under its generated file name.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `dir`, which must already exist.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// The target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where a document named `filename` ends up.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&mut self, document: ExportDocument) -> DashboardResult<()> {
        let path = self.path_for(&document.filename);
        fs::write(&path, &document.content).map_err(|e| DashboardError::DeliveryFailed {
            filename: document.filename.clone(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), bytes = document.content.len(), "Export written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;

    fn create_test_document() -> ExportDocument {
        ExportDocument {
            filename: "employees_2026-10-17T10-00-00.csv".to_string(),
            format: ExportFormat::Csv,
            content: b"\"Email\"\n\"a@b.com\"".to_vec(),
        }
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<ExportDocument> = Vec::new();
        sink.deliver(create_test_document()).unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        sink.deliver(create_test_document()).unwrap();

        let written = fs::read(sink.path_for("employees_2026-10-17T10-00-00.csv")).unwrap();
        assert_eq!(written, b"\"Email\"\n\"a@b.com\"");
    }

    #[test]
    fn test_directory_sink_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("missing"));
        let err = sink.deliver(create_test_document()).unwrap_err();
        assert!(matches!(err, DashboardError::DeliveryFailed { .. }));
    }
}
