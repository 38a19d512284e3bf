//! JSON encoding: timestamp, record count, field manifest and key-addressed rows.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};

use super::{ExportField, KeyedRow, ProjectedRow};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    export_date: String,
    total_records: usize,
    fields: Vec<FieldManifestEntry>,
    data: Vec<KeyedRow<'a>>,
}

#[derive(Serialize)]
struct FieldManifestEntry {
    key: &'static str,
    label: &'static str,
}

pub(crate) fn write_json(
    fields: &[&'static ExportField],
    rows: &[ProjectedRow],
    exported_at: DateTime<Utc>,
) -> DashboardResult<Vec<u8>> {
    let document = JsonExport {
        export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        total_records: rows.len(),
        fields: fields
            .iter()
            .map(|f| FieldManifestEntry {
                key: f.key,
                label: f.label,
            })
            .collect(),
        data: rows.iter().map(ProjectedRow::keyed).collect(),
    };

    serde_json::to_vec_pretty(&document).map_err(|e| DashboardError::ExportFailed {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{project_rows, resolve_fields};
    use crate::testing::create_test_employee;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    #[test]
    fn test_document_shape() {
        let records = vec![create_test_employee("1", "Mark", "Hall")];
        let fields = resolve_fields(&["fullName", "experienceYears"]);
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();

        let content = write_json(&fields, &project_rows(&records, &fields), at).unwrap();
        let value: Value = serde_json::from_slice(&content).unwrap();

        assert_eq!(
            value,
            json!({
                "exportDate": "2026-10-17T09:30:00.000Z",
                "totalRecords": 1,
                "fields": [
                    {"key": "fullName", "label": "Full Name"},
                    {"key": "experienceYears", "label": "Experience (Years)"}
                ],
                "data": [
                    {"fullName": "Mark Hall", "experienceYears": 4}
                ]
            })
        );
    }

    #[test]
    fn test_uses_two_space_indentation() {
        let records = vec![create_test_employee("1", "Mark", "Hall")];
        let fields = resolve_fields(&["email"]);
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let content = write_json(&fields, &project_rows(&records, &fields), at).unwrap();
        let text = String::from_utf8(content).unwrap();
        assert!(text.contains("\n  \"exportDate\""));
    }
}
