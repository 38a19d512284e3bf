//! Field-projected rows.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::Employee;

use super::{CellValue, ExportField};

/// One employee projected onto a set of export fields, in field order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRow {
    cells: Vec<(&'static ExportField, CellValue)>,
}

impl ProjectedRow {
    /// Projects `employee` onto `fields`.
    pub fn project(employee: &Employee, fields: &[&'static ExportField]) -> Self {
        Self {
            cells: fields.iter().map(|f| (*f, f.value(employee))).collect(),
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for a row without cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value of the field with `key`.
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(f, _)| f.key == key)
            .map(|(_, value)| value)
    }

    /// Value of the field whose column label is `label`.
    pub fn get_by_label(&self, label: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(f, _)| f.label == label)
            .map(|(_, value)| value)
    }

    /// Field keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(f, _)| f.key)
    }

    /// Column labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(f, _)| f.label)
    }

    /// Cell values in order.
    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.cells.iter().map(|(_, value)| value)
    }

    /// Serializes as a map keyed by field key.
    pub fn keyed(&self) -> KeyedRow<'_> {
        KeyedRow(self)
    }

    /// Serializes as a map keyed by column label.
    pub fn labelled(&self) -> LabelledRow<'_> {
        LabelledRow(self)
    }
}

/// Projects every record onto `fields`.
pub fn project_rows(records: &[Employee], fields: &[&'static ExportField]) -> Vec<ProjectedRow> {
    records
        .iter()
        .map(|employee| ProjectedRow::project(employee, fields))
        .collect()
}

/// Key-ordered map view of a row, used by the JSON document.
#[derive(Debug, Clone, Copy)]
pub struct KeyedRow<'a>(&'a ProjectedRow);

impl Serialize for KeyedRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, value) in &self.0.cells {
            map.serialize_entry(field.key, value)?;
        }
        map.end()
    }
}

/// Label-ordered map view of a row, used by previews.
#[derive(Debug, Clone, Copy)]
pub struct LabelledRow<'a>(&'a ProjectedRow);

impl Serialize for LabelledRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, value) in &self.0.cells {
            map.serialize_entry(field.label, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::resolve_fields;
    use crate::testing::create_test_employee;

    #[test]
    fn test_project_in_field_order() {
        let employee = create_test_employee("1", "Ruth", "Lewis");
        let row = ProjectedRow::project(&employee, &resolve_fields(&["email", "firstName"]));

        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["firstName", "email"]);
        assert_eq!(row.labels().collect::<Vec<_>>(), vec!["First Name", "Email"]);
        assert_eq!(row.get("firstName"), Some(&CellValue::from("Ruth")));
        assert_eq!(
            row.get_by_label("Email"),
            Some(&CellValue::from("ruth.lewis@pharma.com"))
        );
        assert_eq!(row.get("salary"), None);
    }

    #[test]
    fn test_keyed_and_labelled_serialization_preserve_order() {
        let employee = create_test_employee("1", "Ruth", "Lewis");
        let row = ProjectedRow::project(&employee, &resolve_fields(&["skillCount", "lastName"]));

        assert_eq!(
            serde_json::to_string(&row.keyed()).unwrap(),
            r#"{"lastName":"Lewis","skillCount":2}"#
        );
        assert_eq!(
            serde_json::to_string(&row.labelled()).unwrap(),
            r#"{"Last Name":"Lewis","Skill Count":2}"#
        );
    }
}
