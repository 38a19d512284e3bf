//! Typed cell values for projected export rows.

use std::fmt;

use serde::{Serialize, Serializer};

/// One exported cell: text, number or boolean.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Free text.
    Text(String),
    /// A number; whole numbers serialize without a fractional part.
    Number(f64),
    /// A boolean.
    Boolean(bool),
}

impl CellValue {
    /// Returns the text, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number, if this is a numeric cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(number) => Some(*number),
            _ => None,
        }
    }
}

// Largest magnitude at which every integer is exactly representable as f64.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn as_whole_number(number: f64) -> Option<i64> {
    (number.fract() == 0.0 && number.abs() <= MAX_EXACT_INTEGER).then_some(number as i64)
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(number) => match as_whole_number(*number) {
                Some(whole) => write!(f, "{}", whole),
                None => write!(f, "{}", number),
            },
            CellValue::Boolean(flag) => write!(f, "{}", flag),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CellValue::Text(text) => serializer.serialize_str(text),
            CellValue::Number(number) => match as_whole_number(*number) {
                Some(whole) => serializer.serialize_i64(whole),
                None => serializer.serialize_f64(*number),
            },
            CellValue::Boolean(flag) => serializer.serialize_bool(*flag),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_number_without_fraction() {
        assert_eq!(CellValue::Number(85_000.0).to_string(), "85000");
        assert_eq!(CellValue::Number(4.25).to_string(), "4.25");
        assert_eq!(CellValue::Boolean(true).to_string(), "true");
        assert_eq!(CellValue::from("Boston, MA").to_string(), "Boston, MA");
    }

    #[test]
    fn test_serializes_to_natural_json() {
        let values = vec![
            CellValue::from("Active"),
            CellValue::Number(12.0),
            CellValue::Number(3.5),
            CellValue::Boolean(false),
        ];
        assert_eq!(
            serde_json::to_string(&values).unwrap(),
            r#"["Active",12,3.5,false]"#
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(CellValue::from("x").as_text(), Some("x"));
        assert_eq!(CellValue::Number(2.0).as_number(), Some(2.0));
        assert_eq!(CellValue::Boolean(true).as_text(), None);
    }
}
