use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Cents, parse_cents_lossy, round_to_cents};

/// One spreadsheet cell as delivered by the host export.
/// Sheets hand durations over either as text ("02:30:00") or as a numeric
/// day-fraction (0.5 = 12 hours), so the distinction has to survive parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// True when the cell holds something: non-blank text or any number.
    pub fn has_value(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Number(_) => true,
            CellValue::Text(s) => !s.trim().is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Read the cell as money. Numbers round to the nearest cent; text parses
    /// as a plain decimal. Blank or malformed cells are None.
    pub fn as_cents(&self) -> Option<Cents> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(round_to_cents(*n)),
            CellValue::Text(s) => parse_cents_lossy(s),
            _ => None,
        }
    }
}

impl From<&serde_json::Value> for CellValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => CellValue::Number(f),
                None => CellValue::Empty,
            },
            serde_json::Value::String(s) if s.trim().is_empty() => CellValue::Empty,
            serde_json::Value::String(s) => CellValue::Text(s.clone()),
            _ => CellValue::Empty,
        }
    }
}

/// One sheet row, keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetRecord(HashMap<String, CellValue>);

impl SheetRecord {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn set(mut self, column: impl Into<String>, value: CellValue) -> Self {
        self.0.insert(column.into(), value);
        self
    }

    /// Cell under the given header. Missing columns read as empty so a
    /// renamed or absent column degrades the same way a blank cell does.
    pub fn get(&self, column: &str) -> &CellValue {
        self.0.get(column).unwrap_or(&CellValue::Empty)
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.0.insert(column.into(), value);
    }
}

impl FromIterator<(String, CellValue)> for SheetRecord {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_value() {
        assert!(!CellValue::Empty.has_value());
        assert!(!CellValue::Text("   ".into()).has_value());
        assert!(CellValue::Text("02:30:00".into()).has_value());
        assert!(CellValue::Number(0.0).has_value());
    }

    #[test]
    fn test_as_cents() {
        assert_eq!(CellValue::Number(1234.567).as_cents(), Some(123457));
        assert_eq!(CellValue::Text("1234.56".into()).as_cents(), Some(123456));
        assert_eq!(CellValue::Text("oops".into()).as_cents(), None);
        assert_eq!(CellValue::Empty.as_cents(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_cents(), None);
    }

    #[test]
    fn test_missing_column_reads_empty() {
        let record = SheetRecord::new().set("Total", CellValue::Number(0.5));
        assert_eq!(record.get("Total"), &CellValue::Number(0.5));
        assert_eq!(record.get("Running Balance"), &CellValue::Empty);
    }

    #[test]
    fn test_from_json_value() {
        use serde_json::json;
        assert_eq!(CellValue::from(&json!(0.5)), CellValue::Number(0.5));
        assert_eq!(
            CellValue::from(&json!("02:30:00")),
            CellValue::Text("02:30:00".into())
        );
        assert_eq!(CellValue::from(&json!("")), CellValue::Empty);
        assert_eq!(CellValue::from(&json!(null)), CellValue::Empty);
        assert_eq!(CellValue::from(&json!(true)), CellValue::Empty);
    }
}
