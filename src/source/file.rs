use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::{CellValue, SheetRecord};

use super::{RecordSource, SourceError};

/// Record source backed by sheet export files. The format is picked by
/// extension; the ledger file is optional and an absent one reads as an
/// empty history.
pub struct FileSource {
    timesheet: PathBuf,
    ledger: Option<PathBuf>,
}

impl FileSource {
    pub fn new(timesheet: impl Into<PathBuf>, ledger: Option<PathBuf>) -> Self {
        Self {
            timesheet: timesheet.into(),
            ledger,
        }
    }
}

impl RecordSource for FileSource {
    fn timesheet_records(&self) -> Result<Vec<SheetRecord>, SourceError> {
        read_records_file(&self.timesheet)
    }

    fn ledger_records(&self) -> Result<Vec<SheetRecord>, SourceError> {
        match &self.ledger {
            Some(path) => read_records_file(path),
            None => Ok(Vec::new()),
        }
    }
}

/// Read one export file, dispatching on its extension.
pub fn read_records_file(path: &Path) -> Result<Vec<SheetRecord>, SourceError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("csv") => read_records_csv(File::open(path)?),
        Some("json") => read_records_json(File::open(path)?),
        _ => Err(SourceError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Read records from a CSV export. The first row is headers, matching the
/// sheet's column names. Cells that parse as numbers become numeric values,
/// the day-fraction convention for durations.
pub fn read_records_csv<R: Read>(reader: R) -> Result<Vec<SheetRecord>, SourceError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let record = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.to_string(), csv_cell(cell)))
            .collect();
        records.push(record);
    }

    Ok(records)
}

fn csv_cell(cell: &str) -> CellValue {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(cell.to_string()),
    }
}

/// Read records from a JSON export: an array of row objects, or the host
/// workflow's item shape where each row is wrapped as `{"json": {...}}`.
pub fn read_records_json<R: Read>(reader: R) -> Result<Vec<SheetRecord>, SourceError> {
    let value: Value = serde_json::from_reader(reader)?;
    let rows = value
        .as_array()
        .ok_or_else(|| SourceError::Malformed("expected an array of rows".into()))?;

    rows.iter().map(json_record).collect()
}

fn json_record(row: &Value) -> Result<SheetRecord, SourceError> {
    let object = match row.get("json").and_then(Value::as_object) {
        Some(inner) => inner,
        None => row
            .as_object()
            .ok_or_else(|| SourceError::Malformed("row is not an object".into()))?,
    };

    Ok(object
        .iter()
        .map(|(column, cell)| (column.clone(), CellValue::from(cell)))
        .collect())
}
