mod file;

pub use file::*;

use thiserror::Error;

use crate::domain::SheetRecord;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported record format: {0} (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("Malformed record data: {0}")]
    Malformed(String),
}

/// Where the two record sets come from. In production the host workflow
/// supplies them; here they are read from export files, and tests inject
/// them directly. A malformed file is an error, a malformed cell is not.
pub trait RecordSource {
    fn timesheet_records(&self) -> Result<Vec<SheetRecord>, SourceError>;
    fn ledger_records(&self) -> Result<Vec<SheetRecord>, SourceError>;
}

/// In-memory source for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub timesheet: Vec<SheetRecord>,
    pub ledger: Vec<SheetRecord>,
}

impl StaticSource {
    pub fn new(timesheet: Vec<SheetRecord>, ledger: Vec<SheetRecord>) -> Self {
        Self { timesheet, ledger }
    }
}

impl RecordSource for StaticSource {
    fn timesheet_records(&self) -> Result<Vec<SheetRecord>, SourceError> {
        Ok(self.timesheet.clone())
    }

    fn ledger_records(&self) -> Result<Vec<SheetRecord>, SourceError> {
        Ok(self.ledger.clone())
    }
}
