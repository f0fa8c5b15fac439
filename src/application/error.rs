use thiserror::Error;

use crate::source::SourceError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid entry type: {0} (expected 'expense' or 'revenue')")]
    InvalidEntryType(String),

    #[error("Record source error: {0}")]
    Source(#[from] SourceError),
}
