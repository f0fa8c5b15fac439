// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use payrun::application::PayrollService;
use payrun::domain::{CellValue, PayrollConfig, SheetRecord};
use payrun::source::StaticSource;

/// Helper to parse a date string into NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Timesheet row with a duration cell and an optional paid marker
pub fn timesheet_row(hours: CellValue, paid: Option<&str>) -> SheetRecord {
    let record = SheetRecord::new().set("Total", hours);
    match paid {
        Some(marker) => record.set("Paid? (Pranit to update)", CellValue::Text(marker.into())),
        None => record,
    }
}

pub fn time_text(hours: &str) -> CellValue {
    CellValue::Text(hours.into())
}

/// Ledger row holding only a running balance cell
pub fn ledger_row(balance: CellValue) -> SheetRecord {
    SheetRecord::new().set("Running Balance", balance)
}

/// Service over in-memory records with the production defaults
pub fn test_service(
    timesheet: Vec<SheetRecord>,
    ledger: Vec<SheetRecord>,
) -> PayrollService<StaticSource> {
    PayrollService::new(
        StaticSource::new(timesheet, ledger),
        PayrollConfig::default(),
    )
}
