use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::application::RunResult;
use crate::domain::{LedgerEntry, format_cents, format_date};

/// Payload handed to the next stage of the host workflow. Key names are the
/// workflow's contract and must not change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPayload {
    pub new_row_for_sheet: Vec<serde_json::Value>,
    pub payment_amount: String,
    pub recipient: String,
}

impl From<&RunResult> for WorkflowPayload {
    fn from(result: &RunResult) -> Self {
        Self {
            new_row_for_sheet: result.entry.to_row(),
            payment_amount: result.payment_amount.clone(),
            recipient: result.recipient.clone(),
        }
    }
}

/// Write the run result as the workflow JSON payload.
pub fn write_run_json<W: Write>(mut writer: W, result: &RunResult) -> Result<()> {
    let payload = WorkflowPayload::from(result);
    let json = serde_json::to_string_pretty(&payload)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write the new ledger row as a single CSV record, ready to append to the
/// ledger sheet.
pub fn write_row_csv<W: Write>(writer: W, entry: &LedgerEntry) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(&[
        entry.fiscal_year.clone(),
        format_date(entry.date),
        entry.description.clone(),
        entry.hours.to_string(),
        entry.rate.to_string(),
        format_cents(entry.amount_cents),
        entry.location.clone(),
        entry.entry_type.to_string(),
        format_cents(entry.ledger_amount_cents),
        format_cents(entry.running_balance_cents),
    ])?;

    csv_writer.flush()?;
    Ok(())
}

/// Write a human-readable summary of the run.
pub fn write_summary<W: Write>(mut writer: W, result: &RunResult) -> Result<()> {
    let entry = &result.entry;

    writeln!(writer, "Period:        {}", entry.description)?;
    writeln!(
        writer,
        "Unpaid hours:  {} (raw {:.2})",
        result.hours.billable, result.hours.raw
    )?;
    writeln!(writer, "Rate:          {}", entry.rate)?;
    writeln!(writer, "Amount:        {}", result.payment_amount)?;
    writeln!(
        writer,
        "Ledger amount: {}",
        format_cents(entry.ledger_amount_cents)
    )?;
    writeln!(
        writer,
        "New balance:   {}",
        format_cents(entry.running_balance_cents)
    )?;
    writeln!(writer, "Recipient:     {}", result.recipient)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{PayrollService, RunResult};
    use crate::domain::{CellValue, PayrollConfig, SheetRecord};
    use crate::source::StaticSource;
    use chrono::NaiveDate;

    fn sample_result() -> RunResult {
        let source = StaticSource::new(
            vec![SheetRecord::new().set("Total", CellValue::Text("10:00:00".into()))],
            Vec::new(),
        );
        let service = PayrollService::new(source, PayrollConfig::default());
        service
            .run(NaiveDate::from_ymd_opt(2024, 6, 20).unwrap())
            .unwrap()
    }

    #[test]
    fn test_run_json_uses_workflow_keys() {
        let mut buffer = Vec::new();
        write_run_json(&mut buffer, &sample_result()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["paymentAmount"], serde_json::json!("40.63"));
        assert_eq!(value["recipient"], serde_json::json!("Julius"));
        assert_eq!(value["newRowForSheet"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn test_row_csv_is_one_record() {
        let mut buffer = Vec::new();
        write_row_csv(&mut buffer, &sample_result().entry).unwrap();

        let line = String::from_utf8(buffer).unwrap();
        assert_eq!(line.lines().count(), 1);
        assert!(line.contains("Julius 2024-06-16 - 2024-06-20"));
        assert!(line.contains("-40.63"));
        assert!(line.contains("Remitly"));
    }

    #[test]
    fn test_summary_mentions_amount_and_recipient() {
        let mut buffer = Vec::new();
        write_summary(&mut buffer, &sample_result()).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Amount:        40.63"));
        assert!(text.contains("Recipient:     Julius"));
    }
}
