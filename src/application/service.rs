use chrono::NaiveDate;

use crate::domain::{
    LedgerEntry, PayrollConfig, UnpaidHours, billing_period, build_entry, format_cents,
    last_balance, sum_unpaid_hours,
};
use crate::source::RecordSource;

use super::AppError;

/// Everything the downstream payout step needs: the computed ledger row and
/// the payment summary.
pub struct RunResult {
    pub entry: LedgerEntry,
    pub hours: UnpaidHours,
    pub payment_amount: String,
    pub recipient: String,
}

/// High-level payroll operations over an injected record source. This is the
/// primary interface for any client (CLI, host workflow, tests).
pub struct PayrollService<S: RecordSource> {
    source: S,
    config: PayrollConfig,
}

impl<S: RecordSource> PayrollService<S> {
    pub fn new(source: S, config: PayrollConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Sum the unpaid hours currently on the timesheet.
    pub fn unpaid_hours(&self) -> Result<UnpaidHours, AppError> {
        let records = self.source.timesheet_records()?;
        Ok(sum_unpaid_hours(
            &records,
            &self.config.columns,
            &self.config.paid_marker,
        ))
    }

    /// Compute the ledger entry for the billing period ending on `today`.
    pub fn run(&self, today: NaiveDate) -> Result<RunResult, AppError> {
        let hours = self.unpaid_hours()?;

        let ledger = self.source.ledger_records()?;
        let balance = last_balance(&ledger, &self.config.columns.balance);

        let period = billing_period(today);
        let entry = build_entry(hours.billable, balance, period, &self.config);

        Ok(RunResult {
            payment_amount: format_cents(entry.amount_cents),
            recipient: self.config.recipient.clone(),
            hours,
            entry,
        })
    }
}
