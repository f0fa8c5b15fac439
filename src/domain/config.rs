use super::EntryType;

/// Column headers the calculator reads from the two sheets. These must match
/// the upstream spreadsheet headers exactly, so they are carried as explicit
/// configuration instead of buried literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetColumns {
    /// Timesheet column holding the worked duration.
    pub hours: String,
    /// Timesheet column holding the paid/unpaid marker.
    pub paid: String,
    /// Ledger column holding the running balance.
    pub balance: String,
}

impl Default for SheetColumns {
    fn default() -> Self {
        Self {
            hours: "Total".into(),
            paid: "Paid? (Pranit to update)".into(),
            balance: "Running Balance".into(),
        }
    }
}

/// Everything the calculator needs beyond the records themselves: the sheet
/// columns plus the constants stamped into each new ledger row.
#[derive(Debug, Clone, PartialEq)]
pub struct PayrollConfig {
    pub columns: SheetColumns,
    pub fiscal_year: String,
    /// Hourly rate in dollars. Four decimal places, so it cannot live in cents.
    pub rate: f64,
    pub location: String,
    pub entry_type: EntryType,
    pub recipient: String,
    /// Exact text marking a timesheet row as already paid out.
    pub paid_marker: String,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            columns: SheetColumns::default(),
            fiscal_year: "2024-2025".into(),
            rate: 4.0625,
            location: "Remitly".into(),
            entry_type: EntryType::Expense,
            recipient: "Julius".into(),
            paid_marker: "Paid".into(),
        }
    }
}

impl PayrollConfig {
    pub fn with_columns(mut self, columns: SheetColumns) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_fiscal_year(mut self, fiscal_year: impl Into<String>) -> Self {
        self.fiscal_year = fiscal_year.into();
        self
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }
}
