use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    BillingPeriod, Cents, PayrollConfig, SheetRecord, cents_to_decimal, format_date,
    round_to_cents,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money going out to the contractor
    Expense,
    /// Money coming in
    Revenue,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Expense => "Expense",
            EntryType::Revenue => "Revenue",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "expense" => Some(EntryType::Expense),
            "revenue" => Some(EntryType::Revenue),
            _ => None,
        }
    }

    /// The amount as it lands on the ledger: expenses are negated.
    pub fn signed(&self, amount: Cents) -> Cents {
        match self {
            EntryType::Expense => -amount,
            EntryType::Revenue => amount,
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One computed ledger row. Field order mirrors the ledger sheet's columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerEntry {
    pub fiscal_year: String,
    pub date: NaiveDate,
    pub description: String,
    pub hours: i64,
    pub rate: f64,
    pub amount_cents: Cents,
    pub location: String,
    pub entry_type: EntryType,
    pub ledger_amount_cents: Cents,
    pub running_balance_cents: Cents,
}

impl LedgerEntry {
    /// The row as the ledger sheet stores it: ten scalar values, money as
    /// plain decimal numbers.
    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::from(self.fiscal_year.clone()),
            Value::from(format_date(self.date)),
            Value::from(self.description.clone()),
            Value::from(self.hours),
            Value::from(self.rate),
            Value::from(cents_to_decimal(self.amount_cents)),
            Value::from(self.location.clone()),
            Value::from(self.entry_type.as_str()),
            Value::from(cents_to_decimal(self.ledger_amount_cents)),
            Value::from(cents_to_decimal(self.running_balance_cents)),
        ]
    }
}

/// Running balance carried in from the existing ledger: the balance cell of
/// the final record. Missing history or an unreadable cell both mean zero,
/// so a fresh ledger starts the balance at the new row's ledger amount.
pub fn last_balance(ledger_records: &[SheetRecord], balance_column: &str) -> Cents {
    ledger_records
        .last()
        .and_then(|record| record.get(balance_column).as_cents())
        .unwrap_or(0)
}

/// Price the billable hours and assemble the new ledger row.
pub fn build_entry(
    hours: i64,
    last_balance: Cents,
    period: BillingPeriod,
    config: &PayrollConfig,
) -> LedgerEntry {
    let amount_cents = round_to_cents(hours as f64 * config.rate);
    let ledger_amount_cents = config.entry_type.signed(amount_cents);

    LedgerEntry {
        fiscal_year: config.fiscal_year.clone(),
        date: period.end,
        description: period.describe(&config.recipient),
        hours,
        rate: config.rate,
        amount_cents,
        location: config.location.clone(),
        entry_type: config.entry_type,
        ledger_amount_cents,
        running_balance_cents: last_balance + ledger_amount_cents,
    }
}
