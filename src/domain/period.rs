use chrono::{Datelike, NaiveDate};

/// A half-month billing window ending on the run date. Plain calendar dates
/// throughout: the sheet lives in the contractor's local calendar and must
/// never shift across a timezone conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BillingPeriod {
    /// Describe the period for the ledger row, e.g. "Julius 2024-06-01 - 2024-06-10".
    pub fn describe(&self, recipient: &str) -> String {
        format!("{} {} - {}", recipient, format_date(self.start), format_date(self.end))
    }
}

/// The billing period containing `today`. Runs on or before the 15th bill
/// from the 1st; later runs bill from the 16th. The period always ends on
/// the run date itself.
pub fn billing_period(today: NaiveDate) -> BillingPeriod {
    let start_day = if today.day() <= 15 { 1 } else { 16 };
    BillingPeriod {
        start: today.with_day(start_day).unwrap(),
        end: today,
    }
}

/// Format a date the way the sheet expects it: `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_first_half_starts_on_the_1st() {
        let period = billing_period(date("2024-06-10"));
        assert_eq!(format_date(period.start), "2024-06-01");
        assert_eq!(format_date(period.end), "2024-06-10");
    }

    #[test]
    fn test_second_half_starts_on_the_16th() {
        let period = billing_period(date("2024-06-20"));
        assert_eq!(format_date(period.start), "2024-06-16");
        assert_eq!(format_date(period.end), "2024-06-20");
    }

    #[test]
    fn test_the_15th_belongs_to_the_first_half() {
        let period = billing_period(date("2024-06-15"));
        assert_eq!(format_date(period.start), "2024-06-01");
    }

    #[test]
    fn test_the_16th_belongs_to_the_second_half() {
        let period = billing_period(date("2024-06-16"));
        assert_eq!(format_date(period.start), "2024-06-16");
    }

    #[test]
    fn test_describe() {
        let period = billing_period(date("2024-06-20"));
        assert_eq!(period.describe("Julius"), "Julius 2024-06-16 - 2024-06-20");
    }
}
