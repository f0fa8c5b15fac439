use super::{CellValue, SheetColumns, SheetRecord};

/// Unpaid hours summed off the timesheet: the raw total plus the billable
/// figure after rounding up to the next whole hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnpaidHours {
    pub raw: f64,
    pub billable: i64,
}

/// Convert one duration cell to hours. Text with colons is "HH:MM" or
/// "HH:MM:SS"; a bare number is a spreadsheet day-fraction. Malformed parts
/// contribute 0 rather than failing, so one bad row never blocks the payout.
pub fn cell_hours(value: &CellValue) -> f64 {
    match value {
        CellValue::Text(text) if text.contains(':') => {
            let mut parts = text.split(':');
            let h = int_part(parts.next());
            let m = int_part(parts.next());
            let s = int_part(parts.next());
            h + m / 60.0 + s / 3600.0
        }
        CellValue::Number(n) if n.is_finite() => n * 24.0,
        _ => 0.0,
    }
}

fn int_part(part: Option<&str>) -> f64 {
    part.and_then(|p| p.trim().parse::<i64>().ok()).unwrap_or(0) as f64
}

/// Sum the hours of every timesheet row that has a duration and is not
/// marked paid. The ceiling is applied once, to the final total.
pub fn sum_unpaid_hours(
    records: &[SheetRecord],
    columns: &SheetColumns,
    paid_marker: &str,
) -> UnpaidHours {
    let raw: f64 = records
        .iter()
        .filter(|record| record.get(&columns.hours).has_value())
        .filter(|record| record.get(&columns.paid).as_text() != Some(paid_marker))
        .map(|record| cell_hours(record.get(&columns.hours)))
        .sum();

    UnpaidHours {
        raw,
        billable: raw.ceil() as i64,
    }
}
