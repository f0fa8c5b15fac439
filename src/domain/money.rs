/// Money is represented as integer cents to avoid floating-point precision issues.
/// $40.63 = 4063 cents.
pub type Cents = i64;

/// Format cents as a plain decimal string with exactly two decimal digits.
/// Example: 4063 -> "40.63", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Round a decimal amount to the nearest cent. Halves round away from zero,
/// matching how the upstream sheet rounds transaction amounts.
pub fn round_to_cents(amount: f64) -> Cents {
    (amount * 100.0).round() as Cents
}

/// Cents back to a decimal number, for row values the sheet stores as numbers.
pub fn cents_to_decimal(cents: Cents) -> f64 {
    cents as f64 / 100.0
}

/// Parse a balance string into cents. Accepts any plain decimal ("1234.5",
/// "-12.34"); anything else is None so callers can fall back to zero.
pub fn parse_cents_lossy(input: &str) -> Option<Cents> {
    let value: f64 = input.trim().parse().ok()?;
    if value.is_finite() {
        Some(round_to_cents(value))
    } else {
        None
    }
}
