//! Display formatting for monetary and percentage figures
//!
//! Values arriving here were already rounded by the derivation engine; the
//! formatters only add grouping and symbols, never re-round.

/// Format a whole-dollar amount with a currency symbol and thousands
/// grouping, e.g. `-$1,234,567`
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(amount.unsigned_abs()))
}

/// Format a percentage, trimming a trailing `.0`: `6.5` -> "6.5", `7.0` -> "7"
pub fn format_pct(pct: f64) -> String {
    if pct.fract() == 0.0 {
        format!("{}", pct as i64)
    } else {
        format!("{pct}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(2_800), "$2,800");
        assert_eq!(format_currency(280_000), "$280,000");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_negative_currency() {
        // Negative cash-to-seller must render as-is, not clamped
        assert_eq!(format_currency(-35_000), "-$35,000");
    }

    #[test]
    fn test_pct_trimming() {
        assert_eq!(format_pct(6.5), "6.5");
        assert_eq!(format_pct(7.0), "7");
        assert_eq!(format_pct(0.5), "0.5");
    }
}
