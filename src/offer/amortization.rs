//! Amortizing-loan payment math

/// Monthly payment on a fully amortizing loan, rounded to the nearest whole
/// dollar.
///
/// A zero interest rate degenerates to straight-line repayment
/// `principal / (term_years * 12)`. Callers must guarantee `term_years > 0`;
/// a zero term is a programming error, not a recoverable condition.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    debug_assert!(term_years > 0, "loan term must be at least one year");

    let n = (term_years * 12) as f64;
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;

    if monthly_rate == 0.0 {
        return (principal / n).round();
    }

    let growth = (1.0 + monthly_rate).powf(n);
    let payment = principal * (monthly_rate * growth) / (growth - 1.0);
    payment.round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_zero_rate_is_straight_line() {
        // 120,000 over 10 years = 1,000/month exactly
        assert_eq!(monthly_payment(120_000.0, 0.0, 10), 1_000.0);
    }

    #[test]
    fn test_standard_seller_finance_terms() {
        // 280,000 offer at 20% down -> 224,000 financed at 6.5% over 30 years
        let payment = monthly_payment(224_000.0, 6.5, 30);
        assert_abs_diff_eq!(payment, 1_416.0, epsilon = 1.0);
    }

    #[test]
    fn test_payment_non_negative() {
        for &(principal, rate, term) in &[
            (1.0, 0.0, 1),
            (100_000.0, 3.25, 15),
            (500_000.0, 12.0, 30),
            (0.0, 7.0, 10),
        ] {
            assert!(monthly_payment(principal, rate, term) >= 0.0);
        }
    }

    #[test]
    fn test_higher_rate_costs_more() {
        let low = monthly_payment(200_000.0, 4.0, 30);
        let high = monthly_payment(200_000.0, 8.0, 30);
        assert!(high > low);
    }
}
