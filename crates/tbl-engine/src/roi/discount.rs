//! Discounted cash flow helpers
//!
//! End-of-year discounting: the flow of year `y` (0-based) is divided by
//! `(1 + rate)^(y + 1)`, so the first flow is discounted once. Sums are
//! accumulated year by year in order.

/// Discount divisor for a 0-based year index
#[inline]
pub fn discount_factor(rate: f64, year: u32) -> f64 {
    (1.0 + rate).powf(f64::from(year) + 1.0)
}

/// Present value of a sequence of yearly flows
pub fn present_value(flows: &[f64], rate: f64) -> f64 {
    flows
        .iter()
        .zip(0u32..)
        .fold(0.0, |total, (flow, year)| total + flow / discount_factor(rate, year))
}

/// Present value of the same amount received every year for `years` years
pub fn present_value_of_constant(amount: f64, years: u32, rate: f64) -> f64 {
    (0..years).fold(0.0, |total, year| total + amount / discount_factor(rate, year))
}

/// Undiscounted payback period in whole years
///
/// Returns the first 1-based year at which the cumulative net flow reaches
/// `investment`. Saturates at `years` when the investment is never
/// recovered within the horizon.
pub fn payback_period(net_flow: f64, investment: f64, years: u32) -> f64 {
    let mut cumulative = 0.0;
    for year in 0..years {
        cumulative += net_flow;
        if cumulative >= investment {
            return f64::from(year + 1);
        }
    }
    f64::from(years)
}

/// Ratio in percent, or 0 when the denominator is not positive
#[inline]
pub fn percent_of(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_first_year_discounted_once() {
        assert!(close(discount_factor(0.08, 0), 1.08));
        assert!(close(discount_factor(0.08, 1), 1.1664));
        assert_eq!(discount_factor(0.0, 9), 1.0);
    }

    #[test]
    fn test_present_value_matches_annuity() {
        // 1000/yr for 5 years at 8%: annuity factor 3.99271
        let pv = present_value_of_constant(1000.0, 5, 0.08);
        assert!((pv - 3992.71).abs() < 0.01);

        let flows = vec![1000.0; 5];
        assert_eq!(present_value(&flows, 0.08), pv);
    }

    #[test]
    fn test_zero_rate_is_plain_sum() {
        assert_eq!(present_value(&[10.0, 20.0, 30.0], 0.0), 60.0);
        assert_eq!(present_value_of_constant(7.0, 4, 0.0), 28.0);
    }

    #[test]
    fn test_empty_horizon() {
        assert_eq!(present_value(&[], 0.08), 0.0);
        assert_eq!(present_value_of_constant(100.0, 0, 0.08), 0.0);
        assert_eq!(payback_period(100.0, 50.0, 0), 0.0);
    }

    #[test]
    fn test_payback_first_year_reaching_investment() {
        assert_eq!(payback_period(13_000.0, 20_000.0, 5), 2.0);
        assert_eq!(payback_period(10_000.0, 20_000.0, 5), 2.0);
        assert_eq!(payback_period(25_000.0, 20_000.0, 5), 1.0);
    }

    #[test]
    fn test_payback_saturates_at_horizon() {
        assert_eq!(payback_period(1_000.0, 20_000.0, 5), 5.0);
        assert_eq!(payback_period(-500.0, 1.0, 3), 3.0);
    }

    #[test]
    fn test_percent_of_guards_denominator() {
        assert_eq!(percent_of(45_000.0, 20_000.0), 225.0);
        assert_eq!(percent_of(45_000.0, 0.0), 0.0);
        assert_eq!(percent_of(45_000.0, -1.0), 0.0);
    }
}
