//! Presentation formatting
//!
//! en-US renderings used by the dashboard summary and the report texts.
//! Rounding goes through `rust_decimal` so that halves round away from
//! zero on the decimal value rather than on its binary approximation.

use rust_decimal::{prelude::FromPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tbl_common::RoiResults;

/// Two decimals and a percent sign: `12.34%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_fixed(value, 2))
}

/// Exactly `dp` fraction digits, halves rounded away from zero: `0.13`
pub fn format_fixed(value: f64, dp: u32) -> String {
    match round_decimal(value, dp) {
        Some(mut rounded) => {
            rounded.rescale(dp);
            let digits = rounded.abs().to_string();
            if value < 0.0 {
                format!("-{}", digits)
            } else {
                digits
            }
        }
        None if value.is_finite() => format!("{:.*}", dp as usize, value),
        None => fallback(value),
    }
}

/// Whole US dollars with grouped thousands: `$12,345`, `-$1,235`
pub fn format_currency(value: f64) -> String {
    let (negative, digits) = match round_decimal(value, 0) {
        Some(rounded) => (
            rounded.is_sign_negative() && !rounded.is_zero(),
            rounded.abs().to_string(),
        ),
        None if value.is_finite() => (value < 0.0, format!("{:.0}", value.abs())),
        None => return fallback(value),
    };

    let digits = group_thousands(&digits);
    if negative {
        format!("-${}", digits)
    } else {
        format!("${}", digits)
    }
}

/// Grouped thousands with at most three fraction digits: `1,234.568`
pub fn format_number(value: f64) -> String {
    match round_decimal(value, 3) {
        Some(rounded) => {
            let text = rounded.abs().normalize().to_string();
            let (int_part, frac_part) = match text.split_once('.') {
                Some((int_part, frac_part)) => (int_part, Some(frac_part)),
                None => (text.as_str(), None),
            };

            let mut out = String::new();
            if rounded.is_sign_negative() && !rounded.is_zero() {
                out.push('-');
            }
            out.push_str(&group_thousands(int_part));
            if let Some(frac) = frac_part {
                out.push('.');
                out.push_str(frac);
            }
            out
        }
        None => fallback(value),
    }
}

/// Years with one decimal: `2.0 years`
pub fn format_years(value: f64) -> String {
    format!("{} years", format_fixed(value, 1))
}

fn round_decimal(value: f64, dp: u32) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let decimal = Decimal::from_f64_retain(value).or_else(|| Decimal::from_f64(value))?;
    Some(decimal.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
}

fn fallback(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value)
    } else if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "∞".to_string()
    } else {
        "-∞".to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One bar group of the yearly chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    pub label: String,
    pub profit: String,
    pub planet: String,
    pub people: String,
}

/// Dashboard figures, formatted for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsSummary {
    pub total_roi: String,
    pub discounted_roi: String,
    pub financial_roi: String,
    pub npv: String,
    pub payback_period: String,
    pub co2e_tokens: String,
    pub environmental_value: String,
    pub planet_brand_benefits: String,
    pub social_value_tokens: String,
    pub turnover_savings: String,
    pub people_brand_benefits: String,
    pub yearly: Vec<YearlyRow>,
}

impl From<&RoiResults> for ResultsSummary {
    fn from(results: &RoiResults) -> Self {
        let yearly = results
            .profit
            .yearly_flow
            .iter()
            .zip(&results.planet.yearly_impact)
            .zip(&results.people.yearly_impact)
            .enumerate()
            .map(|(i, ((profit, planet), people))| YearlyRow {
                label: format!("Year {}", i + 1),
                profit: format_currency(*profit),
                planet: format_currency(*planet),
                people: format_currency(*people),
            })
            .collect();

        Self {
            total_roi: format_percent(results.total_roi),
            discounted_roi: format_percent(results.discounted_roi),
            financial_roi: format_percent(results.profit.roi),
            npv: format_currency(results.profit.npv),
            payback_period: format_years(results.profit.payback_period),
            co2e_tokens: format_number(results.planet.co2e_tokens),
            environmental_value: format_currency(results.planet.environmental_value),
            planet_brand_benefits: format_currency(results.planet.brand_margin_benefits),
            social_value_tokens: format_number(results.people.social_value_tokens as f64),
            turnover_savings: format_currency(results.people.turnover_savings),
            people_brand_benefits: format_currency(results.people.brand_margin_benefits),
            yearly,
        }
    }
}
