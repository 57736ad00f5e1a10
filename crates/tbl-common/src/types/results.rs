//! ROI results - the output of one calculation
//!
//! Produced whole on every calculation and replaced whole on recalculation.
//! Each yearly sequence holds exactly `projectionPeriod` entries.

use serde::{Deserialize, Serialize};

/// Profit dimension results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitResults {
    /// Undiscounted financial ROI in percent
    pub roi: f64,
    /// Net present value in currency units
    pub npv: f64,
    /// Years until cumulative flow recovers the investment, capped at the period
    pub payback_period: f64,
    /// Net flow per projected year
    pub yearly_flow: Vec<f64>,
}

/// Planet dimension results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetResults {
    pub co2e_tokens: f64,
    /// Token value at the fixed carbon price
    pub environmental_value: f64,
    pub brand_margin_benefits: f64,
    pub yearly_impact: Vec<f64>,
}

/// People dimension results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleResults {
    /// One token per full $1000 of turnover savings
    pub social_value_tokens: i64,
    pub turnover_savings: f64,
    pub brand_margin_benefits: f64,
    pub yearly_impact: Vec<f64>,
}

/// Full Triple Bottom Line result set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResults {
    pub profit: ProfitResults,
    pub planet: PlanetResults,
    pub people: PeopleResults,
    /// Blended, time-value-adjusted ROI in percent
    #[serde(rename = "discountedROI")]
    pub discounted_roi: f64,
    /// Blended, undiscounted ROI in percent
    #[serde(rename = "totalROI")]
    pub total_roi: f64,
}

impl RoiResults {
    /// Whether every figure is finite
    ///
    /// Finite inputs can still overflow; such results have no JSON form.
    pub fn is_finite(&self) -> bool {
        let profit = &self.profit;
        let planet = &self.planet;
        let people = &self.people;

        [
            profit.roi,
            profit.npv,
            profit.payback_period,
            planet.co2e_tokens,
            planet.environmental_value,
            planet.brand_margin_benefits,
            people.turnover_savings,
            people.brand_margin_benefits,
            self.discounted_roi,
            self.total_roi,
        ]
        .iter()
        .chain(&profit.yearly_flow)
        .chain(&planet.yearly_impact)
        .chain(&people.yearly_impact)
        .all(|v| v.is_finite())
    }
}
