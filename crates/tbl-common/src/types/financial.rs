//! Financial inputs - the Profit dimension
//!
//! Three recurring benefit components plus the one-time and recurring
//! outlays. Values are currency units; non-negative values are expected
//! but the calculator does not enforce it.

use serde::{Deserialize, Serialize};

/// Annual benefits and costs of the initiative
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialInputs {
    /// Annual savings from operational efficiencies
    pub operational_efficiencies: f64,
    /// Annual direct cost reductions
    pub cost_reductions: f64,
    /// Annual revenue growth attributable to the initiative
    pub revenue_growth: f64,
    /// One-time investment outlay
    pub initial_investment: f64,
    /// Annual recurring maintenance outlay
    pub maintenance_costs: f64,
}

impl FinancialInputs {
    /// Sum of the three recurring benefit components
    #[inline]
    pub fn annual_benefit(&self) -> f64 {
        self.operational_efficiencies + self.cost_reductions + self.revenue_growth
    }

    /// Net recurring flow for a single year (benefit minus maintenance)
    #[inline]
    pub fn annual_net_flow(&self) -> f64 {
        self.annual_benefit() - self.maintenance_costs
    }

    /// Whether every field is a finite number
    pub fn is_finite(&self) -> bool {
        [
            self.operational_efficiencies,
            self.cost_reductions,
            self.revenue_growth,
            self.initial_investment,
            self.maintenance_costs,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
