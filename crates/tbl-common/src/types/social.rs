//! Social inputs - the People dimension
//!
//! Turnover cost and its attribution drive the calculation. The FTE counts
//! and the satisfaction current/expected pairs are collected for context
//! (the report prompt quotes the turnover counts) but are not read by the
//! formula.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TurnoverMetrics {
    pub fte_cost: f64,
    /// Current annual cost of employee turnover
    pub total_turnover_cost: f64,
    pub employees_left: f64,
    pub fte_beginning: f64,
}

/// Share of turnover attributed to each cause, in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TurnoverComposition {
    pub employee_satisfaction_impact: f64,
    pub career_development_impact: f64,
    pub management_satisfaction_impact: f64,
}

impl TurnoverComposition {
    /// Fraction of current turnover cost treated as recoverable
    #[inline]
    pub fn recoverable_fraction(&self) -> f64 {
        (self.employee_satisfaction_impact
            + self.career_development_impact
            + self.management_satisfaction_impact)
            / 100.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeSatisfaction {
    pub wage_ratio: f64,
    pub satisfaction_rate: f64,
}

/// Current vs. expected satisfaction, in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SatisfactionPair {
    pub current_satisfaction: f64,
    pub expected_satisfaction: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployerBrand {
    /// Benefits of social projects, counted in full
    pub social_project_benefits: f64,
    /// Revenue impact of employer brand, counted at 5%
    pub revenue_impact: f64,
}

/// All social inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialInputs {
    pub turnover: TurnoverMetrics,
    pub turnover_composition: TurnoverComposition,
    pub employee_satisfaction: EmployeeSatisfaction,
    pub career_development: SatisfactionPair,
    pub management_satisfaction: SatisfactionPair,
    pub employer_brand: EmployerBrand,
}

impl SocialInputs {
    /// Whether every field that feeds the calculation is finite
    pub fn is_finite(&self) -> bool {
        [
            self.turnover.total_turnover_cost,
            self.turnover_composition.employee_satisfaction_impact,
            self.turnover_composition.career_development_impact,
            self.turnover_composition.management_satisfaction_impact,
            self.employer_brand.social_project_benefits,
            self.employer_brand.revenue_impact,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_fraction() {
        let composition = TurnoverComposition {
            employee_satisfaction_impact: 20.0,
            career_development_impact: 15.0,
            management_satisfaction_impact: 10.0,
        };
        assert!((composition.recoverable_fraction() - 0.45).abs() < 1e-12);
    }

    #[test]
    fn test_deserialize_partial_payload() {
        let json = r#"{"turnover": {"totalTurnoverCost": 250000, "employeesLeft": 12, "fteBeginning": 100},
                       "employerBrand": {"socialProjectBenefits": 8000}}"#;
        let inputs: SocialInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.turnover.total_turnover_cost, 250_000.0);
        assert_eq!(inputs.turnover.employees_left, 12.0);
        assert_eq!(inputs.employer_brand.social_project_benefits, 8_000.0);
        assert_eq!(inputs.employer_brand.revenue_impact, 0.0);
    }
}
