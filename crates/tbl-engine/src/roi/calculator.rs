//! Triple Bottom Line ROI calculation
//!
//! A single pure function over the four input records. Every yearly figure
//! is flat across the projection period, and every ratio falls back to 0
//! when its denominator is not positive.
//!
//! ```text
//! annual benefit   B = efficiencies + cost reductions + revenue growth
//! yearly flow      F = B - maintenance
//! financial ROI      = (B·n - M·n - I) / I × 100
//! NPV                = PV(F) - (I + PV(M))
//! CO2e tokens      T = 0.5·energy + 0.3·water + 1000·waste + scope1&2 + scope3
//! total ROI          = ((B + planet + people)·n - M·n - I) / I × 100
//! discounted ROI     = PV(B + planet + people) / (I + PV(M)) × 100
//! ```

use tbl_common::{
    CommonParameters, EnvironmentalInputs, FinancialInputs, PeopleResults, PlanetResults,
    ProfitResults, ProjectData, RoiResults, SocialInputs, CERTIFICATION_REVENUE_SHARE,
    CO2E_PER_KWH, CO2E_PER_M3_WATER, CO2E_PER_TONNE_EMISSIONS, CO2E_PER_TONNE_WASTE,
    CO2E_TOKEN_PRICE, EMPLOYER_BRAND_REVENUE_SHARE, SOCIAL_TOKEN_UNIT,
};

use super::discount::{payback_period, percent_of, present_value, present_value_of_constant};

/// Compute the full result set for one set of inputs
pub fn compute_roi(
    financial: &FinancialInputs,
    environmental: &EnvironmentalInputs,
    social: &SocialInputs,
    common: &CommonParameters,
) -> RoiResults {
    let years = common.projection_period;
    let rate = common.rate_fraction();

    let profit = ProfitOutcome::compute(financial, common);
    let planet = PlanetOutcome::compute(environmental);
    let people = PeopleOutcome::compute(social);

    let total_annual_benefit = profit.annual_benefit
        + planet.environmental_value
        + planet.brand_margin
        + people.turnover_savings
        + people.brand_margin;

    let total_net_profit = total_annual_benefit * common.years()
        - financial.maintenance_costs * common.years()
        - financial.initial_investment;
    let total_roi = percent_of(total_net_profit, financial.initial_investment);

    let discounted_total_benefit = present_value_of_constant(total_annual_benefit, years, rate);
    let discounted_roi = percent_of(discounted_total_benefit, profit.npv_of_costs);

    RoiResults {
        profit: profit.into_results(),
        planet: planet.into_results(years),
        people: people.into_results(years),
        discounted_roi,
        total_roi,
    }
}

/// Compute results for a bundled wizard submission
pub fn compute_project(data: &ProjectData) -> RoiResults {
    compute_roi(&data.financial, &data.environmental, &data.social, &data.common)
}

struct ProfitOutcome {
    annual_benefit: f64,
    roi: f64,
    npv: f64,
    npv_of_costs: f64,
    payback_period: f64,
    yearly_flow: Vec<f64>,
}

impl ProfitOutcome {
    fn compute(financial: &FinancialInputs, common: &CommonParameters) -> Self {
        let years = common.projection_period;
        let rate = common.rate_fraction();
        let annual_benefit = financial.annual_benefit();

        let net_profit = annual_benefit * common.years()
            - financial.maintenance_costs * common.years()
            - financial.initial_investment;
        let roi = percent_of(net_profit, financial.initial_investment);

        let yearly_flow = vec![financial.annual_net_flow(); years as usize];

        // Maintenance is already netted out of the yearly flow and is
        // charged again through the cost side.
        let npv_of_gains = present_value(&yearly_flow, rate);
        let npv_of_costs = financial.initial_investment
            + present_value_of_constant(financial.maintenance_costs, years, rate);

        Self {
            annual_benefit,
            roi,
            npv: npv_of_gains - npv_of_costs,
            npv_of_costs,
            payback_period: payback_period(
                financial.annual_net_flow(),
                financial.initial_investment,
                years,
            ),
            yearly_flow,
        }
    }

    fn into_results(self) -> ProfitResults {
        ProfitResults {
            roi: self.roi,
            npv: self.npv,
            payback_period: self.payback_period,
            yearly_flow: self.yearly_flow,
        }
    }
}

struct PlanetOutcome {
    co2e_tokens: f64,
    environmental_value: f64,
    brand_margin: f64,
}

impl PlanetOutcome {
    fn compute(environmental: &EnvironmentalInputs) -> Self {
        let co2e_tokens = co2e_tokens(environmental);
        let brand = &environmental.brand_margin;
        let brand_margin = brand.green_products.profit_impact
            + brand.certifications.revenue_impact * CERTIFICATION_REVENUE_SHARE
            + brand.climate_risk.benefits;

        Self {
            co2e_tokens,
            environmental_value: co2e_tokens * CO2E_TOKEN_PRICE,
            brand_margin,
        }
    }

    fn into_results(self, years: u32) -> PlanetResults {
        PlanetResults {
            co2e_tokens: self.co2e_tokens,
            environmental_value: self.environmental_value,
            brand_margin_benefits: self.brand_margin,
            yearly_impact: vec![self.environmental_value + self.brand_margin; years as usize],
        }
    }
}

/// CO2e token count for the reduction quantities
pub fn co2e_tokens(environmental: &EnvironmentalInputs) -> f64 {
    let energy = environmental.energy.reduction * CO2E_PER_KWH;
    let water = environmental.water.reduction * CO2E_PER_M3_WATER;
    let waste = environmental.waste.reduction * CO2E_PER_TONNE_WASTE;
    let emissions = (environmental.scope1_and_2.reduction + environmental.scope3.reduction)
        * CO2E_PER_TONNE_EMISSIONS;

    energy + water + waste + emissions
}

struct PeopleOutcome {
    turnover_savings: f64,
    brand_margin: f64,
}

impl PeopleOutcome {
    fn compute(social: &SocialInputs) -> Self {
        let turnover_savings = social.turnover.total_turnover_cost
            * social.turnover_composition.recoverable_fraction();
        let brand_margin = social.employer_brand.social_project_benefits
            + social.employer_brand.revenue_impact * EMPLOYER_BRAND_REVENUE_SHARE;

        Self {
            turnover_savings,
            brand_margin,
        }
    }

    fn into_results(self, years: u32) -> PeopleResults {
        PeopleResults {
            social_value_tokens: social_value_tokens(self.turnover_savings),
            turnover_savings: self.turnover_savings,
            brand_margin_benefits: self.brand_margin,
            yearly_impact: vec![self.turnover_savings + self.brand_margin; years as usize],
        }
    }
}

/// One token per full unit of turnover savings, floored
pub fn social_value_tokens(turnover_savings: f64) -> i64 {
    (turnover_savings / SOCIAL_TOKEN_UNIT).floor() as i64
}
