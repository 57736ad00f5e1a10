//! Environmental inputs - the Planet dimension
//!
//! Mirrors the environmental step of the input wizard. Only the reduction
//! quantities and the brand-margin impacts feed the calculation; the carbon
//! market, renewable energy and sustainable materials groups are collected
//! and persisted but never read.

use serde::{Deserialize, Serialize};

/// Energy consumption and reduction (kWh)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyMetrics {
    pub consumption: f64,
    pub cost_per_kwh: f64,
    /// Reduction in kWh
    pub reduction: f64,
    pub reduction_cost: f64,
}

/// Water consumption and reduction (m³)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaterMetrics {
    pub consumption: f64,
    #[serde(rename = "costPerM3")]
    pub cost_per_m3: f64,
    /// Reduction in m³
    pub reduction: f64,
    pub project_cost: f64,
}

/// Waste volume and reduction (tonnes)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WasteMetrics {
    pub tonnes: f64,
    pub cost_per_tonne: f64,
    /// Reduction in tonnes
    pub reduction: f64,
    pub project_cost: f64,
}

/// Scope 1 & 2 or scope 3 emissions (tonnes CO2e)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmissionMetrics {
    pub emissions: f64,
    pub costs: f64,
    /// Reduction in tonnes CO2e, counted 1:1 as tokens
    pub reduction: f64,
    pub project_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarbonMarketMetrics {
    pub credits: f64,
    pub selling_price: f64,
    pub project_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchasedEnergy {
    pub kwh: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProducedEnergy {
    pub kwh: f64,
    pub cost: f64,
    pub project_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenewableEnergyMetrics {
    pub purchased: PurchasedEnergy,
    pub produced: ProducedEnergy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SustainableMaterialsMetrics {
    pub tonnes: f64,
    pub cost_per_tonne: f64,
    pub decrease: f64,
    pub project_cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GreenProducts {
    pub margin: f64,
    /// Profit impact of green products, counted in full
    pub profit_impact: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certifications {
    /// Revenue impact of certifications, counted at 10%
    pub revenue_impact: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClimateRisk {
    /// Avoided climate-risk cost, counted in full
    pub benefits: f64,
    pub revenue_impact: f64,
}

/// Brand margin effects of sustainability positioning
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanetBrandMargin {
    pub total_revenue: f64,
    pub total_profits: f64,
    pub green_products: GreenProducts,
    pub certifications: Certifications,
    pub climate_risk: ClimateRisk,
}

/// All environmental inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentalInputs {
    pub energy: EnergyMetrics,
    pub water: WaterMetrics,
    pub waste: WasteMetrics,
    #[serde(rename = "scope1And2")]
    pub scope1_and_2: EmissionMetrics,
    #[serde(rename = "scope3")]
    pub scope3: EmissionMetrics,
    pub carbon_market: CarbonMarketMetrics,
    pub renewable_energy: RenewableEnergyMetrics,
    pub sustainable_materials: SustainableMaterialsMetrics,
    pub brand_margin: PlanetBrandMargin,
}

impl EnvironmentalInputs {
    /// Whether every field that feeds the calculation is finite
    pub fn is_finite(&self) -> bool {
        [
            self.energy.reduction,
            self.water.reduction,
            self.waste.reduction,
            self.scope1_and_2.reduction,
            self.scope3.reduction,
            self.brand_margin.green_products.profit_impact,
            self.brand_margin.certifications.revenue_impact,
            self.brand_margin.climate_risk.benefits,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
