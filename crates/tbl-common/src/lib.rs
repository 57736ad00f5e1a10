//! # TBL Common
//!
//! Shared value records, project types, and errors for the Hybrid Triple
//! Bottom Line ROI calculator.
//!
//! ## Input Records
//!
//! - [`FinancialInputs`]: recurring benefits, investment, maintenance (Profit)
//! - [`EnvironmentalInputs`]: resource and emission reductions, brand margin (Planet)
//! - [`SocialInputs`]: turnover cost and attribution, employer brand (People)
//! - [`CommonParameters`]: discount rate and projection period
//!
//! ## Output
//!
//! - [`RoiResults`]: per-dimension indicators plus blended ROI figures
//!
//! ## Projects
//!
//! - [`Project`]: a named, owned record of inputs and results
//! - [`AnalysisInput`]: what the report generator reads

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ProjectError, ReportError, Result, TblError, ValidationError};
pub use types::{
    analysis::{AnalysisInput, ProjectInfo},
    environmental::{
        EmissionMetrics, EnergyMetrics, EnvironmentalInputs, PlanetBrandMargin, WasteMetrics,
        WaterMetrics,
    },
    financial::FinancialInputs,
    parameters::CommonParameters,
    project::{Project, ProjectData, ProjectStage, ProjectUpdate},
    results::{PeopleResults, PlanetResults, ProfitResults, RoiResults},
    social::{EmployerBrand, SocialInputs, TurnoverComposition, TurnoverMetrics},
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// kg CO2e tokens per kWh of energy reduction
pub const CO2E_PER_KWH: f64 = 0.5;

/// kg CO2e tokens per m³ of water reduction
pub const CO2E_PER_M3_WATER: f64 = 0.3;

/// kg CO2e tokens per tonne of waste reduction
pub const CO2E_PER_TONNE_WASTE: f64 = 1000.0;

/// Tokens per tonne of scope 1/2/3 emission reduction
pub const CO2E_PER_TONNE_EMISSIONS: f64 = 1.0;

/// Currency value of one CO2e token
pub const CO2E_TOKEN_PRICE: f64 = 50.0;

/// Share of certification revenue impact counted as planet brand margin
pub const CERTIFICATION_REVENUE_SHARE: f64 = 0.1;

/// Share of employer-brand revenue impact counted as people brand margin
pub const EMPLOYER_BRAND_REVENUE_SHARE: f64 = 0.05;

/// Turnover savings per social value token
pub const SOCIAL_TOKEN_UNIT: f64 = 1000.0;
