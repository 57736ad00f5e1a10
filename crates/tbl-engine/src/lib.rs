//! # TBL Engine
//!
//! ROI calculation, result formatting, and narrative reports for the
//! Hybrid Triple Bottom Line calculator.
//!
//! ## ROI Formula
//!
//! ```text
//! Total ROI      = (Profit + Planet + People) / Investment × 100
//! Discounted ROI = Σ PV(yearly flows) / (Investment + PV(maintenance)) × 100
//! ```
//!
//! Where:
//! - Profit: recurring financial benefit net of maintenance
//! - Planet: CO2e token value of resource and emission reductions, plus brand margin
//! - People: attributable turnover savings, plus employer brand benefits
//!
//! Cash flows are discounted at end of year: year `y` (0-based) uses `(1 + r)^(y+1)`.

pub mod format;
pub mod report;
pub mod roi;

pub use format::{
    format_currency, format_fixed, format_number, format_percent, format_years, ResultsSummary,
    YearlyRow,
};
pub use report::{
    GeminiClient, NarrativeGenerator, Report, ReportService, ReportSettings, ReportSource,
};
pub use roi::{co2e_tokens, compute_project, compute_roi, social_value_tokens};
