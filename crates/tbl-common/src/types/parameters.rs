//! Common DCF parameters shared by all three dimensions

use serde::{Deserialize, Serialize};

/// Default discount rate offered by the wizard (8%)
pub const DEFAULT_DISCOUNT_RATE: f64 = 8.0;

/// Default projection period offered by the wizard (years)
pub const DEFAULT_PROJECTION_PERIOD: u32 = 5;

/// Discount rate and projection horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommonParameters {
    /// Annual discount rate in percent (8 means 8%)
    pub discount_rate: f64,
    /// Number of projected years
    pub projection_period: u32,
}

impl Default for CommonParameters {
    fn default() -> Self {
        Self {
            discount_rate: DEFAULT_DISCOUNT_RATE,
            projection_period: DEFAULT_PROJECTION_PERIOD,
        }
    }
}

impl CommonParameters {
    pub fn new(discount_rate: f64, projection_period: u32) -> Self {
        Self {
            discount_rate,
            projection_period,
        }
    }

    /// Discount rate as a fraction (0.08 for 8%)
    #[inline]
    pub fn rate_fraction(&self) -> f64 {
        self.discount_rate / 100.0
    }

    /// Projection period as a float multiplier
    #[inline]
    pub fn years(&self) -> f64 {
        self.projection_period as f64
    }
}
