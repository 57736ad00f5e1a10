//! ROI calculation
//!
//! Components:
//! - `calculator`: the Triple Bottom Line formula pipeline
//! - `discount`: end-of-year discounting and payback helpers

pub mod calculator;
pub mod discount;

pub use calculator::{co2e_tokens, compute_project, compute_roi, social_value_tokens};
pub use discount::{discount_factor, payback_period, present_value, present_value_of_constant};
