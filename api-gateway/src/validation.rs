//! Input checks applied around calculation

use tbl_common::{ProjectData, RoiResults, ValidationError};

/// Reject non-finite numbers, a discount rate at or below -100%, and
/// over-long projection periods
pub fn validate_inputs(data: &ProjectData, max_projection_years: u32) -> Result<(), ValidationError> {
    let groups = [
        ("financial", data.financial.is_finite()),
        ("environmental", data.environmental.is_finite()),
        ("social", data.social.is_finite()),
        ("common", data.common.discount_rate.is_finite()),
    ];
    if let Some(&(group, _)) = groups.iter().find(|(_, finite)| !finite) {
        return Err(ValidationError::NonFinite { group });
    }

    // (1 + r) must stay positive for the discount factors
    let rate = data.common.discount_rate;
    if rate <= -100.0 {
        return Err(ValidationError::DiscountRateTooLow { rate });
    }

    let years = data.common.projection_period;
    if years > max_projection_years {
        return Err(ValidationError::ProjectionTooLong {
            years,
            max: max_projection_years,
        });
    }
    Ok(())
}

/// Reject results that overflowed; they cannot be serialized or stored
pub fn validate_results(results: &RoiResults) -> Result<(), ValidationError> {
    if results.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::ResultsOverflow)
    }
}
