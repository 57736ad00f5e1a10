//! Error types for the TBL ROI calculator
//!
//! The calculation itself cannot fail; these cover the surrounding
//! services (project storage, report generation, input validation).

use thiserror::Error;

/// Result type alias using TblError
pub type Result<T> = std::result::Result<T, TblError>;

/// Unified error type for TBL ROI operations
#[derive(Debug, Error)]
pub enum TblError {
    // Project errors
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    // Report errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    // Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Project lifecycle errors
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Project name must not be empty")]
    InvalidName,

    #[error("No results available for project {0}")]
    MissingResults(String),
}

/// Narrative report errors
///
/// None of these reach the caller of the report service; they trigger the
/// template fallback and are logged.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("API error: {0}")]
    Api(String),

    #[error("API request failed: {status}")]
    Status { status: u16 },

    #[error("API returned no text")]
    EmptyResponse,

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Input validation errors raised by the input-collection layer
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Projection period {years} exceeds maximum of {max} years")]
    ProjectionTooLong { years: u32, max: u32 },

    #[error("Non-finite value in {group} inputs")]
    NonFinite { group: &'static str },

    #[error("Discount rate {rate}% must be greater than -100%")]
    DiscountRateTooLow { rate: f64 },

    #[error("Inputs are too large to produce finite results")]
    ResultsOverflow,

    #[error("Username must not be empty")]
    EmptyUsername,
}

// Implement From for common external error types
impl From<serde_json::Error> for TblError {
    fn from(err: serde_json::Error) -> Self {
        TblError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for TblError {
    fn from(err: std::io::Error) -> Self {
        TblError::Storage(err.to_string())
    }
}

impl From<anyhow::Error> for TblError {
    fn from(err: anyhow::Error) -> Self {
        TblError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TblError::Project(ProjectError::NotFound("0190a4".to_string()));
        assert!(err.to_string().contains("0190a4"));
    }

    #[test]
    fn test_validation_error() {
        let err = ValidationError::ProjectionTooLong { years: 80, max: 50 };
        assert!(err.to_string().contains("80"));
        assert!(err.to_string().contains("50 years"));
    }

    #[test]
    fn test_status_error() {
        let err: TblError = ReportError::Status { status: 503 }.into();
        assert_eq!(err.to_string(), "Report error: API request failed: 503");
    }
}
