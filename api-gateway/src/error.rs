//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tbl_common::{ProjectError, TblError, ValidationError};
use tbl_projects::StoreError;
use tracing::error;

/// Errors returned by gateway handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid or expired session")]
    Unauthorized,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ProjectError> for ApiError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProjectError::InvalidName => ApiError::BadRequest(err.to_string()),
            ProjectError::MissingResults(_) => ApiError::Conflict(err.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyUsername => ApiError::BadRequest(err.to_string()),
            _ => ApiError::Unprocessable(err.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ProjectError::NotFound(id).into(),
            StoreError::InvalidName => ProjectError::InvalidName.into(),
            StoreError::Storage(_) | StoreError::Serialization(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

impl From<TblError> for ApiError {
    fn from(err: TblError) -> Self {
        match err {
            TblError::Project(e) => e.into(),
            TblError::Validation(e) => e.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(StoreError::NotFound("p".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(StoreError::InvalidName).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(ProjectError::MissingResults("p".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(ValidationError::ProjectionTooLong { years: 90, max: 50 }).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(ValidationError::ResultsOverflow).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(ValidationError::EmptyUsername).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(TblError::Storage("disk".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
