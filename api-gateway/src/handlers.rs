//! Route handlers

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::{Deserialize, Serialize};
use tbl_common::{AnalysisInput, Project, ProjectData, ProjectError, ProjectUpdate, RoiResults};
use tbl_engine::{compute_project, Report, ResultsSummary};
use tbl_projects::StoreStats;
use tracing::{debug, info};

use crate::auth::{bearer_token, Caller, IssuedSession};
use crate::error::ApiError;
use crate::validation::{validate_inputs, validate_results};
use crate::AppState;

// ============ REQUEST TYPES ============

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    /// Accepted for form compatibility, never checked
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// ============ RESPONSE TYPES ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub username: Option<String>,
    pub guest: bool,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub revoked: bool,
}

// ============ HEALTH ============

pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "storage": state.storage_backend,
            "narrativeReports": state.reports.has_generator(),
        }
    }))
}

pub async fn store_stats(State(state): State<AppState>) -> Result<Json<StoreStats>, ApiError> {
    Ok(Json(state.store.stats().await?))
}

// ============ AUTH ============

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<IssuedSession>, ApiError> {
    let session = state.sessions.issue(&req.username)?;
    Ok(Json(session))
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Json<LogoutResponse> {
    let revoked = bearer_token(&headers)
        .map(|token| state.sessions.revoke(token))
        .unwrap_or(false);
    Json(LogoutResponse { revoked })
}

pub async fn me(caller: Caller) -> Json<MeResponse> {
    Json(MeResponse {
        username: caller.user_id().map(str::to_string),
        guest: caller == Caller::Guest,
    })
}

// ============ CALCULATION ============

pub async fn calculate(
    State(state): State<AppState>,
    Json(data): Json<ProjectData>,
) -> Result<Json<RoiResults>, ApiError> {
    validate_inputs(&data, state.max_projection_years)?;
    let results = compute_project(&data);
    validate_results(&results)?;
    debug!(total_roi = results.total_roi, "Calculated ROI");
    Ok(Json(results))
}

// ============ PROJECTS ============

/// Fetch a project the caller owns; foreign projects read as missing
async fn owned_project(state: &AppState, caller: &Caller, id: &str) -> Result<Project, ApiError> {
    state
        .store
        .get(id)
        .await?
        .filter(|p| p.is_owned_by(caller.user_id()))
        .ok_or_else(|| ProjectError::NotFound(id.to_string()).into())
}

pub async fn list_projects(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.store.list_for_user(caller.user_id()).await?;
    Ok(Json(projects))
}

pub async fn create_project(
    State(state): State<AppState>,
    caller: Caller,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let project = state
        .store
        .create(&req.name, &req.description, caller.user_id())
        .await?;
    info!(project = %project.id, "Created project");
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get_project(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    Ok(Json(owned_project(&state, &caller, &id).await?))
}

pub async fn update_project(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    Json(update): Json<ProjectUpdate>,
) -> Result<Json<Project>, ApiError> {
    let current = owned_project(&state, &caller, &id).await?;
    if update.is_empty() {
        return Ok(Json(current));
    }
    if let Some(data) = &update.data {
        validate_inputs(data, state.max_projection_years)?;
    }
    if let Some(results) = &update.results {
        validate_results(results)?;
    }

    let project = state.store.update(&id, update).await?;
    Ok(Json(project))
}

pub async fn delete_project(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    owned_project(&state, &caller, &id).await?;
    state.store.delete(&id).await?;
    info!(project = %id, "Deleted project");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn calculate_project(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    Json(data): Json<ProjectData>,
) -> Result<Json<Project>, ApiError> {
    owned_project(&state, &caller, &id).await?;
    validate_inputs(&data, state.max_projection_years)?;

    let results = compute_project(&data);
    validate_results(&results)?;
    debug!(project = %id, total_roi = results.total_roi, "Calculated project ROI");

    let project = state
        .store
        .update(&id, ProjectUpdate::calculated(data, results))
        .await?;
    Ok(Json(project))
}

pub async fn project_report(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<Report>, ApiError> {
    let project = owned_project(&state, &caller, &id).await?;
    let input = AnalysisInput::from_project(&project)
        .ok_or_else(|| ProjectError::MissingResults(id.clone()))?;

    let report = state.reports.generate(&input).await;
    info!(project = %id, source = ?report.source, "Generated report");
    Ok(Json(report))
}

pub async fn project_summary(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<ResultsSummary>, ApiError> {
    let project = owned_project(&state, &caller, &id).await?;
    let results = project
        .results
        .as_ref()
        .ok_or_else(|| ProjectError::MissingResults(id.clone()))?;
    Ok(Json(ResultsSummary::from(results)))
}
