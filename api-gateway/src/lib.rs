//! TBL ROI API Gateway
//!
//! REST surface over the Hybrid TBL ROI calculator:
//! - Sessions: username login, bearer tokens
//! - Calculator: stateless ROI computation
//! - Projects: owner-scoped CRUD, stored calculations, reports, dashboard summary
//! - Stats: aggregate project counts

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod validation;

use std::sync::Arc;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tbl_common::Result;
use tbl_engine::ReportService;
use tbl_projects::ProjectStore;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::auth::SessionRegistry;
use crate::config::GatewayConfig;

// ============ STATE ============

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProjectStore>,
    pub sessions: Arc<SessionRegistry>,
    pub reports: ReportService,
    pub max_projection_years: u32,
    pub storage_backend: &'static str,
}

impl AppState {
    /// Open the configured store and report service
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let backend = config.storage.backend()?;
        info!(backend = backend.name(), "Opening project store");

        Ok(Self {
            store: backend.open(),
            sessions: Arc::new(SessionRegistry::new(config.session_ttl_secs)),
            reports: ReportService::from_settings(&config.report)?,
            max_projection_years: config.max_projection_years,
            storage_backend: backend.name(),
        })
    }
}

// ============ ROUTER ============

/// Build the application router with middleware
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::store_stats))
        // Sessions
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        .route("/auth/me", get(handlers::me))
        // Calculator
        .route("/calculate", post(handlers::calculate))
        // Projects
        .route(
            "/projects",
            get(handlers::list_projects).post(handlers::create_project),
        )
        .route(
            "/projects/:id",
            get(handlers::get_project)
                .put(handlers::update_project)
                .delete(handlers::delete_project),
        )
        .route("/projects/:id/calculate", post(handlers::calculate_project))
        .route("/projects/:id/report", post(handlers::project_report))
        .route("/projects/:id/summary", get(handlers::project_summary))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
