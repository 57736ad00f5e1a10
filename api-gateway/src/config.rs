//! Gateway configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tbl_common::{Result, TblError};
use tbl_engine::ReportSettings;
use tbl_projects::{StorageBackend, DEFAULT_STORAGE_PATH};

/// Default session lifetime: one day
pub const DEFAULT_SESSION_TTL_SECS: u64 = 24 * 60 * 60;

/// Default upper bound on the projection period accepted by the API
pub const DEFAULT_MAX_PROJECTION_YEARS: u32 = 50;

/// API gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Service host
    pub host: String,
    /// Service port
    pub port: u16,
    /// Storage configuration
    pub storage: StorageSettings,
    /// Session lifetime in seconds
    pub session_ttl_secs: u64,
    /// Longest projection period accepted on input
    pub max_projection_years: u32,
    /// Report generation configuration
    pub report: ReportSettings,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            storage: StorageSettings::default(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            max_projection_years: DEFAULT_MAX_PROJECTION_YEARS,
            report: ReportSettings::default(),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        // Platform PORT first, TBL_PORT overrides it
        if let Some(p) = var("PORT").and_then(|v| v.parse().ok()) {
            cfg.port = p;
        }
        if let Some(host) = var("TBL_HOST") {
            cfg.host = host;
        }
        if let Some(p) = var("TBL_PORT").and_then(|v| v.parse().ok()) {
            cfg.port = p;
        }

        // Storage settings
        if let Some(backend) = var("TBL_STORAGE_BACKEND") {
            cfg.storage.backend = backend.trim().to_ascii_lowercase();
        }
        if let Some(path) = var("TBL_STORAGE_PATH") {
            cfg.storage.path = PathBuf::from(path);
        }
        cfg.storage.backend()?;

        // Sessions and input limits
        if let Some(v) = var("TBL_SESSION_TTL_SECS").and_then(|v| v.parse().ok()) {
            cfg.session_ttl_secs = v;
        }
        if let Some(v) = var("TBL_MAX_PROJECTION_YEARS").and_then(|v| v.parse().ok()) {
            cfg.max_projection_years = v;
        }

        // Report settings
        if let Some(key) = var("GEMINI_API_KEY").filter(|k| !k.trim().is_empty()) {
            cfg.report.api_key = Some(key);
        }
        if let Some(model) = var("TBL_REPORT_MODEL") {
            cfg.report.model = model;
        }
        if let Some(url) = var("TBL_REPORT_BASE_URL") {
            cfg.report.base_url = url;
        }
        if let Some(v) = var("TBL_REPORT_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            cfg.report.timeout_secs = v;
        }

        Ok(cfg)
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// `memory` or `file`
    pub backend: String,
    /// Project file used by the `file` backend
    pub path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

impl StorageSettings {
    /// Resolve the configured backend
    pub fn backend(&self) -> Result<StorageBackend> {
        match self.backend.as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File(self.path.clone())),
            other => Err(TblError::Config(format!(
                "unknown storage backend '{}', expected 'memory' or 'file'",
                other
            ))),
        }
    }
}
