//! Narrative reports
//!
//! A report is requested from a text-generation API when one is configured.
//! Any failure along that path (no key, transport error, non-2xx status,
//! empty answer) falls back to the deterministic template, so report
//! generation itself never fails.
//!
//! Components:
//! - `prompt`: analysis prompt sent to the API
//! - `template`: deterministic fallback report
//! - `gemini`: `generateContent` HTTP client

pub mod gemini;
pub mod prompt;
pub mod template;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tbl_common::{AnalysisInput, ReportError};
use tracing::{info, instrument, warn};

pub use gemini::GeminiClient;
pub use prompt::build_prompt;
pub use template::render_template;

/// Source of free-form report text
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Generate report text for a prompt
    async fn generate(&self, prompt: &str) -> Result<String, ReportError>;
}

/// Report generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// API key; no key means template-only reports
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_secs: 30,
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

/// Where the report text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSource {
    Generated,
    Template,
}

/// A finished report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub body: String,
    pub source: ReportSource,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    fn new(body: String, source: ReportSource) -> Self {
        Self {
            body,
            source,
            generated_at: Utc::now(),
        }
    }
}

/// Report service with template fallback
#[derive(Clone)]
pub struct ReportService {
    generator: Option<Arc<dyn NarrativeGenerator>>,
}

impl ReportService {
    /// Service that always renders the template
    pub fn template_only() -> Self {
        Self { generator: None }
    }

    pub fn with_generator(generator: Arc<dyn NarrativeGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Gemini-backed service when an API key is configured, template-only otherwise
    pub fn from_settings(settings: &ReportSettings) -> Result<Self, ReportError> {
        match settings.api_key.as_deref().filter(|key| !key.is_empty()) {
            Some(key) => {
                info!(model = %settings.model, "Narrative reports enabled");
                let client = GeminiClient::new(key, settings)?;
                Ok(Self::with_generator(Arc::new(client)))
            }
            None => {
                info!("No report API key configured, using template reports");
                Ok(Self::template_only())
            }
        }
    }

    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }

    /// Generate a report, falling back to the template on any failure
    #[instrument(skip_all, fields(project = %input.project.id))]
    pub async fn generate(&self, input: &AnalysisInput) -> Report {
        let Some(generator) = &self.generator else {
            return Report::new(render_template(input), ReportSource::Template);
        };

        let prompt = build_prompt(input);
        match generator.generate(&prompt).await {
            Ok(body) if !body.trim().is_empty() => Report::new(body, ReportSource::Generated),
            Ok(_) => {
                warn!("Generator returned empty text, using template report");
                Report::new(render_template(input), ReportSource::Template)
            }
            Err(e) => {
                warn!(error = %e, "Report generation failed, using template report");
                Report::new(render_template(input), ReportSource::Template)
            }
        }
    }
}
