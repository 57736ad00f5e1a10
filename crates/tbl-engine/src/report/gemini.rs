//! Gemini `generateContent` client

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tbl_common::ReportError;
use tracing::{debug, instrument};

use super::{NarrativeGenerator, ReportSettings};

/// Header carrying the API key, keeping it out of request URLs and error text
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Sampling parameters sent with every request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if non-empty
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }
}

/// HTTP client for the Gemini text-generation API
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    generation: GenerationConfig,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, settings: &ReportSettings) -> Result<Self, ReportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ReportError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            generation: GenerationConfig {
                temperature: settings.temperature,
                top_k: settings.top_k,
                top_p: settings.top_p,
                max_output_tokens: settings.max_output_tokens,
            },
        })
    }

    /// Endpoint URL for the configured model
    pub fn endpoint(&self) -> String {
        format!("{}/v1/models/{}:generateContent", self.base_url, self.model)
    }

    pub fn request_body(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.generation.clone(),
        }
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiClient {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<String, ReportError> {
        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ReportError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReportError::Status {
                status: status.as_u16(),
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ReportError::Api(e.to_string()))?;

        debug!(candidates = body.candidates.len(), "Received generateContent response");

        body.first_text()
            .map(str::to_string)
            .ok_or(ReportError::EmptyResponse)
    }
}
