//! Username sessions
//!
//! Login takes a username only; a password, when sent, is accepted without
//! verification. Tokens are 32 random bytes, hex encoded, and only their
//! BLAKE3 hash is kept server-side.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tbl_common::ValidationError;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::AppState;

/// Who is making a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caller {
    User(String),
    Guest,
}

impl Caller {
    /// Owner id used for project scoping (`None` for guests)
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Caller::User(name) => Some(name),
            Caller::Guest => None,
        }
    }
}

/// A freshly issued session token
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedSession {
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct Session {
    username: String,
    expires_at: DateTime<Utc>,
}

/// Live sessions keyed by token hash
pub struct SessionRegistry {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl_secs: u64) -> Self {
        let ttl = i64::try_from(ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Open a session for `username`
    pub fn issue(&self, username: &str) -> Result<IssuedSession, ValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }

        let token = hex::encode(rand::random::<[u8; 32]>());
        let expires_at = Utc::now()
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        self.sessions.insert(
            token_hash(&token),
            Session {
                username: username.to_string(),
                expires_at,
            },
        );
        info!(user = %username, "Session opened");

        Ok(IssuedSession {
            token,
            username: username.to_string(),
            expires_at,
        })
    }

    /// Username for a live token; expired sessions are dropped on sight
    pub fn resolve(&self, token: &str) -> Option<String> {
        let key = token_hash(token);
        let session = self.sessions.get(&key).map(|s| s.clone())?;

        if session.expires_at <= Utc::now() {
            self.sessions.remove(&key);
            debug!(user = %session.username, "Session expired");
            return None;
        }
        Some(session.username)
    }

    /// Revoke a token; returns whether it was live
    pub fn revoke(&self, token: &str) -> bool {
        self.sessions.remove(&token_hash(token)).is_some()
    }

    /// Drop every expired session, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, s| s.expires_at > now);
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn token_hash(token: &str) -> String {
    blake3::hash(token.as_bytes()).to_hex().to_string()
}

/// Bearer token from an `Authorization` header, if any
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match bearer_token(&parts.headers) {
            None => Ok(Caller::Guest),
            Some(token) => state
                .sessions
                .resolve(token)
                .map(Caller::User)
                .ok_or(ApiError::Unauthorized),
        }
    }
}
