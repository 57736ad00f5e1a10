//! Saved analysis projects
//!
//! A project is a named record owned by a user (or by the guest bucket when
//! `user_id` is `None`). It carries the last submitted inputs and the last
//! computed results, either of which may be absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    environmental::EnvironmentalInputs, financial::FinancialInputs,
    parameters::CommonParameters, results::RoiResults, social::SocialInputs,
};

/// The four input groups submitted by the wizard
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectData {
    pub financial: FinancialInputs,
    pub environmental: EnvironmentalInputs,
    pub social: SocialInputs,
    pub common: CommonParameters,
}

impl ProjectData {
    /// Whether every numeric input read by the calculator is finite
    pub fn is_finite(&self) -> bool {
        self.financial.is_finite()
            && self.environmental.is_finite()
            && self.social.is_finite()
            && self.common.discount_rate.is_finite()
    }
}

/// Where a loaded project resumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStage {
    /// Nothing entered yet
    Setup,
    /// Inputs saved, no results
    Input,
    /// Results available
    Results,
}

/// Persisted analysis project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Owner username; `None` for guest projects
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub data: Option<ProjectData>,
    #[serde(default)]
    pub results: Option<RoiResults>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create an empty project with a fresh time-ordered id
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        user_id: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::now_v7().to_string(),
            name: name.into(),
            description: description.into(),
            user_id,
            data: None,
            results: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn stage(&self) -> ProjectStage {
        match (&self.data, &self.results) {
            (_, Some(_)) => ProjectStage::Results,
            (Some(_), None) => ProjectStage::Input,
            (None, None) => ProjectStage::Setup,
        }
    }

    /// Whether `user_id` owns this project (`None` matches guest projects)
    pub fn is_owned_by(&self, user_id: Option<&str>) -> bool {
        self.user_id.as_deref() == user_id
    }

    /// Apply a partial update and refresh `updated_at`
    pub fn apply(&mut self, update: ProjectUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(data) = update.data {
            self.data = Some(data);
        }
        if let Some(results) = update.results {
            self.results = Some(results);
        }
        self.touch();
    }

    fn touch(&mut self) {
        let now = Utc::now();
        // Keep updated_at monotonic when two writes land in the same tick
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + chrono::Duration::microseconds(1)
        };
    }
}

/// Partial project update; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub data: Option<ProjectData>,
    pub results: Option<RoiResults>,
}

impl ProjectUpdate {
    /// Update carrying freshly submitted inputs and their results
    pub fn calculated(data: ProjectData, results: RoiResults) -> Self {
        Self {
            data: Some(data),
            results: Some(results),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.data.is_none()
            && self.results.is_none()
    }
}
