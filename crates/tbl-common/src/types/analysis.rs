//! Input bundle for narrative report generation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    project::{Project, ProjectData},
    results::RoiResults,
};

/// Project identity as quoted in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Project> for ProjectInfo {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            description: project.description.clone(),
            created_by: project.user_id.clone(),
            created_at: project.created_at,
        }
    }
}

/// Everything the report generator reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub results: RoiResults,
    pub inputs: ProjectData,
    pub project: ProjectInfo,
}

impl AnalysisInput {
    /// Build from a saved project; `None` unless both inputs and results exist
    pub fn from_project(project: &Project) -> Option<Self> {
        let inputs = project.data?;
        let results = project.results.clone()?;
        Some(Self {
            results,
            inputs,
            project: ProjectInfo::from(project),
        })
    }
}
