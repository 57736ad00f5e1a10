//! Project storage trait and shared helpers

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Serialize;
use tbl_common::{Project, ProjectError, ProjectUpdate, TblError};

/// Trait for project storage backends
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Create an empty project owned by `user_id` (`None` for guests)
    async fn create(
        &self,
        name: &str,
        description: &str,
        user_id: Option<&str>,
    ) -> Result<Project, StoreError>;

    /// Get a project by ID
    async fn get(&self, id: &str) -> Result<Option<Project>, StoreError>;

    /// Apply a partial update and return the stored project
    async fn update(&self, id: &str, update: ProjectUpdate) -> Result<Project, StoreError>;

    /// Delete a project
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Projects owned by `user_id`, most recently updated first
    async fn list_for_user(&self, user_id: Option<&str>) -> Result<Vec<Project>, StoreError>;

    /// Total project count
    async fn count(&self) -> Result<usize, StoreError>;

    /// Aggregate counts across all owners
    async fn stats(&self) -> Result<StoreStats, StoreError>;
}

/// Statistics about a project store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub total_projects: usize,
    pub unique_owners: usize,
    pub guest_projects: usize,
    pub with_results: usize,
}

/// Running tally behind [`StoreStats`]
#[derive(Default)]
pub(crate) struct StatsTally {
    owners: HashSet<String>,
    stats: StoreStats,
}

impl StatsTally {
    pub(crate) fn add(&mut self, project: &Project) {
        self.stats.total_projects += 1;
        match &project.user_id {
            Some(owner) => {
                self.owners.insert(owner.clone());
            }
            None => self.stats.guest_projects += 1,
        }
        if project.results.is_some() {
            self.stats.with_results += 1;
        }
    }

    pub(crate) fn finish(mut self) -> StoreStats {
        self.stats.unique_owners = self.owners.len();
        self.stats
    }
}

/// Errors from project store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Project name must not be empty")]
    InvalidName,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<StoreError> for TblError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => TblError::Project(ProjectError::NotFound(id)),
            StoreError::InvalidName => TblError::Project(ProjectError::InvalidName),
            StoreError::Storage(msg) => TblError::Storage(msg),
            StoreError::Serialization(msg) => TblError::Serialization(msg),
        }
    }
}

/// Trimmed project name, rejecting blank names
pub fn normalize_name(name: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidName);
    }
    Ok(trimmed.to_string())
}

/// Build a new project with a validated name
pub(crate) fn new_project(
    name: &str,
    description: &str,
    user_id: Option<&str>,
) -> Result<Project, StoreError> {
    let name = normalize_name(name)?;
    Ok(Project::new(name, description, user_id.map(str::to_string)))
}

/// Normalise the name carried by an update, if any
pub(crate) fn normalize_update(mut update: ProjectUpdate) -> Result<ProjectUpdate, StoreError> {
    if let Some(name) = update.name.as_deref() {
        update.name = Some(normalize_name(name)?);
    }
    Ok(update)
}

/// Owner filter plus most-recent-first ordering
pub(crate) fn select_for_user<'a>(
    projects: impl Iterator<Item = &'a Project>,
    user_id: Option<&str>,
) -> Vec<Project> {
    let mut selected: Vec<Project> = projects
        .filter(|p| p.is_owned_by(user_id))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| b.id.cmp(&a.id)));
    selected
}
