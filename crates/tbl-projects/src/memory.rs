//! In-memory project store

use async_trait::async_trait;
use dashmap::DashMap;
use tbl_common::{Project, ProjectUpdate};
use tracing::debug;

use crate::store::{
    new_project, normalize_update, select_for_user, ProjectStore, StatsTally, StoreError,
    StoreStats,
};

/// In-memory storage implementation
///
/// Uses DashMap for concurrent access. Contents live for the lifetime of
/// the process.
#[derive(Default)]
pub struct InMemoryProjectStore {
    /// All projects by ID
    projects: DashMap<String, Project>,
}

impl InMemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn create(
        &self,
        name: &str,
        description: &str,
        user_id: Option<&str>,
    ) -> Result<Project, StoreError> {
        let project = new_project(name, description, user_id)?;
        debug!(project = %project.id, "Created project");
        self.projects.insert(project.id.clone(), project.clone());
        Ok(project)
    }

    async fn get(&self, id: &str) -> Result<Option<Project>, StoreError> {
        Ok(self.projects.get(id).map(|p| p.clone()))
    }

    async fn update(&self, id: &str, update: ProjectUpdate) -> Result<Project, StoreError> {
        let update = normalize_update(update)?;
        let mut project = self
            .projects
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        project.apply(update);
        Ok(project.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.projects
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn list_for_user(&self, user_id: Option<&str>) -> Result<Vec<Project>, StoreError> {
        let snapshot: Vec<Project> = self.projects.iter().map(|p| p.clone()).collect();
        Ok(select_for_user(snapshot.iter(), user_id))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.projects.len())
    }

    async fn stats(&self) -> Result<StoreStats, StoreError> {
        let mut tally = StatsTally::default();
        for entry in self.projects.iter() {
            tally.add(entry.value());
        }
        Ok(tally.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tbl_common::{ProjectData, ProjectStage, RoiResults};

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemoryProjectStore::new();
        let project = store
            .create("  Solar Roof  ", "Rooftop PV", Some("ana"))
            .await
            .unwrap();

        assert_eq!(project.name, "Solar Roof");
        assert_eq!(project.stage(), ProjectStage::Setup);

        let fetched = store.get(&project.id).await.unwrap().unwrap();
        assert_eq!(fetched, project);
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let store = InMemoryProjectStore::new();
        let result = store.create("   ", "", None).await;
        assert!(matches!(result, Err(StoreError::InvalidName)));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_replaces_results() {
        let store = InMemoryProjectStore::new();
        let project = store.create("Fleet", "", Some("ana")).await.unwrap();

        let mut results = RoiResults::default();
        results.total_roi = 120.0;
        let updated = store
            .update(&project.id, ProjectUpdate::calculated(ProjectData::default(), results))
            .await
            .unwrap();

        assert_eq!(updated.stage(), ProjectStage::Results);
        assert!(updated.updated_at > project.updated_at);
        assert_eq!(updated.created_at, project.created_at);

        let mut replacement = RoiResults::default();
        replacement.total_roi = 80.0;
        let updated = store
            .update(&project.id, ProjectUpdate::calculated(ProjectData::default(), replacement))
            .await
            .unwrap();
        assert_eq!(updated.results.unwrap().total_roi, 80.0);
    }

    #[tokio::test]
    async fn test_update_missing_project() {
        let store = InMemoryProjectStore::new();
        let result = store.update("nope", ProjectUpdate::default()).await;
        assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "nope"));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryProjectStore::new();
        let project = store.create("Temp", "", None).await.unwrap();

        store.delete(&project.id).await.unwrap();
        assert!(store.get(&project.id).await.unwrap().is_none());
        assert!(matches!(store.delete(&project.id).await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_for_user_is_scoped_and_ordered() {
        let store = InMemoryProjectStore::new();
        let first = store.create("First", "", Some("ana")).await.unwrap();
        let second = store.create("Second", "", Some("ana")).await.unwrap();
        store.create("Theirs", "", Some("ben")).await.unwrap();
        store.create("Guest", "", None).await.unwrap();

        // Touching the first project moves it to the top
        store
            .update(
                &first.id,
                ProjectUpdate {
                    description: Some("edited".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let listed = store.list_for_user(Some("ana")).await.unwrap();
        let ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, [first.id.as_str(), second.id.as_str()]);

        let guests = store.list_for_user(None).await.unwrap();
        assert_eq!(guests.len(), 1);
        assert_eq!(guests[0].name, "Guest");
    }

    #[tokio::test]
    async fn test_stats() {
        let store = InMemoryProjectStore::new();
        let a = store.create("A", "", Some("ana")).await.unwrap();
        store.create("B", "", Some("ana")).await.unwrap();
        store.create("C", "", Some("ben")).await.unwrap();
        store.create("D", "", None).await.unwrap();
        store
            .update(&a.id, ProjectUpdate::calculated(ProjectData::default(), RoiResults::default()))
            .await
            .unwrap();

        assert_eq!(
            store.stats().await.unwrap(),
            StoreStats {
                total_projects: 4,
                unique_owners: 2,
                guest_projects: 1,
                with_results: 1,
            }
        );
    }
}
