//! JSON file project store
//!
//! The whole collection is kept as one JSON array in a single file. Every
//! call reads the file; every mutation rewrites it through a uniquely named
//! temporary sibling and a rename, so readers never observe a partial write.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tbl_common::{Project, ProjectUpdate};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::store::{
    new_project, normalize_update, select_for_user, ProjectStore, StatsTally, StoreError,
    StoreStats,
};

/// File-backed storage implementation
pub struct JsonFileStore {
    path: PathBuf,
    /// Serialises read-modify-write cycles within this process
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        info!(path = %path.display(), "Using JSON file project store");
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Project>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Vec::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, projects: &[Project]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(projects)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))??;

        debug!(projects = projects.len(), "Saved project file");
        Ok(())
    }
}

/// Write through a temp file in the target directory, then rename over `path`
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StoreError::from(e.error))?;
    Ok(())
}

#[async_trait]
impl ProjectStore for JsonFileStore {
    async fn create(
        &self,
        name: &str,
        description: &str,
        user_id: Option<&str>,
    ) -> Result<Project, StoreError> {
        let project = new_project(name, description, user_id)?;

        let _guard = self.lock.lock().await;
        let mut projects = self.load().await?;
        projects.push(project.clone());
        self.save(&projects).await?;

        Ok(project)
    }

    async fn get(&self, id: &str) -> Result<Option<Project>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.into_iter().find(|p| p.id == id))
    }

    async fn update(&self, id: &str, update: ProjectUpdate) -> Result<Project, StoreError> {
        let update = normalize_update(update)?;

        let _guard = self.lock.lock().await;
        let mut projects = self.load().await?;
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        project.apply(update);
        let updated = project.clone();
        self.save(&projects).await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut projects = self.load().await?;
        let before = projects.len();
        projects.retain(|p| p.id != id);

        if projects.len() == before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.save(&projects).await
    }

    async fn list_for_user(&self, user_id: Option<&str>) -> Result<Vec<Project>, StoreError> {
        let _guard = self.lock.lock().await;
        let projects = self.load().await?;
        Ok(select_for_user(projects.iter(), user_id))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.len())
    }

    async fn stats(&self) -> Result<StoreStats, StoreError> {
        let _guard = self.lock.lock().await;
        let mut tally = StatsTally::default();
        for project in &self.load().await? {
            tally.add(project);
        }
        Ok(tally.finish())
    }
}
