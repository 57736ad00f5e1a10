//! # TBL Projects
//!
//! Persistence for named TBL ROI projects.
//!
//! ## Backends
//!
//! - [`InMemoryProjectStore`]: concurrent map, process lifetime
//! - [`JsonFileStore`]: single JSON array file, atomic rewrite on mutation

pub mod file;
pub mod memory;
pub mod store;

use std::path::PathBuf;
use std::sync::Arc;

pub use file::JsonFileStore;
pub use memory::InMemoryProjectStore;
pub use store::{normalize_name, ProjectStore, StoreError, StoreStats};

/// Default path of the project file
pub const DEFAULT_STORAGE_PATH: &str = "data/tbl_roi_projects.json";

/// Which storage backend to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File(PathBuf),
}

impl StorageBackend {
    /// Open the configured backend
    pub fn open(&self) -> Arc<dyn ProjectStore> {
        match self {
            StorageBackend::Memory => Arc::new(InMemoryProjectStore::new()),
            StorageBackend::File(path) => Arc::new(JsonFileStore::new(path.clone())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::File(_) => "file",
        }
    }
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_memory_backend() {
        let store = StorageBackend::Memory.open();
        store.create("Opened", "", None).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_open_file_backend() {
        let dir = tempfile::TempDir::new().unwrap();
        let backend = StorageBackend::File(dir.path().join("p.json"));
        assert_eq!(backend.name(), "file");

        let store = backend.open();
        store.create("Opened", "", Some("ana")).await.unwrap();
        assert!(dir.path().join("p.json").exists());
    }
}
