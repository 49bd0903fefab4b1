//! Library stores.

use crate::error::{ApiError, StorageError};
use crate::library::record::{LibraryRecord, StoredRecord, UserId};
use async_trait::async_trait;
use directories::ProjectDirs;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Per-user document store. Writes happen only on explicit user action.
#[async_trait]
pub trait LibraryStore: Send + Sync {
    /// Persist a record and return the id assigned to it.
    async fn save(&self, user: &UserId, record: &LibraryRecord) -> Result<String, ApiError>;

    /// All records of a user, oldest first.
    async fn list(&self, user: &UserId) -> Result<Vec<StoredRecord>, ApiError>;
}

/// Default on-disk location: `$XDG_DATA_HOME/ideaforge/library`.
pub fn default_library_path() -> Result<PathBuf, ApiError> {
    ProjectDirs::from("", "", "ideaforge")
        .map(|dirs| dirs.data_dir().join("library"))
        .ok_or_else(|| {
            ApiError::ConfigError("Could not determine a data directory for the library".into())
        })
}

fn sort_records(records: &mut [StoredRecord]) {
    records.sort_by(|a, b| {
        a.record
            .created_at
            .cmp(&b.record.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[derive(Default)]
pub struct MemoryLibrary {
    records: RwLock<HashMap<UserId, Vec<StoredRecord>>>,
}

impl MemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LibraryStore for MemoryLibrary {
    async fn save(&self, user: &UserId, record: &LibraryRecord) -> Result<String, ApiError> {
        let id = record.content_id()?;
        let mut records = self.records.write();
        let entries = records.entry(user.clone()).or_default();
        if !entries.iter().any(|stored| stored.id == id) {
            entries.push(StoredRecord {
                id: id.clone(),
                record: record.clone(),
            });
        }
        Ok(id)
    }

    async fn list(&self, user: &UserId) -> Result<Vec<StoredRecord>, ApiError> {
        let mut records = self
            .records
            .read()
            .get(user)
            .cloned()
            .unwrap_or_default();
        sort_records(&mut records);
        Ok(records)
    }
}

/// One pretty-printed JSON document per record under `<root>/<user>/<id>.json`.
pub struct FileLibrary {
    root: PathBuf,
}

impl FileLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn user_dir(&self, user: &UserId) -> PathBuf {
        self.root.join(user.as_str())
    }

    fn read_record(path: &Path) -> Result<StoredRecord, StorageError> {
        let content = std::fs::read_to_string(path)?;
        let record: LibraryRecord =
            serde_json::from_str(&content).map_err(|e| StorageError::CorruptRecord {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| StorageError::InvalidPath(path.display().to_string()))?
            .to_string();
        Ok(StoredRecord { id, record })
    }
}

#[async_trait]
impl LibraryStore for FileLibrary {
    async fn save(&self, user: &UserId, record: &LibraryRecord) -> Result<String, ApiError> {
        let id = record.content_id()?;
        let dir = self.user_dir(user);
        std::fs::create_dir_all(&dir).map_err(StorageError::IoError)?;

        let path = dir.join(format!("{}.json", id));
        let body = serde_json::to_string_pretty(record)
            .map_err(|e| ApiError::Generation(format!("Failed to encode record: {}", e)))?;
        std::fs::write(&path, body).map_err(StorageError::IoError)?;

        debug!(user = %user, id = %id, path = %path.display(), "Library record saved");
        Ok(id)
    }

    async fn list(&self, user: &UserId) -> Result<Vec<StoredRecord>, ApiError> {
        let dir = self.user_dir(user);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in std::fs::read_dir(&dir).map_err(StorageError::IoError)? {
            let path = entry.map_err(StorageError::IoError)?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            match Self::read_record(&path) {
                Ok(record) => records.push(record),
                // One unreadable file does not hide the rest of the library
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping library record"),
            }
        }
        sort_records(&mut records);
        Ok(records)
    }
}
