use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::repository::FileStorage;
use crate::domain::upload::is_contained;
use crate::error::StorageError;

/// Uploaded files kept under a local directory.
#[derive(Debug, Clone)]
pub struct LocalDiskStorage {
    pub root: PathBuf,
}

impl LocalDiskStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Join a stored relative path onto the root, refusing anything that could leave it.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        if !is_contained(path) {
            return Err(StorageError::InvalidPath(path.to_owned()));
        }
        Ok(self.root.join(Path::new(path)))
    }
}

impl FileStorage for LocalDiskStorage {
    async fn delete(&self, path: &str) -> Result<bool, StorageError> {
        let full = self.resolve(path)?;
        match tokio::fs::remove_file(&full).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}
