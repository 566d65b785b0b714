use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::files::sanitize_file_name;
use crate::application::ports::{FileStore, StoredFile};
use crate::error::AppResult;

/// Writes uploads into a flat directory served under `/api/uploads`.
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub async fn create(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<StoredFile> {
        let stored_name = format!(
            "{}_{}",
            Uuid::new_v4().simple(),
            sanitize_file_name(original_name)
        );
        tokio::fs::write(self.root.join(&stored_name), bytes).await?;
        Ok(StoredFile {
            stored_name,
            size: bytes.len() as u64,
        })
    }
}
