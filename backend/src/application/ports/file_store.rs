// Driven port - uploaded file storage

use async_trait::async_trait;

use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Name under which the file is served below `/api/uploads/`.
    pub stored_name: String,
    pub size: u64,
}

#[async_trait]
pub trait FileStore: Send + Sync {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> AppResult<StoredFile>;
}
