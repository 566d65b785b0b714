// Uploaded attachments

use shared::protocol::UploadResponse;

use crate::application::ports::FileStore;
use crate::error::{AppError, AppResult};

pub const UPLOADS_ROUTE: &str = "/api/uploads";

/// Base name of a client-supplied path with anything outside
/// `[A-Za-z0-9._-]` (and umlauts) replaced by `_`.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned.to_string()
    }
}

pub async fn upload<S: FileStore + ?Sized>(
    store: &S,
    file_name: Option<&str>,
    content_type: Option<String>,
    bytes: &[u8],
) -> AppResult<UploadResponse> {
    let file_name = file_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::bad_request("No file provided"))?;

    let stored = store.save(file_name, bytes).await?;
    tracing::info!(stored = %stored.stored_name, size = stored.size, "File uploaded");
    Ok(UploadResponse {
        file_url: format!("{UPLOADS_ROUTE}/{}", stored.stored_name),
        file_name: file_name.to_string(),
        content_type,
        size: stored.size,
    })
}
