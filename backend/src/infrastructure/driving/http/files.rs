use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    response::Json,
    routing::post,
    Router,
};
use shared::protocol::UploadResponse;

use crate::application::files;
use crate::error::{AppError, AppResult};
use crate::infrastructure::AppState;

const FILE_FIELD: &str = "file";
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn files_routes() -> Router<AppState> {
    Router::new().route(
        "/api/files/upload",
        post(upload_file).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
    )
}

async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        let response =
            files::upload(state.files.as_ref(), file_name.as_deref(), content_type, &bytes).await?;
        return Ok(Json(response));
    }
    Err(AppError::bad_request("No file provided"))
}
