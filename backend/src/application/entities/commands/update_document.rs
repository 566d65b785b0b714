use serde_json::Value;
use shared::Collection;

use crate::application::entities::commands::get_document::{not_found, parse_id};
use crate::application::ports::DocumentRepository;
use crate::application::timestamp;
use crate::domain::entities::document::strip_reserved;
use crate::domain::Document;
use crate::error::{AppError, AppResult};

pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    collection: Collection,
    id: &str,
    patch: Value,
) -> AppResult<Document> {
    let id = parse_id(collection, id)?;
    let Value::Object(mut patch) = patch else {
        return Err(AppError::bad_request("Request body must be a JSON object"));
    };
    strip_reserved(&mut patch);
    patch.remove("created_date");
    patch.insert("updated_date".into(), Value::String(timestamp()));

    repo.merge(collection.name, &id, &patch)
        .await?
        .ok_or_else(|| not_found(collection))
}
