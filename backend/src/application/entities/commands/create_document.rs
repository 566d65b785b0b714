use serde_json::Value;
use shared::Collection;

use crate::application::ports::DocumentRepository;
use crate::application::timestamp;
use crate::domain::entities::document::strip_reserved;
use crate::domain::Document;
use crate::error::{AppError, AppResult};

pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    collection: Collection,
    body: Value,
) -> AppResult<Document> {
    let Value::Object(mut fields) = body else {
        return Err(AppError::bad_request("Request body must be a JSON object"));
    };
    strip_reserved(&mut fields);

    let now = timestamp();
    fields.insert("created_date".into(), Value::String(now.clone()));
    fields.insert("updated_date".into(), Value::String(now));

    let document = Document::new(fields);
    repo.insert(collection.name, &document).await?;
    tracing::debug!(collection = %collection, id = %document.id, "Document created");
    Ok(document)
}
