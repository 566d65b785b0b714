use shared::Collection;

use crate::application::entities::commands::get_document::{not_found, parse_id};
use crate::application::ports::DocumentRepository;
use crate::error::AppResult;

pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    collection: Collection,
    id: &str,
) -> AppResult<()> {
    let id = parse_id(collection, id)?;
    if repo.delete(collection.name, &id).await? {
        tracing::debug!(collection = %collection, id = %id, "Document deleted");
        Ok(())
    } else {
        Err(not_found(collection))
    }
}
