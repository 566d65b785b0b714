use shared::Collection;

use crate::application::ports::DocumentRepository;
use crate::domain::{Document, DocumentId};
use crate::error::{AppError, AppResult};

pub fn not_found(collection: Collection) -> AppError {
    AppError::not_found(format!("{} not found", collection.entity))
}

/// Unparsable identifiers are reported the same way as unknown ones.
pub fn parse_id(collection: Collection, raw: &str) -> AppResult<DocumentId> {
    raw.parse().map_err(|_| not_found(collection))
}

pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    collection: Collection,
    id: &str,
) -> AppResult<Document> {
    let id = parse_id(collection, id)?;
    repo.find_by_id(collection.name, &id)
        .await?
        .ok_or_else(|| not_found(collection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::document_repository::MockDocumentRepository;
    use shared::collections::CONTACTS;

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let mut repo = MockDocumentRepository::new();
        repo.expect_find_by_id().returning(|_, _| Ok(None));
        let err = execute(&repo, CONTACTS, &DocumentId::new().to_string())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Contact not found");
    }

    #[tokio::test]
    async fn malformed_id_is_not_found() {
        let repo = MockDocumentRepository::new();
        let err = execute(&repo, CONTACTS, "xyz").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
