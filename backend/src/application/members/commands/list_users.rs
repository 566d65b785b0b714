use serde_json::Value;
use shared::collections::USERS;
use shared::protocol::ListParams;

use crate::application::entities::commands::list_documents;
use crate::application::ports::DocumentRepository;
use crate::domain::entities::user::public_json;
use crate::error::AppResult;

pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    params: &ListParams,
) -> AppResult<Vec<Value>> {
    let users = list_documents::execute(repo, USERS, params).await?;
    Ok(users.iter().map(public_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::into_fields;
    use crate::application::ports::document_repository::MockDocumentRepository;
    use crate::domain::Document;
    use serde_json::json;

    #[tokio::test]
    async fn never_exposes_password_hashes() {
        let mut repo = MockDocumentRepository::new();
        repo.expect_find().returning(|_, _| {
            Ok(vec![Document::new(into_fields(json!({
                "email": "demo@kommunalcrm.de",
                "password_hash": "$2b$12$abc",
                "password": "legacy"
            })))])
        });
        let users = execute(&repo, &ListParams::default()).await.unwrap();
        assert_eq!(users.len(), 1);
        assert!(users[0].get("password_hash").is_none());
        assert!(users[0].get("password").is_none());
        assert_eq!(users[0]["email"], "demo@kommunalcrm.de");
    }
}
