use shared::protocol::ListParams;
use shared::Collection;

use crate::application::entities::MAX_LIST_LIMIT;
use crate::application::ports::{DocumentQuery, DocumentRepository, Filter, SortSpec};
use crate::domain::{Document, DocumentId};
use crate::error::AppResult;

/// Translates list parameters into a repository query. `None` means the
/// query can match nothing (an `id` that is not a valid identifier).
pub fn query_from_params(params: &ListParams) -> Option<DocumentQuery> {
    let id = match params.id.as_deref() {
        Some(raw) => Some(raw.parse::<DocumentId>().ok()?),
        None => None,
    };

    let mut filter = Filter::new();
    if let Some(organization) = &params.organization {
        filter = filter.eq("organization", organization.as_str());
    }
    if let Some(name) = &params.name {
        filter = filter.eq("name", name.as_str());
    }

    Some(DocumentQuery {
        id,
        filter,
        sort: Some(SortSpec::parse(params.sort())),
        limit: Some(params.limit().clamp(1, MAX_LIST_LIMIT)),
    })
}

pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    collection: Collection,
    params: &ListParams,
) -> AppResult<Vec<Document>> {
    let Some(query) = query_from_params(params) else {
        return Ok(Vec::new());
    };
    repo.find(collection.name, &query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::document_repository::MockDocumentRepository;
    use shared::collections::MOTIONS;

    #[test]
    fn clamps_limit_and_defaults_sort() {
        let params = ListParams {
            limit: Some(50_000),
            ..ListParams::default()
        };
        let query = query_from_params(&params).unwrap();
        assert_eq!(query.limit, Some(MAX_LIST_LIMIT));
        let sort = query.sort.unwrap();
        assert_eq!(sort.field, "created_date");
        assert!(sort.descending);

        let params = ListParams {
            limit: Some(0),
            ..ListParams::default()
        };
        assert_eq!(query_from_params(&params).unwrap().limit, Some(1));
    }

    #[test]
    fn builds_equality_filter() {
        let params = ListParams {
            organization: Some("demo-org".into()),
            name: Some("Fraktion".into()),
            ..ListParams::default()
        };
        let query = query_from_params(&params).unwrap();
        assert_eq!(
            query.filter,
            Filter::new().eq("organization", "demo-org").eq("name", "Fraktion")
        );
    }

    #[tokio::test]
    async fn malformed_id_yields_empty_list_without_query() {
        let repo = MockDocumentRepository::new();
        let params = ListParams {
            id: Some("not-an-id".into()),
            ..ListParams::default()
        };
        let docs = execute(&repo, MOTIONS, &params).await.unwrap();
        assert!(docs.is_empty());
    }

    #[tokio::test]
    async fn passes_query_to_repository() {
        let mut repo = MockDocumentRepository::new();
        repo.expect_find()
            .withf(|collection, query| {
                collection == "motions" && query.limit == Some(100) && query.id.is_none()
            })
            .times(1)
            .returning(|_, _| Ok(vec![]));
        execute(&repo, MOTIONS, &ListParams::default()).await.unwrap();
    }
}
