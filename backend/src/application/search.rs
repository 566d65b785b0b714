// Cross-collection text search

use serde_json::Value;
use shared::collections::{CONTACTS, DOCUMENTS, FRACTION_MEETINGS, MEETINGS, MOTIONS, TASKS};
use shared::protocol::{SearchHit, SearchParams};
use shared::Collection;

use crate::application::ports::{DocumentQuery, DocumentRepository, Filter, SortSpec};
use crate::domain::Document;
use crate::error::{AppError, AppResult};

pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_HITS_PER_COLLECTION: usize = 10;
/// Documents scanned per collection before matching.
const SCAN_LIMIT: usize = 500;

struct SearchTarget {
    collection: Collection,
    fields: &'static [&'static str],
    subtitle: &'static str,
}

const TARGETS: [SearchTarget; 6] = [
    SearchTarget {
        collection: CONTACTS,
        fields: &["first_name", "last_name", "email", "phone", "organization_name"],
        subtitle: "email",
    },
    SearchTarget {
        collection: MOTIONS,
        fields: &["title", "content", "category"],
        subtitle: "status",
    },
    SearchTarget {
        collection: MEETINGS,
        fields: &["title", "description", "location"],
        subtitle: "location",
    },
    SearchTarget {
        collection: TASKS,
        fields: &["title", "description"],
        subtitle: "status",
    },
    SearchTarget {
        collection: DOCUMENTS,
        fields: &["title", "content", "category"],
        subtitle: "category",
    },
    SearchTarget {
        collection: FRACTION_MEETINGS,
        fields: &["title", "agenda", "location"],
        subtitle: "date",
    },
];

impl SearchTarget {
    fn matches(&self, document: &Document, needle: &str) -> bool {
        self.fields.iter().any(|field| match document.get(field) {
            Some(Value::String(s)) => s.to_lowercase().contains(needle),
            _ => false,
        })
    }

    fn title(&self, document: &Document) -> String {
        if self.collection == CONTACTS {
            let name = [document.get_str("first_name"), document.get_str("last_name")]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            if !name.is_empty() {
                return name;
            }
        }
        document
            .get_str("title")
            .or_else(|| document.get_str("email"))
            .unwrap_or("(ohne Titel)")
            .to_string()
    }

    fn hit(&self, document: &Document) -> SearchHit {
        SearchHit {
            collection: self.collection.name.to_string(),
            entity: self.collection.entity.to_string(),
            id: document.id.to_string(),
            title: self.title(document),
            subtitle: document.get_str(self.subtitle).map(str::to_string),
        }
    }
}

/// Case-insensitive substring search over the organization's records.
pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    params: &SearchParams,
) -> AppResult<Vec<SearchHit>> {
    let needle = params.q.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_LEN {
        return Ok(Vec::new());
    }
    let organization = params
        .organization
        .as_deref()
        .filter(|o| !o.is_empty())
        .ok_or_else(|| AppError::bad_request("organization is required"))?;

    let query = DocumentQuery {
        filter: Filter::new().eq("organization", organization),
        sort: Some(SortSpec::parse("-created_date")),
        limit: Some(SCAN_LIMIT),
        ..DocumentQuery::default()
    };

    let mut hits = Vec::new();
    for target in &TARGETS {
        let documents = repo.find(target.collection.name, &query).await?;
        hits.extend(
            documents
                .iter()
                .filter(|doc| target.matches(doc, &needle))
                .take(MAX_HITS_PER_COLLECTION)
                .map(|doc| target.hit(doc)),
        );
    }
    tracing::debug!(q = %needle, hits = hits.len(), "Search finished");
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::into_fields;
    use crate::application::ports::document_repository::MockDocumentRepository;
    use serde_json::json;

    fn params(q: &str) -> SearchParams {
        SearchParams {
            q: q.into(),
            organization: Some("demo-org".into()),
        }
    }

    #[tokio::test]
    async fn short_query_returns_nothing() {
        let repo = MockDocumentRepository::new();
        assert!(execute(&repo, &params("a")).await.unwrap().is_empty());
        assert!(execute(&repo, &params("  ")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn matches_case_insensitively_and_caps_hits() {
        let mut repo = MockDocumentRepository::new();
        repo.expect_find().returning(|collection, _| {
            Ok(match collection {
                "contacts" => vec![Document::new(into_fields(json!({
                    "first_name": "Anna",
                    "last_name": "Schmidt",
                    "email": "anna@example.com"
                })))],
                "motions" => (0..15)
                    .map(|i| {
                        Document::new(into_fields(json!({
                            "title": format!("Antrag Radweg {i}"),
                            "status": "eingereicht"
                        })))
                    })
                    .collect(),
                _ => vec![],
            })
        });

        let hits = execute(&repo, &params("SCHMIDT")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Anna Schmidt");
        assert_eq!(hits[0].subtitle.as_deref(), Some("anna@example.com"));

        let hits = execute(&repo, &params("radweg")).await.unwrap();
        assert_eq!(hits.len(), MAX_HITS_PER_COLLECTION);
        assert!(hits.iter().all(|h| h.entity == "Motion"));
    }

    #[tokio::test]
    async fn organization_is_required() {
        let repo = MockDocumentRepository::new();
        let err = execute(
            &repo,
            &SearchParams {
                q: "antrag".into(),
                organization: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
