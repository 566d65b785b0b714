use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::application::ports::{DocumentQuery, DocumentRepository, Filter};
use crate::domain::{Document, DocumentId};
use crate::error::AppResult;

/// Process-local store used for development and tests. Collections keep
/// insertion order.
#[derive(Default)]
pub struct InMemoryDocumentRepository {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Same cross-type order as Postgres `jsonb`: null < string < number < bool
/// < array < object.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::String(_) => 1,
        Value::Number(_) => 2,
        Value::Bool(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// Total order over optional JSON values; absent sorts like null.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.unwrap_or(&Value::Null);
    let b = b.unwrap_or(&Value::Null);
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let (x, y) = (x.as_f64().unwrap_or_default(), y.as_f64().unwrap_or_default());
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn find(&self, collection: &str, query: &DocumentQuery) -> AppResult<Vec<Document>> {
        let guard = self.collections.read().await;
        let Some(documents) = guard.get(collection) else {
            return Ok(Vec::new());
        };

        let mut matches: Vec<Document> = documents
            .iter()
            .filter(|doc| query.id.map_or(true, |id| doc.id == id))
            .filter(|doc| query.filter.matches(doc))
            .cloned()
            .collect();

        if let Some(sort) = &query.sort {
            matches.sort_by(|a, b| {
                let ordering = compare_values(a.get(&sort.field), b.get(&sort.field));
                if sort.descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        if let Some(limit) = query.limit {
            matches.truncate(limit);
        }
        Ok(matches)
    }

    async fn find_by_id(&self, collection: &str, id: &DocumentId) -> AppResult<Option<Document>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == *id))
            .cloned())
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    async fn insert(&self, collection: &str, document: &Document) -> AppResult<()> {
        let mut guard = self.collections.write().await;
        guard
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());
        Ok(())
    }

    async fn merge(
        &self,
        collection: &str,
        id: &DocumentId,
        patch: &Map<String, Value>,
    ) -> AppResult<Option<Document>> {
        let mut guard = self.collections.write().await;
        let Some(document) = guard
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == *id))
        else {
            return Ok(None);
        };
        document.merge(patch);
        Ok(Some(document.clone()))
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> AppResult<bool> {
        let mut guard = self.collections.write().await;
        let Some(documents) = guard.get_mut(collection) else {
            return Ok(false);
        };
        let before = documents.len();
        documents.retain(|doc| doc.id != *id);
        Ok(documents.len() < before)
    }

    async fn delete_matching(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let mut guard = self.collections.write().await;
        let Some(documents) = guard.get_mut(collection) else {
            return Ok(0);
        };
        let before = documents.len();
        documents.retain(|doc| !filter.matches(doc));
        Ok((before - documents.len()) as u64)
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|docs| docs.iter().filter(|doc| filter.matches(doc)).count() as u64)
            .unwrap_or(0))
    }
}
