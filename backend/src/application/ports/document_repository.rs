// Driven port - Document repository (output port)

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{Document, DocumentId};
use crate::error::AppResult;

/// Conjunction of top-level equality conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Vec<(String, Value)>);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.0
            .iter()
            .all(|(key, expected)| document.get(key) == Some(expected))
    }

    /// The filter as a JSON object, suitable for a containment (`@>`) test.
    pub fn to_json_object(&self) -> Value {
        let map: Map<String, Value> = self.0.iter().cloned().collect();
        Value::Object(map)
    }
}

/// Sort order over one top-level field. Values of different JSON types
/// order like Postgres `jsonb`: null < string < number < bool < array <
/// object. Missing fields sort as null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

impl SortSpec {
    /// `-created_date` sorts descending, `title` ascending. A blank field
    /// falls back to `created_date`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (descending, field) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start_matches('-')),
            None => (false, raw),
        };
        let field = if field.is_empty() { "created_date" } else { field };
        Self {
            field: field.to_string(),
            descending,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentQuery {
    pub id: Option<DocumentId>,
    pub filter: Filter,
    pub sort: Option<SortSpec>,
    pub limit: Option<usize>,
}

impl DocumentQuery {
    pub fn filtered(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }
}

/// Schemaless storage of documents grouped by collection name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn find(&self, collection: &str, query: &DocumentQuery) -> AppResult<Vec<Document>>;
    async fn find_by_id(&self, collection: &str, id: &DocumentId) -> AppResult<Option<Document>>;
    async fn insert(&self, collection: &str, document: &Document) -> AppResult<()>;
    /// Shallow merge; returns the updated document, `None` when absent.
    async fn merge(
        &self,
        collection: &str,
        id: &DocumentId,
        patch: &Map<String, Value>,
    ) -> AppResult<Option<Document>>;
    async fn delete(&self, collection: &str, id: &DocumentId) -> AppResult<bool>;
    async fn delete_matching(&self, collection: &str, filter: &Filter) -> AppResult<u64>;
    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64>;
    /// First match in storage order.
    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn parses_sort_direction() {
        assert_eq!(
            SortSpec::parse("-created_date"),
            SortSpec { field: "created_date".into(), descending: true }
        );
        assert_eq!(
            SortSpec::parse("title"),
            SortSpec { field: "title".into(), descending: false }
        );
        assert_eq!(SortSpec::parse("-").field, "created_date");
    }

    #[test]
    fn filter_matches_all_conditions() {
        let Value::Object(fields) = json!({ "organization": "demo-org", "type": "fraction" }) else {
            unreachable!()
        };
        let doc = Document::new(fields);
        assert!(Filter::new().eq("organization", "demo-org").matches(&doc));
        assert!(!Filter::new()
            .eq("organization", "demo-org")
            .eq("type", "verband")
            .matches(&doc));
        assert!(Filter::new().matches(&doc));
    }

    #[test]
    fn filter_renders_containment_object() {
        let filter = Filter::new().eq("organization", "demo-org").eq("active", true);
        assert_eq!(
            filter.to_json_object(),
            json!({ "organization": "demo-org", "active": true })
        );
    }

    proptest! {
        #[test]
        fn sort_parse_round_trips(field in "[a-z_]{1,20}", descending: bool) {
            let raw = if descending { format!("-{field}") } else { field.clone() };
            let spec = SortSpec::parse(&raw);
            prop_assert_eq!(spec.field, field);
            prop_assert_eq!(spec.descending, descending);
        }
    }
}
