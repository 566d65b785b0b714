use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::domain::value_objects::DocumentId;

/// Keys owned by the store; client-supplied values are discarded.
pub const RESERVED_KEYS: [&str; 2] = ["id", "_id"];

/// One schemaless record of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self::from_parts(DocumentId::new(), fields)
    }

    pub fn from_parts(id: DocumentId, mut fields: Map<String, Value>) -> Self {
        strip_reserved(&mut fields);
        Self { id, fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Shallow `$set`: top-level keys of `patch` replace existing ones.
    pub fn merge(&mut self, patch: &Map<String, Value>) {
        for (key, value) in patch {
            if !RESERVED_KEYS.contains(&key.as_str()) {
                self.fields.insert(key.clone(), value.clone());
            }
        }
    }

    pub fn to_json(&self) -> Value {
        let mut map = self.fields.clone();
        map.insert("id".to_string(), Value::String(self.id.to_string()));
        Value::Object(map)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry("id", &self.id)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

pub fn strip_reserved(fields: &mut Map<String, Value>) {
    for key in RESERVED_KEYS {
        fields.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn client_ids_are_discarded() {
        let doc = Document::new(object(json!({ "id": "abc", "_id": 1, "title": "Antrag" })));
        assert_ne!(doc.id.to_string(), "abc");
        assert_eq!(doc.fields.len(), 1);
        assert_eq!(doc.get_str("title"), Some("Antrag"));
    }

    #[test]
    fn merge_is_shallow_and_keeps_id() {
        let mut doc = Document::new(object(json!({ "title": "A", "meta": { "a": 1, "b": 2 } })));
        let id = doc.id;
        doc.merge(&object(json!({ "id": "other", "meta": { "a": 3 }, "status": "offen" })));
        assert_eq!(doc.id, id);
        assert_eq!(doc.get("meta"), Some(&json!({ "a": 3 })));
        assert_eq!(doc.get_str("status"), Some("offen"));
        assert_eq!(doc.get_str("title"), Some("A"));
    }

    #[test]
    fn serializes_flat_with_id() {
        let doc = Document::new(object(json!({ "title": "Sitzung" })));
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["id"], json!(doc.id.to_string()));
        assert_eq!(value["title"], "Sitzung");
        assert_eq!(value, doc.to_json());
    }
}
