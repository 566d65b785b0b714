// Application layer - use cases organized by feature area
// Orchestrates domain logic through the driven ports

pub mod ai;
pub mod auth;
pub mod documents;
pub mod email;
pub mod entities;
pub mod files;
pub mod members;
pub mod ports;
pub mod search;
pub mod seed;

use serde_json::{Map, Value};

/// RFC 3339 UTC timestamp as stored in `created_date` / `updated_date`.
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// The object behind a `json!` literal; anything else becomes an empty map.
pub fn into_fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}
