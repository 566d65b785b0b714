use serde_json::Value;

use crate::domain::entities::Document;
use crate::domain::value_objects::*;

/// Field holding the bcrypt hash. Never leaves the server.
pub const PASSWORD_HASH_FIELD: &str = "password_hash";
/// Older records may carry the credential under this key.
const LEGACY_PASSWORD_FIELD: &str = "password";

/// Typed view over a document of the `users` collection.
#[derive(Debug, Clone)]
pub struct User {
    document: Document,
}

impl User {
    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn id(&self) -> &DocumentId {
        &self.document.id
    }

    pub fn email(&self) -> &str {
        self.document.get_str("email").unwrap_or_default()
    }

    pub fn full_name(&self) -> Option<&str> {
        self.document.get_str("full_name")
    }

    pub fn password_hash(&self) -> Option<&str> {
        self.document.get_str(PASSWORD_HASH_FIELD)
    }

    pub fn organization(&self) -> Option<&str> {
        self.document.get_str("organization")
    }

    pub fn role(&self) -> UserRole {
        self.document
            .get_str("role")
            .map(UserRole::parse_lenient)
            .unwrap_or(UserRole::Member)
    }

    pub fn is_admin_of(&self, organization: Option<&str>) -> bool {
        self.role() == UserRole::Admin
            && organization.is_some()
            && self.organization() == organization
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// JSON sent to clients: the document without credentials.
    pub fn public_view(&self) -> Value {
        public_json(&self.document)
    }
}

pub fn public_json(document: &Document) -> Value {
    let mut value = document.to_json();
    if let Value::Object(map) = &mut value {
        map.remove(PASSWORD_HASH_FIELD);
        map.remove(LEGACY_PASSWORD_FIELD);
    }
    value
}
