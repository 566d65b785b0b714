use serde_json::{Map, Value};
use shared::collections::USERS;

use crate::application::auth::PasswordHasher;
use crate::application::ports::DocumentRepository;
use crate::application::timestamp;
use crate::domain::entities::document::strip_reserved;
use crate::domain::entities::user::PASSWORD_HASH_FIELD;
use crate::domain::User;
use crate::error::{AppError, AppResult};

/// Keys a user may never change on their own record.
const PROTECTED_KEYS: [&str; 4] = ["email", "role", "organization", PASSWORD_HASH_FIELD];

/// Drops protected keys and turns a plain `password` into a fresh hash.
pub async fn sanitize_patch(
    passwords: &PasswordHasher,
    patch: Value,
    protected: &[&str],
) -> AppResult<Map<String, Value>> {
    let Value::Object(mut patch) = patch else {
        return Err(AppError::bad_request("Request body must be a JSON object"));
    };
    strip_reserved(&mut patch);
    for key in protected {
        patch.remove(*key);
    }
    patch.remove("created_date");

    if let Some(password) = patch.remove("password") {
        match password {
            Value::String(p) if !p.is_empty() => {
                let hash = passwords.hash(&p).await?;
                patch.insert(PASSWORD_HASH_FIELD.into(), Value::String(hash));
            }
            _ => return Err(AppError::bad_request("Password must not be empty")),
        }
    }
    patch.insert("updated_date".into(), Value::String(timestamp()));
    Ok(patch)
}

pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    passwords: &PasswordHasher,
    user: &User,
    patch: Value,
) -> AppResult<User> {
    let patch = sanitize_patch(passwords, patch, &PROTECTED_KEYS).await?;
    repo.merge(USERS.name, user.id(), &patch)
        .await?
        .map(User::from_document)
        .ok_or_else(|| AppError::not_found("User not found"))
}
