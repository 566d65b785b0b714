use serde_json::Value;
use shared::collections::USERS;

use crate::application::auth::commands::update_profile::sanitize_patch;
use crate::application::auth::PasswordHasher;
use crate::application::members::commands::get_user::{self, user_not_found};
use crate::application::ports::DocumentRepository;
use crate::domain::entities::user::PASSWORD_HASH_FIELD;
use crate::domain::{User, UserRole};
use crate::error::{AppError, AppResult};

const PROTECTED_KEYS: [&str; 3] = ["email", "organization", PASSWORD_HASH_FIELD];

/// Admin edit of another account in the same organization. Unlike a
/// profile update the role may change; it is normalized to a known role.
pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    passwords: &PasswordHasher,
    actor: &User,
    id: &str,
    patch: Value,
) -> AppResult<User> {
    let target = get_user::execute(repo, id).await?;
    if !actor.is_admin_of(target.organization()) {
        return Err(AppError::forbidden("Only organization admins can edit users"));
    }

    let mut patch = sanitize_patch(passwords, patch, &PROTECTED_KEYS).await?;
    if let Some(role) = patch.get("role") {
        let role = role.as_str().map(UserRole::parse_lenient).unwrap_or(UserRole::Member);
        patch.insert("role".into(), Value::String(role.as_str().into()));
    }

    let updated = repo
        .merge(USERS.name, target.id(), &patch)
        .await?
        .map(User::from_document)
        .ok_or_else(user_not_found)?;
    tracing::info!(actor = %actor.id(), target = %updated.id(), "User updated");
    Ok(updated)
}
