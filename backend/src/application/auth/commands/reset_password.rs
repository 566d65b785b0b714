use serde_json::{Map, Value};
use shared::collections::USERS;
use shared::protocol::ResetPasswordRequest;

use crate::application::auth::PasswordHasher;
use crate::application::ports::{DocumentRepository, Filter, SessionRepository};
use crate::application::timestamp;
use crate::domain::entities::user::PASSWORD_HASH_FIELD;
use crate::domain::{Email, User};
use crate::error::{AppError, AppResult};

/// An organization admin sets a new password for one of its members.
/// All sessions of the target account are revoked.
pub async fn execute(
    documents: &dyn DocumentRepository,
    sessions: &dyn SessionRepository,
    passwords: &PasswordHasher,
    actor: &User,
    request: ResetPasswordRequest,
) -> AppResult<()> {
    if request.new_password.is_empty() {
        return Err(AppError::bad_request("Password must not be empty"));
    }
    let email = Email::new(request.email).map_err(|_| AppError::not_found("User not found"))?;
    let target = documents
        .find_one(USERS.name, &Filter::new().eq("email", email.as_str()))
        .await?
        .map(User::from_document)
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if !actor.is_admin_of(target.organization()) {
        return Err(AppError::forbidden(
            "Only organization admins can reset passwords",
        ));
    }

    let mut patch = Map::new();
    patch.insert(
        PASSWORD_HASH_FIELD.into(),
        Value::String(passwords.hash(&request.new_password).await?),
    );
    patch.insert("updated_date".into(), Value::String(timestamp()));
    documents.merge(USERS.name, target.id(), &patch).await?;

    let revoked = sessions.revoke_all_for_user(target.id()).await?;
    tracing::info!(
        actor = %actor.id(),
        target = %target.id(),
        revoked_sessions = revoked,
        "Password reset"
    );
    Ok(())
}
