use serde_json::{Map, Value};
use shared::collections::USERS;

use crate::application::members::commands::get_user::{self, user_not_found};
use crate::application::ports::DocumentRepository;
use crate::application::timestamp;
use crate::domain::{OrgRole, User};
use crate::error::{AppError, AppResult};

pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    actor: &User,
    id: &str,
    org_role: &str,
) -> AppResult<User> {
    let org_role: OrgRole = org_role.parse().map_err(AppError::BadRequest)?;
    let target = get_user::execute(repo, id).await?;
    if !actor.is_admin_of(target.organization()) {
        return Err(AppError::forbidden(
            "Only organization admins can assign organization roles",
        ));
    }

    let mut patch = Map::new();
    patch.insert("org_role".into(), Value::String(org_role.as_str().into()));
    patch.insert("updated_date".into(), Value::String(timestamp()));
    let updated = repo
        .merge(USERS.name, target.id(), &patch)
        .await?
        .map(User::from_document)
        .ok_or_else(user_not_found)?;
    tracing::info!(target = %updated.id(), org_role = %org_role, "Organization role assigned");
    Ok(updated)
}
