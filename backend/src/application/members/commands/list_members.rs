use serde_json::Value;
use shared::collections::USERS;

use crate::application::ports::{DocumentQuery, DocumentRepository, Filter, SortSpec};
use crate::domain::entities::user::public_json;
use crate::domain::{User, UserRole};
use crate::error::{AppError, AppResult};

/// Members of `organization`, oldest account first. Only visible to the
/// organization itself and to support staff.
pub async fn execute<R: DocumentRepository + ?Sized>(
    repo: &R,
    actor: &User,
    organization: &str,
) -> AppResult<Vec<Value>> {
    if actor.organization() != Some(organization) && actor.role() != UserRole::Support {
        return Err(AppError::forbidden("Not a member of this organization"));
    }
    let query = DocumentQuery {
        filter: Filter::new().eq("organization", organization),
        sort: Some(SortSpec::parse("created_date")),
        ..DocumentQuery::default()
    };
    let members = repo.find(USERS.name, &query).await?;
    Ok(members.iter().map(public_json).collect())
}
