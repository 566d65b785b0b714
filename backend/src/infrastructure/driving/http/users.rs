use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, put},
    Router,
};
use serde_json::Value;
use shared::protocol::{ListParams, UpdateOrgRoleRequest};

use super::middleware::AuthenticatedUser;
use crate::application::members::commands;
use crate::error::AppResult;
use crate::infrastructure::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/:id", get(get_user).put(update_user))
        .route("/api/users/:id/role", put(update_org_role))
        .route("/api/organizations/:id/members", get(list_members))
}

async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Value>>> {
    let users = commands::list_users::execute(state.documents.as_ref(), &params).await?;
    Ok(Json(users))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let user = commands::get_user::execute(state.documents.as_ref(), &id).await?;
    Ok(Json(user.public_view()))
}

async fn update_user(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> AppResult<Json<Value>> {
    let user = commands::update_user::execute(
        state.documents.as_ref(),
        &state.passwords,
        &actor,
        &id,
        patch,
    )
    .await?;
    Ok(Json(user.public_view()))
}

async fn update_org_role(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrgRoleRequest>,
) -> AppResult<Json<Value>> {
    let user =
        commands::update_org_role::execute(state.documents.as_ref(), &actor, &id, &payload.org_role)
            .await?;
    Ok(Json(user.public_view()))
}

/// The path segment shares the `:id` name with `/api/organizations/:id`;
/// here it carries the organization slug.
async fn list_members(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Path(organization): Path<String>,
) -> AppResult<Json<Vec<Value>>> {
    let members = commands::list_members::execute(state.documents.as_ref(), &actor, &organization).await?;
    Ok(Json(members))
}
