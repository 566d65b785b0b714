use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use shared::collections::ALL;
use shared::protocol::{ListParams, SuccessResponse};
use shared::Collection;

use super::middleware::MaybeUser;
use crate::application::entities::{authorize_write, commands};
use crate::domain::Document;
use crate::error::AppResult;
use crate::infrastructure::AppState;

/// `/api/<collection>` and `/api/<collection>/:id` for every generic
/// collection. Paths for unknown names are left to the router's 404.
pub fn entity_routes() -> Router<AppState> {
    ALL.iter()
        .copied()
        .filter(Collection::is_generic)
        .fold(Router::new(), |router, collection| {
            router
                .route(
                    &format!("/api/{}", collection.name),
                    get(move |state: State<AppState>, query: Query<ListParams>| {
                        list(collection, state, query)
                    })
                    .post(
                        move |state: State<AppState>, user: MaybeUser, body: Json<Value>| {
                            create(collection, state, user, body)
                        },
                    ),
                )
                .route(
                    &format!("/api/{}/:id", collection.name),
                    get(move |state: State<AppState>, id: Path<String>| {
                        fetch(collection, state, id)
                    })
                    .put(
                        move |state: State<AppState>,
                              user: MaybeUser,
                              id: Path<String>,
                              body: Json<Value>| {
                            update(collection, state, user, id, body)
                        },
                    )
                    .delete(
                        move |state: State<AppState>, user: MaybeUser, id: Path<String>| {
                            remove(collection, state, user, id)
                        },
                    ),
                )
        })
}

async fn list(
    collection: Collection,
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Document>>> {
    let documents = commands::list_documents::execute(state.documents.as_ref(), collection, &params).await?;
    Ok(Json(documents))
}

async fn fetch(
    collection: Collection,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Document>> {
    let document = commands::get_document::execute(state.documents.as_ref(), collection, &id).await?;
    Ok(Json(document))
}

async fn create(
    collection: Collection,
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(body): Json<Value>,
) -> AppResult<Json<Document>> {
    authorize_write(user.as_ref())?;
    let document = commands::create_document::execute(state.documents.as_ref(), collection, body).await?;
    Ok(Json(document))
}

async fn update(
    collection: Collection,
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> AppResult<Json<Document>> {
    authorize_write(user.as_ref())?;
    let document =
        commands::update_document::execute(state.documents.as_ref(), collection, &id, patch).await?;
    Ok(Json(document))
}

async fn remove(
    collection: Collection,
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    authorize_write(user.as_ref())?;
    commands::delete_document::execute(state.documents.as_ref(), collection, &id).await?;
    Ok(Json(SuccessResponse::ok()))
}
