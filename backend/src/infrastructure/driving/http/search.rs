use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use shared::protocol::{SearchHit, SearchParams};

use crate::application::search;
use crate::error::AppResult;
use crate::infrastructure::AppState;

pub fn search_routes() -> Router<AppState> {
    Router::new().route("/api/search", get(global_search))
}

async fn global_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<SearchHit>>> {
    Ok(Json(search::execute(state.documents.as_ref(), &params).await?))
}
