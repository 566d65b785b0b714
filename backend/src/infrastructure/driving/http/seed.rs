use axum::{extract::State, response::Json, routing::post, Router};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use crate::application::seed::{self, SeedSummary};
use crate::error::AppResult;
use crate::infrastructure::AppState;
use shared::protocol::SuccessResponse;

#[derive(Serialize)]
pub struct FullDemoResponse {
    pub success: bool,
    pub message: String,
    pub summary: SeedSummary,
}

pub fn seed_routes() -> Router<AppState> {
    Router::new()
        .route("/api/seed-demo", post(seed_demo))
        .route("/api/seed-full-demo", post(seed_full_demo))
}

async fn seed_demo(State(state): State<AppState>) -> AppResult<Json<SuccessResponse>> {
    seed::demo::execute(state.documents.as_ref(), &state.passwords).await?;
    Ok(Json(SuccessResponse::with_message("Demo data seeded")))
}

async fn seed_full_demo(State(state): State<AppState>) -> AppResult<Json<FullDemoResponse>> {
    let mut rng = StdRng::from_entropy();
    let summary = seed::full_demo::execute(state.documents.as_ref(), &state.passwords, &mut rng).await?;
    Ok(Json(FullDemoResponse {
        success: true,
        message: "Umfangreiche Demo-Daten erstellt".to_string(),
        summary,
    }))
}
