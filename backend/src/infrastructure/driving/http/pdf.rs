use axum::{response::Json, routing::post, Router};
use serde_json::{Map, Value};
use shared::protocol::RenderedDocument;

use crate::application::documents;
use crate::infrastructure::AppState;

pub fn pdf_routes() -> Router<AppState> {
    Router::new()
        .route("/api/pdf/generate-invitation", post(generate_invitation))
        .route("/api/pdf/generate-protocol", post(generate_protocol))
}

async fn generate_invitation(Json(data): Json<Map<String, Value>>) -> Json<RenderedDocument> {
    let today = chrono::Local::now().date_naive();
    Json(documents::render_invitation(&data, today))
}

async fn generate_protocol(Json(data): Json<Map<String, Value>>) -> Json<RenderedDocument> {
    Json(documents::render_protocol(&data))
}
