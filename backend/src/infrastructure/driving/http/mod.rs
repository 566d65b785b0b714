pub mod ai;
pub mod auth;
pub mod email;
pub mod entities;
pub mod files;
pub mod middleware;
pub mod pdf;
pub mod search;
pub mod seed;
pub mod users;

use axum::{http::HeaderValue, response::Json, routing::get, Router};
use shared::protocol::HealthResponse;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::application::files::UPLOADS_ROUTE;
use crate::application::timestamp;
use crate::infrastructure::AppState;

pub use ai::ai_routes;
pub use auth::auth_routes;
pub use email::email_routes;
pub use entities::entity_routes;
pub use files::files_routes;
pub use pdf::pdf_routes;
pub use search::search_routes;
pub use seed::seed_routes;
pub use users::user_routes;

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);
    let uploads = ServeDir::new(&state.uploads_dir);

    Router::new()
        .route("/api/health", get(health))
        .merge(auth_routes())
        .merge(user_routes())
        .merge(entity_routes())
        .merge(search_routes())
        .merge(email_routes())
        .merge(ai_routes())
        .merge(pdf_routes())
        .merge(files_routes())
        .merge(seed_routes())
        .nest_service(UPLOADS_ROUTE, uploads)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Any origin when none are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if allowed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(allowed)
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: timestamp(),
    })
}
