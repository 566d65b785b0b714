use axum::{extract::State, response::Json, routing::post, Router};
use shared::protocol::{
    GenerateEmailRequest, GenerateNoticeRequest, GeneratePromptRequest, GenerateTextRequest,
    GeneratedEmail, GeneratedText,
};

use crate::application::ai;
use crate::error::AppResult;
use crate::infrastructure::AppState;

pub fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/api/ai/generate-email", post(generate_email))
        .route("/api/ai/generate-text", post(generate_text))
        .route("/api/ai/generate-notice", post(generate_notice))
        .route("/api/ai/generate-protocol", post(generate_protocol))
        .route("/api/ai/generate-invitation", post(generate_invitation))
}

async fn generate_email(
    State(state): State<AppState>,
    Json(payload): Json<GenerateEmailRequest>,
) -> AppResult<Json<GeneratedEmail>> {
    Ok(Json(ai::generate_email(state.text_generator(), payload).await?))
}

async fn generate_text(
    State(state): State<AppState>,
    Json(payload): Json<GenerateTextRequest>,
) -> AppResult<Json<GeneratedText>> {
    Ok(Json(ai::generate_text(state.text_generator(), payload).await?))
}

async fn generate_notice(
    State(state): State<AppState>,
    Json(payload): Json<GenerateNoticeRequest>,
) -> AppResult<Json<GeneratedText>> {
    Ok(Json(ai::generate_notice(state.text_generator(), payload).await?))
}

async fn generate_protocol(
    State(state): State<AppState>,
    Json(payload): Json<GeneratePromptRequest>,
) -> AppResult<Json<GeneratedText>> {
    Ok(Json(ai::generate_protocol(state.text_generator(), payload).await?))
}

async fn generate_invitation(
    State(state): State<AppState>,
    Json(payload): Json<GeneratePromptRequest>,
) -> AppResult<Json<GeneratedText>> {
    Ok(Json(ai::generate_invitation(state.text_generator(), payload).await?))
}
