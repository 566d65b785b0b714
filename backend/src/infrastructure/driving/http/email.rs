use axum::{extract::State, response::Json, routing::post, Router};
use shared::protocol::{SendEmailRequest, SendEmailResponse, SmtpTestRequest, SuccessResponse};

use crate::application::email::commands;
use crate::error::AppResult;
use crate::infrastructure::AppState;

pub fn email_routes() -> Router<AppState> {
    Router::new()
        .route("/api/email/send-invitation", post(send_invitation))
        .route("/api/smtp/test", post(test_smtp))
}

async fn send_invitation(
    State(state): State<AppState>,
    Json(payload): Json<SendEmailRequest>,
) -> AppResult<Json<SendEmailResponse>> {
    let response =
        commands::send_invitation::execute(state.documents.as_ref(), state.mailer.as_ref(), payload)
            .await?;
    Ok(Json(response))
}

async fn test_smtp(
    State(state): State<AppState>,
    Json(payload): Json<SmtpTestRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let message =
        commands::test_smtp::execute(state.documents.as_ref(), state.mailer.as_ref(), payload).await?;
    Ok(Json(SuccessResponse::with_message(message)))
}
