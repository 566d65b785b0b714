use axum::{extract::State, response::Json, routing::{get, post}, Router};
use serde_json::Value;
use shared::protocol::{AuthResponse, LoginRequest, RegisterRequest, ResetPasswordRequest, SuccessResponse};

use super::middleware::{AuthenticatedUser, BearerToken};
use crate::application::auth::{self, commands};
use crate::error::AppResult;
use crate::infrastructure::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/me", get(me).put(update_me))
        .route("/api/auth/reset-password", post(reset_password))
}

fn auth_response(signed_in: auth::SignedIn) -> Json<AuthResponse> {
    Json(AuthResponse {
        token: signed_in.token,
        user: signed_in.user.public_view(),
    })
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<AuthResponse>> {
    let signed_in = commands::register::execute(
        state.documents.as_ref(),
        state.sessions.as_ref(),
        &state.tokens,
        &state.passwords,
        payload,
    )
    .await?;
    Ok(auth_response(signed_in))
}

async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let signed_in = commands::login::execute(
        state.documents.as_ref(),
        state.sessions.as_ref(),
        &state.tokens,
        &state.passwords,
        payload,
    )
    .await?;
    Ok(auth_response(signed_in))
}

async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> AppResult<Json<SuccessResponse>> {
    commands::logout::execute(state.sessions.as_ref(), &state.tokens, token.as_deref()).await?;
    Ok(Json(SuccessResponse::ok()))
}

async fn me(AuthenticatedUser(user): AuthenticatedUser) -> Json<Value> {
    Json(user.public_view())
}

async fn update_me(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(patch): Json<Value>,
) -> AppResult<Json<Value>> {
    let updated =
        commands::update_profile::execute(state.documents.as_ref(), &state.passwords, &user, patch)
            .await?;
    Ok(Json(updated.public_view()))
}

async fn reset_password(
    State(state): State<AppState>,
    AuthenticatedUser(actor): AuthenticatedUser,
    Json(payload): Json<ResetPasswordRequest>,
) -> AppResult<Json<SuccessResponse>> {
    commands::reset_password::execute(
        state.documents.as_ref(),
        state.sessions.as_ref(),
        &state.passwords,
        &actor,
        payload,
    )
    .await?;
    Ok(Json(SuccessResponse::with_message("Passwort wurde zurückgesetzt")))
}
