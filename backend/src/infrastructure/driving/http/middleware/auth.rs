use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::application::auth;
use crate::domain::User;
use crate::error::AppError;
use crate::infrastructure::AppState;

const TOKEN_QUERY_PARAM: &str = "authorization";

/// Token from `Authorization: Bearer <t>`, a bare `Authorization: <t>`, or
/// the `?authorization=<t>` query parameter, in that order.
pub fn token_from_parts(parts: &Parts) -> Option<String> {
    let from_header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let from_query = || {
        parts.uri.query().and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == TOKEN_QUERY_PARAM)
                .map(|(_, value)| value.into_owned())
        })
    };

    from_header
        .or_else(from_query)
        .map(|raw| {
            let raw = raw.trim();
            raw.strip_prefix("Bearer ")
                .or_else(|| raw.strip_prefix("bearer "))
                .unwrap_or(raw)
                .trim()
                .to_string()
        })
        .filter(|token| !token.is_empty())
}

/// Raw presented token, possibly absent.
#[derive(Debug, Clone)]
pub struct BearerToken(pub Option<String>);

/// Caller with a valid session; rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

/// Caller identity when a valid token is presented.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<User>);

#[async_trait]
impl FromRequestParts<AppState> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(Self(token_from_parts(parts)))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = token_from_parts(parts) else {
            return Ok(Self(None));
        };
        let user = auth::authenticate(
            state.documents.as_ref(),
            state.sessions.as_ref(),
            &state.tokens,
            &token,
        )
        .await?;
        Ok(Self(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let MaybeUser(user) = MaybeUser::from_request_parts(parts, state).await?;
        user.map(Self).ok_or_else(AppError::not_authenticated)
    }
}
