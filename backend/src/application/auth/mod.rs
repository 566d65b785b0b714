// Accounts, sign-in and token sessions

pub mod commands;
pub mod passwords;
pub mod tokens;

pub use passwords::PasswordHasher;
pub use tokens::{Claims, TokenIssuer};

use shared::collections::USERS;

use crate::application::ports::{DocumentRepository, SessionRepository};
use crate::domain::{DocumentId, Session, User};
use crate::error::AppResult;

/// Token plus the account it was issued for.
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub token: String,
    pub user: User,
}

/// Opens a new session for `user` and signs a token bound to it.
pub async fn sign_in(
    sessions: &dyn SessionRepository,
    tokens: &TokenIssuer,
    user: User,
) -> AppResult<SignedIn> {
    let session = Session::new(*user.id(), tokens.ttl());
    sessions.save(&session).await?;
    let token = tokens.issue(&user, &session)?;
    tracing::info!(user_id = %user.id(), session_id = %session.id, "Session opened");
    Ok(SignedIn { token, user })
}

/// Resolves a bearer token to its account. Any failure (bad signature,
/// expired or revoked session, deleted account) yields `None`.
pub async fn authenticate(
    documents: &dyn DocumentRepository,
    sessions: &dyn SessionRepository,
    tokens: &TokenIssuer,
    token: &str,
) -> AppResult<Option<User>> {
    let Some(claims) = tokens.verify(token) else {
        return Ok(None);
    };
    let (Ok(session_id), Ok(user_id)) = (
        claims.jti.parse::<uuid::Uuid>(),
        claims.sub.parse::<DocumentId>(),
    ) else {
        return Ok(None);
    };
    match sessions.find_active(&session_id).await? {
        Some(session) if session.user_id == user_id => {}
        _ => return Ok(None),
    }
    Ok(documents
        .find_by_id(USERS.name, &user_id)
        .await?
        .map(User::from_document))
}
