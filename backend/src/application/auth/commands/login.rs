use shared::collections::USERS;
use shared::protocol::LoginRequest;

use crate::application::auth::{sign_in, PasswordHasher, SignedIn, TokenIssuer};
use crate::application::ports::{DocumentRepository, Filter, SessionRepository};
use crate::domain::{Email, User};
use crate::error::{AppError, AppResult};

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Invalid credentials".into())
}

pub async fn execute(
    documents: &dyn DocumentRepository,
    sessions: &dyn SessionRepository,
    tokens: &TokenIssuer,
    passwords: &PasswordHasher,
    request: LoginRequest,
) -> AppResult<SignedIn> {
    let email = Email::new(request.email).map_err(|_| invalid_credentials())?;
    let user = documents
        .find_one(USERS.name, &Filter::new().eq("email", email.as_str()))
        .await?
        .map(User::from_document)
        .ok_or_else(invalid_credentials)?;

    let Some(hash) = user.password_hash() else {
        tracing::warn!(user_id = %user.id(), "Login for account without password hash");
        return Err(invalid_credentials());
    };
    if !passwords.verify(&request.password, hash).await? {
        tracing::debug!(user_id = %user.id(), "Password mismatch");
        return Err(invalid_credentials());
    }

    sign_in(sessions, tokens, user).await
}
