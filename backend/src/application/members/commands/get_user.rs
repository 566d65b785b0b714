use shared::collections::USERS;

use crate::application::ports::DocumentRepository;
use crate::domain::{DocumentId, User};
use crate::error::{AppError, AppResult};

pub fn user_not_found() -> AppError {
    AppError::not_found("User not found")
}

pub async fn execute<R: DocumentRepository + ?Sized>(repo: &R, id: &str) -> AppResult<User> {
    let id: DocumentId = id.parse().map_err(|_| user_not_found())?;
    repo.find_by_id(USERS.name, &id)
        .await?
        .map(User::from_document)
        .ok_or_else(user_not_found)
}
