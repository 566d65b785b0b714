// Outgoing mail: invitations and SMTP checks

pub mod commands;

use shared::collections::ORGANIZATIONS;

use crate::application::ports::{DocumentRepository, Filter};
use crate::domain::Document;
use crate::error::{AppError, AppResult};

pub async fn find_organization<R: DocumentRepository + ?Sized>(
    repo: &R,
    name: &str,
) -> AppResult<Document> {
    repo.find_one(ORGANIZATIONS.name, &Filter::new().eq("name", name))
        .await?
        .ok_or_else(|| AppError::not_found("Organization not found"))
}
