pub mod document_repository;
pub mod memory_document_repository;
pub mod session_repository;

pub use document_repository::PostgresDocumentRepository;
pub use memory_document_repository::InMemoryDocumentRepository;
pub use session_repository::{InMemorySessionRepository, PostgresSessionRepository};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::error::AppResult;

/// Connects and brings the schema up to date.
pub async fn connect(url: &str, max_connections: u32) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");
    Ok(pool)
}
