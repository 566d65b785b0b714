use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::application::ports::SessionRepository;
use crate::domain::{DocumentId, Session};
use crate::error::AppResult;

/// Sessions for development and tests. Revoking removes the entry and
/// expired entries are dropped on every save.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn save(&self, session: &Session) -> AppResult<()> {
        let mut guard = self.sessions.write().await;
        guard.retain(|_, s| s.is_active());
        guard.insert(session.id, session.clone());
        Ok(())
    }

    async fn find_active(&self, id: &Uuid) -> AppResult<Option<Session>> {
        let guard = self.sessions.read().await;
        Ok(guard.get(id).filter(|s| s.is_active()).cloned())
    }

    async fn revoke(&self, id: &Uuid) -> AppResult<()> {
        self.sessions.write().await.remove(id);
        Ok(())
    }

    async fn revoke_all_for_user(&self, user_id: &DocumentId) -> AppResult<u64> {
        let mut guard = self.sessions.write().await;
        let before = guard.len();
        guard.retain(|_, s| s.user_id != *user_id);
        Ok((before - guard.len()) as u64)
    }
}

pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn save(&self, session: &Session) -> AppResult<()> {
        // Sweep dead rows at sign-in so the table tracks live sessions only.
        let swept = sqlx::query(
            "DELETE FROM sessions WHERE expires_at <= now() OR revoked_at IS NOT NULL",
        )
        .execute(&self.pool)
        .await?
        .rows_affected();
        if swept > 0 {
            tracing::debug!(swept, "Removed expired sessions");
        }

        sqlx::query(
            "INSERT INTO sessions (id, user_id, created_at, expires_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(session.id)
        .bind(session.user_id.as_uuid())
        .bind(session.created_at)
        .bind(session.expires_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_active(&self, id: &Uuid) -> AppResult<Option<Session>> {
        let row: Option<(Uuid, Uuid, DateTime<Utc>, DateTime<Utc>)> = sqlx::query_as(
            "SELECT id, user_id, created_at, expires_at FROM sessions
             WHERE id = $1 AND revoked_at IS NULL AND expires_at > now()",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(id, user_id, created_at, expires_at)| Session {
            id,
            user_id: DocumentId::from_uuid(user_id),
            created_at,
            expires_at,
        }))
    }

    async fn revoke(&self, id: &Uuid) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET revoked_at = now() WHERE id = $1 AND revoked_at IS NULL")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn revoke_all_for_user(&self, user_id: &DocumentId) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE sessions SET revoked_at = now() WHERE user_id = $1 AND revoked_at IS NULL",
        )
        .bind(user_id.as_uuid())
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
