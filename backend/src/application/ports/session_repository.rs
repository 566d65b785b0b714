use async_trait::async_trait;
use crate::domain::entities::session::Session;
use crate::domain::value_objects::DocumentId;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn save(&self, session: &Session) -> AppResult<()>;
    /// Returns the session only while it is unexpired and not revoked.
    async fn find_active(&self, id: &uuid::Uuid) -> AppResult<Option<Session>>;
    async fn revoke(&self, id: &uuid::Uuid) -> AppResult<()>;
    async fn revoke_all_for_user(&self, user_id: &DocumentId) -> AppResult<u64>;
}
