use crate::domain::value_objects::DocumentId;

/// A signed-in session; its id is the `jti` of the issued token.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: uuid::Uuid,
    pub user_id: DocumentId,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn new(user_id: DocumentId, ttl: chrono::Duration) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: uuid::Uuid::new_v4(),
            user_id,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_active(&self) -> bool {
        self.expires_at > chrono::Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_sessions_are_inactive() {
        let mut session = Session::new(DocumentId::new(), chrono::Duration::hours(1));
        assert!(session.is_active());
        session.expires_at = chrono::Utc::now() - chrono::Duration::seconds(1);
        assert!(!session.is_active());
    }
}
