use crate::application::auth::TokenIssuer;
use crate::application::ports::SessionRepository;
use crate::error::AppResult;

/// Revokes the session behind `token`. Unknown or invalid tokens are ignored.
pub async fn execute(
    sessions: &dyn SessionRepository,
    tokens: &TokenIssuer,
    token: Option<&str>,
) -> AppResult<()> {
    let Some(claims) = token.and_then(|t| tokens.verify(t)) else {
        return Ok(());
    };
    if let Ok(session_id) = claims.jti.parse::<uuid::Uuid>() {
        sessions.revoke(&session_id).await?;
        tracing::info!(session_id = %session_id, "Session revoked");
    }
    Ok(())
}
