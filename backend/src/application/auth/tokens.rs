use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::{Session, User};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub org: Option<String>,
    pub role: String,
    /// Session id; revoking the session invalidates the token.
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies HS256 session tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: chrono::Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: chrono::Duration::hours(ttl_hours),
        }
    }

    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    pub fn issue(&self, user: &User, session: &Session) -> AppResult<String> {
        let claims = Claims {
            sub: user.id().to_string(),
            org: user.organization().map(str::to_string),
            role: user.role().as_str().to_string(),
            jti: session.id.to_string(),
            iat: session.created_at.timestamp(),
            exp: session.expires_at.timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::internal(format!("Failed to sign token: {e}")))
    }

    pub fn verify(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding, &Validation::default()) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected token");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::into_fields;
    use crate::domain::Document;
    use serde_json::json;

    fn member() -> User {
        User::from_document(Document::new(into_fields(json!({
            "email": "max@example.com",
            "organization": "spd-musterstadt",
            "role": "member"
        }))))
    }

    #[test]
    fn claims_carry_user_and_session() {
        let issuer = TokenIssuer::new("secret", 1);
        let user = member();
        let session = Session::new(*user.id(), issuer.ttl());
        let token = issuer.issue(&user, &session).unwrap();

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, user.id().to_string());
        assert_eq!(claims.jti, session.id.to_string());
        assert_eq!(claims.org.as_deref(), Some("spd-musterstadt"));
        assert_eq!(claims.role, "member");
    }

    #[test]
    fn other_secret_fails_verification() {
        let user = member();
        let session = Session::new(*user.id(), chrono::Duration::hours(1));
        let token = TokenIssuer::new("one", 1).issue(&user, &session).unwrap();
        assert!(TokenIssuer::new("two", 1).verify(&token).is_none());
    }

    #[test]
    fn expired_token_fails_verification() {
        let issuer = TokenIssuer::new("secret", 1);
        let user = member();
        let session = Session::new(*user.id(), chrono::Duration::hours(-2));
        let token = issuer.issue(&user, &session).unwrap();
        assert!(issuer.verify(&token).is_none());
    }
}
