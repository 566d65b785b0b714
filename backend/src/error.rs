use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::protocol::ErrorBody;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0} not configured")]
    NotConfigured(String),
    #[error("upstream failure: {0}")]
    Upstream(String),
    #[error("database error")]
    Database(#[from] sqlx::Error),
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("io error")]
    Io(#[from] std::io::Error),
    #[error("internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_authenticated() -> Self {
        Self::Unauthorized("Not authenticated".to_string())
    }

    pub fn read_only() -> Self {
        Self::Forbidden("Nur Lesezugriff".to_string())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::NotConfigured(_)
            | Self::Database(_)
            | Self::Migration(_)
            | Self::Io(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            Self::Database(err) => {
                tracing::error!(error = %err, "database operation failed");
                "database operation failed".to_string()
            }
            Self::Migration(err) => {
                tracing::error!(error = %err, "database migration failed");
                "database migration failed".to_string()
            }
            Self::Io(err) => {
                tracing::error!(error = %err, "io operation failed");
                "storage operation failed".to_string()
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_configured_reads_naturally() {
        let err = AppError::NotConfigured("LLM_API_KEY".into());
        assert_eq!(err.to_string(), "LLM_API_KEY not configured");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn client_errors_keep_their_message() {
        assert_eq!(AppError::read_only().to_string(), "Nur Lesezugriff");
        assert_eq!(AppError::read_only().status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::not_found("Motion not found").status(), StatusCode::NOT_FOUND);
    }
}
