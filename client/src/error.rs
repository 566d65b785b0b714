use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-2xx response; `detail` is the server's message.
    #[error("{detail} (HTTP {status})")]
    Api { status: u16, detail: String },
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error("Nur Lesezugriff")]
    ReadOnly,
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
