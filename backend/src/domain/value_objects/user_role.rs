use serde::{Deserialize, Serialize};

/// Account permission level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Member,
    Viewer,
    Support,
}

impl UserRole {
    /// Unknown values, including the legacy `user`, map to `Member`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "viewer" => Self::Viewer,
            "support" => Self::Support,
            _ => Self::Member,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
            Self::Viewer => "viewer",
            Self::Support => "support",
        }
    }

    pub fn can_write(&self) -> bool {
        !matches!(self, Self::Viewer)
    }
}
