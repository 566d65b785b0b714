// Driven port - outgoing mail delivery

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::Document;
use crate::error::AppResult;

const DEFAULT_SMTP_PORT: u16 = 587;

/// Per-organization SMTP account, stored as `smtp_*` fields on the
/// organization record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_email: String,
    pub from_name: Option<String>,
}

impl SmtpSettings {
    /// `None` when the organization has no SMTP host or sender configured.
    pub fn from_organization(organization: &Document) -> Option<Self> {
        let text = |key: &str| {
            organization
                .get_str(key)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let host = text("smtp_host")?;
        let port = match organization.get("smtp_port") {
            Some(Value::Number(n)) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
        .unwrap_or(DEFAULT_SMTP_PORT);
        let username = text("smtp_username");
        let from_email = text("smtp_from_email").or_else(|| username.clone())?;

        Some(Self {
            host,
            port,
            username,
            password: text("smtp_password"),
            from_email,
            from_name: text("smtp_from_name"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    pub filename: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
    pub attachment: Option<MailAttachment>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, settings: &SmtpSettings, mail: &OutgoingMail) -> AppResult<()>;
}
