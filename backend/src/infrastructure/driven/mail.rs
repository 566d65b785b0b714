use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::application::ports::{Mailer, OutgoingMail, SmtpSettings};
use crate::error::{AppError, AppResult};

/// Port that uses implicit TLS; every other port negotiates STARTTLS.
const SMTPS_PORT: u16 = 465;

fn upstream(error: impl std::fmt::Display) -> AppError {
    AppError::Upstream(format!("E-Mail-Versand fehlgeschlagen: {error}"))
}

fn mailbox(address: &str, name: Option<&str>) -> AppResult<Mailbox> {
    let address = address
        .parse()
        .map_err(|e| AppError::bad_request(format!("Invalid address {address}: {e}")))?;
    Ok(Mailbox::new(name.map(str::to_string), address))
}

fn attachment_type(filename: &str) -> ContentType {
    let mime = if filename.to_lowercase().ends_with(".pdf") {
        "application/pdf"
    } else {
        "application/octet-stream"
    };
    ContentType::parse(mime).unwrap_or(ContentType::TEXT_PLAIN)
}

pub fn build_message(settings: &SmtpSettings, mail: &OutgoingMail) -> AppResult<Message> {
    let mut builder = Message::builder()
        .from(mailbox(&settings.from_email, settings.from_name.as_deref())?)
        .subject(mail.subject.clone());
    for recipient in &mail.to {
        builder = builder.to(mailbox(recipient, None)?);
    }

    let text = SinglePart::builder()
        .header(ContentType::TEXT_PLAIN)
        .body(mail.body.clone());
    let message = match &mail.attachment {
        Some(attachment) => builder.multipart(
            MultiPart::mixed().singlepart(text).singlepart(
                Attachment::new(attachment.filename.clone())
                    .body(attachment.content.clone(), attachment_type(&attachment.filename)),
            ),
        ),
        None => builder.singlepart(text),
    };
    message.map_err(|e| AppError::bad_request(format!("Invalid message: {e}")))
}

/// Delivers through the organization's own SMTP account.
#[derive(Debug, Default, Clone)]
pub struct SmtpMailer;

impl SmtpMailer {
    pub fn new() -> Self {
        Self
    }

    fn transport(settings: &SmtpSettings) -> AppResult<SmtpTransport> {
        let builder = if settings.port == SMTPS_PORT {
            SmtpTransport::relay(&settings.host)
        } else {
            SmtpTransport::starttls_relay(&settings.host)
        }
        .map_err(upstream)?
        .port(settings.port);

        let builder = match (&settings.username, &settings.password) {
            (Some(user), Some(password)) => {
                builder.credentials(Credentials::new(user.clone(), password.clone()))
            }
            _ => builder,
        };
        Ok(builder.build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, settings: &SmtpSettings, mail: &OutgoingMail) -> AppResult<()> {
        let message = build_message(settings, mail)?;
        let transport = Self::transport(settings)?;
        let host = settings.host.clone();

        tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| AppError::internal(format!("Mail task failed: {e}")))?
            .map_err(upstream)?;
        tracing::info!(host = %host, recipients = mail.to.len(), "Mail delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MailAttachment;

    fn settings() -> SmtpSettings {
        SmtpSettings {
            host: "smtp.example.com".into(),
            port: 587,
            username: Some("user@example.com".into()),
            password: Some("secret".into()),
            from_email: "noreply@example.com".into(),
            from_name: Some("SPD Fraktion".into()),
        }
    }

    fn mail(attachment: Option<MailAttachment>) -> OutgoingMail {
        OutgoingMail {
            to: vec!["a@example.com".into(), "b@example.com".into()],
            subject: "Einladung".into(),
            body: "Hallo".into(),
            attachment,
        }
    }

    #[test]
    fn builds_message_with_attachment() {
        let message = build_message(
            &settings(),
            &mail(Some(MailAttachment {
                filename: "Einladung.pdf".into(),
                content: b"%PDF-1.4".to_vec(),
            })),
        )
        .unwrap();
        let raw = String::from_utf8_lossy(&message.formatted()).to_string();
        assert!(raw.contains("Subject: Einladung"));
        assert!(raw.contains("application/pdf"));
        assert!(raw.contains("Einladung.pdf"));
        assert_eq!(message.envelope().to().len(), 2);
    }

    #[test]
    fn invalid_recipient_is_rejected() {
        let mut outgoing = mail(None);
        outgoing.to.push("not an address".into());
        let err = build_message(&settings(), &outgoing).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
