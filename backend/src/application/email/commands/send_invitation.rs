use serde_json::json;
use shared::collections::{EMAIL_LOGS, ORGANIZATIONS};
use shared::protocol::{SendEmailRequest, SendEmailResponse};

use crate::application::ports::{
    DocumentRepository, Filter, MailAttachment, Mailer, OutgoingMail, SmtpSettings,
};
use crate::application::{into_fields, timestamp};
use crate::domain::{Document, Email};
use crate::error::{AppError, AppResult};

const BODY_PREVIEW_CHARS: usize = 200;
const DEFAULT_ATTACHMENT_NAME: &str = "Einladung.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    Sent,
    Simulated,
    Failed,
}

impl Delivery {
    fn as_str(self) -> &'static str {
        match self {
            Delivery::Sent => "sent",
            Delivery::Simulated => "simulated",
            Delivery::Failed => "failed",
        }
    }
}

/// Sends through the organization's SMTP account when one is configured,
/// otherwise records a simulated delivery. Every attempt is logged to
/// `email_logs`.
pub async fn execute(
    documents: &dyn DocumentRepository,
    mailer: &dyn Mailer,
    request: SendEmailRequest,
) -> AppResult<SendEmailResponse> {
    let recipients = request
        .to
        .iter()
        .map(|r| Email::new(r.as_str()).map(|e| e.as_str().to_string()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::BadRequest)?;
    if recipients.is_empty() {
        return Err(AppError::bad_request("At least one recipient is required"));
    }

    // An organization without a stored record has no SMTP account either.
    let settings = match request.organization.as_deref() {
        Some(name) => documents
            .find_one(ORGANIZATIONS.name, &Filter::new().eq("name", name))
            .await?
            .and_then(|org| SmtpSettings::from_organization(&org)),
        None => None,
    };

    let attachment = request.attachment_base64.clone().map(|content| MailAttachment {
        filename: request
            .attachment_filename
            .clone()
            .unwrap_or_else(|| DEFAULT_ATTACHMENT_NAME.to_string()),
        content,
    });
    let mail = OutgoingMail {
        to: recipients.clone(),
        subject: request.subject.clone(),
        body: request.body.clone(),
        attachment,
    };

    let outcome = match &settings {
        Some(settings) => mailer.send(settings, &mail).await,
        None => Ok(()),
    };
    let delivery = match (&settings, &outcome) {
        (_, Err(_)) => Delivery::Failed,
        (Some(_), Ok(())) => Delivery::Sent,
        (None, Ok(())) => Delivery::Simulated,
    };

    let log = Document::new(into_fields(json!({
        "to": recipients,
        "subject": request.subject,
        "body_preview": request.body.chars().take(BODY_PREVIEW_CHARS).collect::<String>(),
        "has_attachment": mail.attachment.is_some(),
        "attachment_filename": mail.attachment.as_ref().map(|a| a.filename.clone()),
        "organization": request.organization,
        "status": delivery.as_str(),
        "error": outcome.as_ref().err().map(|e| e.to_string()),
        "sent_at": timestamp(),
        "created_date": timestamp(),
    })));
    documents.insert(EMAIL_LOGS.name, &log).await?;
    tracing::info!(
        recipients = recipients.len(),
        status = delivery.as_str(),
        "Invitation mail processed"
    );

    outcome?;
    let mut message = format!("Einladung an {} Empfänger gesendet", recipients.len());
    if delivery == Delivery::Simulated {
        message.push_str(" (Simulation)");
    }
    Ok(SendEmailResponse {
        success: true,
        message,
        recipients,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::document_repository::MockDocumentRepository;
    use crate::application::ports::mailer::MockMailer;

    fn request(organization: Option<&str>) -> SendEmailRequest {
        SendEmailRequest {
            to: vec!["a@example.com".into(), "B@Example.com".into()],
            subject: "Einladung Fraktionssitzung".into(),
            body: "Liebe Mitglieder".into(),
            attachment_base64: Some(b"%PDF-1.4".to_vec()),
            attachment_filename: None,
            organization: organization.map(str::to_string),
        }
    }

    fn configured_org() -> Document {
        Document::new(into_fields(json!({
            "name": "demo-org",
            "smtp_host": "smtp.example.com",
            "smtp_port": 587,
            "smtp_username": "user@example.com"
        })))
    }

    #[tokio::test]
    async fn without_organization_delivery_is_simulated() {
        let mut documents = MockDocumentRepository::new();
        documents
            .expect_insert()
            .withf(|collection, log| {
                collection == "email_logs" && log.get_str("status") == Some("simulated")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let mailer = MockMailer::new();

        let response = execute(&documents, &mailer, request(None)).await.unwrap();
        assert_eq!(response.message, "Einladung an 2 Empfänger gesendet (Simulation)");
        assert_eq!(response.recipients[1], "b@example.com");
    }

    #[tokio::test]
    async fn organization_without_record_is_simulated() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_one().returning(|_, _| Ok(None));
        documents
            .expect_insert()
            .withf(|_, log| {
                log.get_str("status") == Some("simulated")
                    && log.get_str("organization") == Some("ohne-datensatz")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let mailer = MockMailer::new();

        let response = execute(&documents, &mailer, request(Some("ohne-datensatz")))
            .await
            .unwrap();
        assert!(response.message.ends_with("(Simulation)"));
    }

    #[tokio::test]
    async fn configured_organization_sends_with_attachment() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_one().returning(|_, _| Ok(Some(configured_org())));
        documents
            .expect_insert()
            .withf(|_, log| log.get_str("status") == Some("sent"))
            .returning(|_, _| Ok(()));
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|settings, mail| {
                settings.host == "smtp.example.com"
                    && mail.attachment.as_ref().map(|a| a.filename.as_str()) == Some("Einladung.pdf")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let response = execute(&documents, &mailer, request(Some("demo-org"))).await.unwrap();
        assert_eq!(response.message, "Einladung an 2 Empfänger gesendet");
    }

    #[tokio::test]
    async fn delivery_failure_is_logged_and_reported() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_one().returning(|_, _| Ok(Some(configured_org())));
        documents
            .expect_insert()
            .withf(|_, log| log.get_str("status") == Some("failed") && log.get_str("error").is_some())
            .times(1)
            .returning(|_, _| Ok(()));
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .returning(|_, _| Err(AppError::Upstream("connection refused".into())));

        let err = execute(&documents, &mailer, request(Some("demo-org"))).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[tokio::test]
    async fn empty_recipient_list_is_rejected() {
        let documents = MockDocumentRepository::new();
        let mailer = MockMailer::new();
        let mut req = request(None);
        req.to.clear();
        let err = execute(&documents, &mailer, req).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
