use shared::protocol::SmtpTestRequest;

use crate::application::email::find_organization;
use crate::application::ports::{DocumentRepository, Mailer, OutgoingMail, SmtpSettings};
use crate::domain::Email;
use crate::error::{AppError, AppResult};

/// Sends a short test message with the organization's SMTP settings.
/// Returns the confirmation text.
pub async fn execute(
    documents: &dyn DocumentRepository,
    mailer: &dyn Mailer,
    request: SmtpTestRequest,
) -> AppResult<String> {
    let organization = find_organization(documents, &request.organization).await?;
    let settings = SmtpSettings::from_organization(&organization)
        .ok_or_else(|| AppError::bad_request("SMTP ist für diese Organisation nicht konfiguriert"))?;
    let recipient = Email::new(request.test_email).map_err(AppError::BadRequest)?;

    let mail = OutgoingMail {
        to: vec![recipient.as_str().to_string()],
        subject: "KommunalCRM SMTP-Test".into(),
        body: format!(
            "Diese Test-E-Mail bestätigt, dass der SMTP-Versand über {}:{} funktioniert.",
            settings.host, settings.port
        ),
        attachment: None,
    };
    mailer.send(&settings, &mail).await?;
    tracing::info!(organization = %request.organization, host = %settings.host, "SMTP test sent");
    Ok(format!("Test-E-Mail an {} gesendet", recipient.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::into_fields;
    use crate::application::ports::document_repository::MockDocumentRepository;
    use crate::application::ports::mailer::MockMailer;
    use crate::domain::Document;
    use serde_json::json;

    fn request(organization: &str) -> SmtpTestRequest {
        SmtpTestRequest {
            organization: organization.into(),
            test_email: "test@example.com".into(),
        }
    }

    #[tokio::test]
    async fn unknown_organization_is_not_found() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_one().returning(|_, _| Ok(None));
        let err = execute(&documents, &MockMailer::new(), request("nonexistent-org-xyz"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn unconfigured_organization_is_bad_request() {
        let mut documents = MockDocumentRepository::new();
        documents
            .expect_find_one()
            .returning(|_, _| Ok(Some(Document::new(into_fields(json!({ "name": "demo-org" }))))));
        let err = execute(&documents, &MockMailer::new(), request("demo-org"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn sends_test_mail() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_one().returning(|_, _| {
            Ok(Some(Document::new(into_fields(json!({
                "name": "demo-org",
                "smtp_host": "smtp.example.com",
                "smtp_from_email": "noreply@example.com"
            })))))
        });
        let mut mailer = MockMailer::new();
        mailer.expect_send().times(1).returning(|_, _| Ok(()));
        let message = execute(&documents, &mailer, request("demo-org")).await.unwrap();
        assert_eq!(message, "Test-E-Mail an test@example.com gesendet");
    }
}
