use serde_json::{json, Value};
use shared::collections::{ORGANIZATIONS, USERS};
use shared::protocol::RegisterRequest;

use crate::application::auth::{sign_in, PasswordHasher, SignedIn, TokenIssuer};
use crate::application::ports::{DocumentRepository, Filter, SessionRepository};
use crate::application::{into_fields, timestamp};
use crate::domain::entities::user::PASSWORD_HASH_FIELD;
use crate::domain::{Document, Email, OrganizationSlug, User, UserRole};
use crate::error::{AppError, AppResult};

const DEFAULT_ORG_TYPE: &str = "fraktion";

pub async fn execute(
    documents: &dyn DocumentRepository,
    sessions: &dyn SessionRepository,
    tokens: &TokenIssuer,
    passwords: &PasswordHasher,
    request: RegisterRequest,
) -> AppResult<SignedIn> {
    let email = Email::new(request.email).map_err(AppError::BadRequest)?;
    if request.password.is_empty() {
        return Err(AppError::bad_request("Password must not be empty"));
    }
    let existing = documents
        .find_one(USERS.name, &Filter::new().eq("email", email.as_str()))
        .await?;
    if existing.is_some() {
        return Err(AppError::bad_request("Email already registered"));
    }

    let now = chrono::Utc::now();
    let created = now.to_rfc3339();
    let display_name = request
        .organization
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    let slug = display_name
        .and_then(OrganizationSlug::from_display_name)
        .unwrap_or_else(|| OrganizationSlug::generated(now));
    let org_type = request.org_type.as_deref().unwrap_or(DEFAULT_ORG_TYPE);

    let org_filter = Filter::new().eq("name", slug.as_str());
    if documents.find_one(ORGANIZATIONS.name, &org_filter).await?.is_none() {
        let organization = Document::new(into_fields(json!({
            "name": slug.as_str(),
            "display_name": display_name.unwrap_or(slug.as_str()),
            "type": org_type,
            "city": request.city,
            "created_date": created,
            "updated_date": created,
        })));
        documents.insert(ORGANIZATIONS.name, &organization).await?;
        tracing::info!(organization = %slug.as_str(), "Organization created on registration");
    }

    let role = request
        .role
        .as_deref()
        .map(UserRole::parse_lenient)
        .unwrap_or(UserRole::Member);
    let password_hash = passwords.hash(&request.password).await?;
    let mut fields = into_fields(json!({
        "email": email.as_str(),
        "full_name": request.full_name,
        "city": request.city,
        "organization": slug.as_str(),
        "org_type": org_type,
        "role": role.as_str(),
        "created_date": created,
        "updated_date": timestamp(),
    }));
    fields.insert(PASSWORD_HASH_FIELD.into(), Value::String(password_hash));

    let user = User::from_document(Document::new(fields));
    documents.insert(USERS.name, user.document()).await?;
    tracing::info!(user_id = %user.id(), organization = %slug.as_str(), "User registered");

    sign_in(sessions, tokens, user).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::document_repository::MockDocumentRepository;
    use crate::application::ports::session_repository::MockSessionRepository;

    fn request(organization: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            email: "Neu@Example.com".into(),
            password: "geheim123".into(),
            full_name: Some("Erika Muster".into()),
            organization: organization.map(str::to_string),
            ..RegisterRequest::default()
        }
    }

    fn sessions() -> MockSessionRepository {
        let mut sessions = MockSessionRepository::new();
        sessions.expect_save().returning(|_| Ok(()));
        sessions
    }

    #[tokio::test]
    async fn creates_organization_and_user() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_one().returning(|_, _| Ok(None));
        documents
            .expect_insert()
            .withf(|collection, doc| {
                collection == "organizations"
                    && doc.get_str("name") == Some("gruene-koeln-fraktion")
                    && doc.get_str("display_name") == Some("Grüne Köln Fraktion")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        documents
            .expect_insert()
            .withf(|collection, _| collection == "users")
            .times(1)
            .returning(|_, _| Ok(()));

        let signed = execute(
            &documents,
            &sessions(),
            &TokenIssuer::new("secret", 1),
            &PasswordHasher::new(4),
            request(Some("Grüne Köln Fraktion")),
        )
        .await
        .unwrap();

        assert_eq!(signed.user.email(), "neu@example.com");
        assert_eq!(signed.user.organization(), Some("gruene-koeln-fraktion"));
        assert_eq!(signed.user.role(), UserRole::Member);
        assert!(signed.user.password_hash().is_some_and(|h| h != "geheim123"));
        assert!(!signed.token.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_one().returning(|_, _| {
            Ok(Some(Document::new(into_fields(json!({ "email": "neu@example.com" })))))
        });

        let err = execute(
            &documents,
            &MockSessionRepository::new(),
            &TokenIssuer::new("secret", 1),
            &PasswordHasher::new(4),
            request(None),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[tokio::test]
    async fn missing_organization_gets_generated_slug() {
        let mut documents = MockDocumentRepository::new();
        documents.expect_find_one().returning(|_, _| Ok(None));
        documents.expect_insert().returning(|_, _| Ok(()));

        let signed = execute(
            &documents,
            &sessions(),
            &TokenIssuer::new("secret", 1),
            &PasswordHasher::new(4),
            request(None),
        )
        .await
        .unwrap();
        assert!(signed.user.organization().unwrap().starts_with("org-"));
    }
}
