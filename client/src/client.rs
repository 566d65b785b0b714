use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use reqwest::{header::AUTHORIZATION, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::protocol::{ErrorBody, HealthResponse, SuccessResponse};
use shared::Collection;
use tokio::sync::broadcast;
use url::Url;

use crate::api::{AiApi, DocumentsApi, EmailApi, FilesApi, OrganizationsApi, SearchApi, SmtpApi, UsersApi};
use crate::auth::AuthApi;
use crate::entities::{ChangeEvent, EntityClient};
use crate::error::{ClientError, ClientResult};

const CHANGE_CHANNEL_CAPACITY: usize = 64;
const FALLBACK_DETAIL: &str = "Request failed";

#[derive(Debug, Default, Clone)]
pub(crate) struct Session {
    pub token: Option<String>,
    pub role: Option<String>,
}

struct Inner {
    http: reqwest::Client,
    base_url: Url,
    session: RwLock<Session>,
    channels: Mutex<HashMap<&'static str, broadcast::Sender<ChangeEvent>>>,
}

/// Handle to one KommunalCRM server. Clones share the session and the
/// change subscriptions.
#[derive(Clone)]
pub struct CrmClient {
    inner: Arc<Inner>,
}

impl CrmClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_http_client(base_url, reqwest::Client::new())
    }

    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> ClientResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Keep a path prefix such as `/kommunal` when joining endpoints.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url,
                session: RwLock::new(Session::default()),
                channels: Mutex::new(HashMap::new()),
            }),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn entity(&self, collection: Collection) -> EntityClient {
        EntityClient::new(self.clone(), collection)
    }

    pub fn ai(&self) -> AiApi<'_> {
        AiApi::new(self)
    }

    pub fn email(&self) -> EmailApi<'_> {
        EmailApi::new(self)
    }

    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    pub fn files(&self) -> FilesApi<'_> {
        FilesApi::new(self)
    }

    pub fn organizations(&self) -> OrganizationsApi<'_> {
        OrganizationsApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn smtp(&self) -> SmtpApi<'_> {
        SmtpApi::new(self)
    }

    pub fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi::new(self)
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.send(self.request(Method::GET, "/api/health")?).await
    }

    /// Idempotent small demo organization (`demo@kommunalcrm.de`).
    pub async fn seed_demo(&self) -> ClientResult<SuccessResponse> {
        self.send(self.request(Method::POST, "/api/seed-demo")?).await
    }

    /// Rebuilds the full demo organization; the response carries a summary.
    pub async fn seed_full_demo(&self) -> ClientResult<Value> {
        self.send(self.request(Method::POST, "/api/seed-full-demo")?).await
    }

    pub(crate) fn session(&self) -> Session {
        self.inner
            .session
            .read()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub(crate) fn update_session(&self, apply: impl FnOnce(&mut Session)) {
        if let Ok(mut session) = self.inner.session.write() {
            apply(&mut session);
        }
    }

    pub(crate) fn change_sender(&self, collection: Collection) -> broadcast::Sender<ChangeEvent> {
        let mut channels = match self.inner.channels.lock() {
            Ok(channels) => channels,
            Err(poisoned) => poisoned.into_inner(),
        };
        channels
            .entry(collection.name)
            .or_insert_with(|| broadcast::channel(CHANGE_CHANNEL_CAPACITY).0)
            .clone()
    }

    /// Absolute URL of an API path, resolved below the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.inner.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Request against `path` with the session token attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let url = self.endpoint(path)?;
        let mut builder = self.inner.http.request(method, url);
        if let Some(token) = self.session().token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        Ok(builder)
    }

    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await?;
        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let detail = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.detail)
        .unwrap_or_else(|_| FALLBACK_DETAIL.to_string());
    tracing::debug!(status = status.as_u16(), %detail, "API request failed");
    Err(ClientError::Api {
        status: status.as_u16(),
        detail,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::collections::{CONTACTS, MOTIONS};

    #[test]
    fn rejects_invalid_base_url() {
        assert!(matches!(CrmClient::new("not a url"), Err(ClientError::Url(_))));
    }

    #[test]
    fn endpoints_keep_the_base_path() {
        let client = CrmClient::new("https://crm.example.org/kommunal/").unwrap();
        assert_eq!(
            client.endpoint("/api/contacts").unwrap().as_str(),
            "https://crm.example.org/kommunal/api/contacts"
        );

        let client = CrmClient::new("https://crm.example.org/kommunal").unwrap();
        assert_eq!(
            client.endpoint("/api/search?q=rad").unwrap().as_str(),
            "https://crm.example.org/kommunal/api/search?q=rad"
        );

        let client = CrmClient::new("http://localhost:8001").unwrap();
        assert_eq!(
            client.endpoint("/api/health").unwrap().as_str(),
            "http://localhost:8001/api/health"
        );
    }

    #[test]
    fn clones_share_the_session() {
        let client = CrmClient::new("http://localhost:8001").unwrap();
        let clone = client.clone();
        client.update_session(|s| s.token = Some("abc".into()));
        assert_eq!(clone.session().token.as_deref(), Some("abc"));
    }

    #[test]
    fn one_channel_per_collection() {
        let client = CrmClient::new("http://localhost:8001").unwrap();
        let a = client.change_sender(CONTACTS);
        let b = client.change_sender(CONTACTS);
        let c = client.change_sender(MOTIONS);
        assert!(a.same_channel(&b));
        assert!(!a.same_channel(&c));
    }
}
