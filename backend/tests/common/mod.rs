#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use kommunal_crm_server::application::ports::{Mailer, OutgoingMail, SmtpSettings, TextGenerator};
use kommunal_crm_server::config::AppConfig;
use kommunal_crm_server::error::{AppError, AppResult};
use kommunal_crm_server::{build_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// Records every delivery; fails when `fail` is set.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(SmtpSettings, OutgoingMail)>>,
    pub fail: bool,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, settings: &SmtpSettings, mail: &OutgoingMail) -> AppResult<()> {
        if self.fail {
            return Err(AppError::Upstream("connection refused".into()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((settings.clone(), mail.clone()));
        Ok(())
    }
}

/// Replies with a fixed text and remembers the last system message.
pub struct CannedGenerator {
    pub reply: String,
    pub last_system: Mutex<Option<String>>,
}

impl CannedGenerator {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            last_system: Mutex::new(None),
        }
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    async fn complete(&self, system_message: &str, _prompt: &str) -> AppResult<String> {
        *self.last_system.lock().unwrap() = Some(system_message.to_string());
        Ok(self.reply.clone())
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub mailer: Arc<RecordingMailer>,
    pub uploads: TempDir,
}

pub fn test_config(uploads: &TempDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt_secret = "integration-test-secret".into();
    config.auth.bcrypt_cost = 4;
    config.uploads.dir = uploads.path().to_path_buf();
    config
}

pub async fn app_with(mailer: RecordingMailer, generator: Option<Arc<dyn TextGenerator>>) -> TestApp {
    let uploads = tempfile::tempdir().expect("temp dir");
    let mailer = Arc::new(mailer);
    let state = AppState::in_memory(&test_config(&uploads))
        .await
        .expect("state should build")
        .with_mailer(mailer.clone())
        .with_text_generator(generator);
    TestApp {
        router: build_router(state.clone()),
        state,
        mailer,
        uploads,
    }
}

pub async fn app() -> TestApp {
    app_with(RecordingMailer::default(), None).await
}

pub async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    token: Option<&str>,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match payload {
        Some(payload) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(payload.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).expect("request should build");
    read_json(app.router.clone().oneshot(request).await.expect("response expected")).await
}

pub async fn read_bytes(response: axum::response::Response) -> (StatusCode, Bytes) {
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("response body should be readable")
        .to_bytes();
    (status, body)
}

pub async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let (status, body) = read_bytes(response).await;
    if body.is_empty() {
        return (status, Value::Null);
    }
    let json = serde_json::from_slice::<Value>(&body).expect("body should be valid JSON");
    (status, json)
}

pub async fn get(app: &TestApp, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, Method::GET, uri, token, None).await
}

pub async fn post(app: &TestApp, uri: &str, token: Option<&str>, payload: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, token, Some(payload)).await
}

pub async fn put(app: &TestApp, uri: &str, token: Option<&str>, payload: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, token, Some(payload)).await
}

/// Registers an account and returns `(token, user)`.
pub async fn register(app: &TestApp, email: &str, organization: &str, role: &str) -> (String, Value) {
    let (status, body) = post(
        app,
        "/api/auth/register",
        None,
        json!({
            "email": email,
            "password": "geheim123",
            "full_name": "Test Person",
            "city": "Neustadt",
            "organization": organization,
            "role": role
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    let token = body["token"].as_str().expect("token").to_string();
    (token, body["user"].clone())
}
