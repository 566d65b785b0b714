// Infrastructure layer - external concerns (database, mail, LLM, filesystem)
// Implements interfaces defined in application layer

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::auth::{PasswordHasher, TokenIssuer};
use crate::application::ports::{
    DocumentRepository, FileStore, Mailer, SessionRepository, TextGenerator,
};
use crate::config::AppConfig;
use crate::error::AppResult;

pub mod driven; // Output adapters (repositories, external services)
pub mod driving; // Input adapters (HTTP)

use driven::{
    InMemoryDocumentRepository, InMemorySessionRepository, LocalFileStore, OpenAiTextGenerator,
    PostgresDocumentRepository, PostgresSessionRepository, SmtpMailer,
};

#[derive(Clone)]
pub struct AppState {
    pub documents: Arc<dyn DocumentRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub mailer: Arc<dyn Mailer>,
    pub text_generator: Option<Arc<dyn TextGenerator>>,
    pub files: Arc<dyn FileStore>,
    pub tokens: TokenIssuer,
    pub passwords: PasswordHasher,
    pub uploads_dir: PathBuf,
    pub cors_origins: Vec<String>,
}

impl AppState {
    /// Postgres-backed when `database.url` is set, in-memory otherwise.
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let mut state = Self::in_memory(config).await?;
        if let Some(url) = config.database.url.as_deref() {
            let pool = driven::persistence::connect(url, config.database.max_connections).await?;
            state.documents = Arc::new(PostgresDocumentRepository::new(pool.clone()));
            state.sessions = Arc::new(PostgresSessionRepository::new(pool));
            tracing::info!("Using Postgres document store");
        } else {
            tracing::warn!("database.url not set, data is kept in memory only");
        }
        if state.text_generator.is_none() {
            tracing::warn!("llm.api_key not set, AI endpoints are disabled");
        }
        Ok(state)
    }

    pub async fn in_memory(config: &AppConfig) -> AppResult<Self> {
        let files = LocalFileStore::create(config.uploads.dir.clone()).await?;
        let text_generator = OpenAiTextGenerator::from_config(&config.llm)
            .map(|g| Arc::new(g) as Arc<dyn TextGenerator>);

        Ok(Self {
            documents: Arc::new(InMemoryDocumentRepository::new()),
            sessions: Arc::new(InMemorySessionRepository::new()),
            mailer: Arc::new(SmtpMailer::new()),
            text_generator,
            files: Arc::new(files),
            tokens: TokenIssuer::new(&config.auth.jwt_secret, config.auth.token_ttl_hours),
            passwords: PasswordHasher::new(config.auth.bcrypt_cost),
            uploads_dir: config.uploads.dir.clone(),
            cors_origins: config.server.cors_origins.clone(),
        })
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = mailer;
        self
    }

    pub fn with_text_generator(mut self, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        self.text_generator = generator;
        self
    }

    pub fn with_file_store(mut self, files: Arc<dyn FileStore>) -> Self {
        self.files = files;
        self
    }

    pub fn text_generator(&self) -> Option<&dyn TextGenerator> {
        self.text_generator.as_deref()
    }
}
