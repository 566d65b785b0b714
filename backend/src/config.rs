use anyhow::{Context, Result};
use config::{Config, Environment, File};
use rand::{distributions::Alphanumeric, Rng};
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration.
///
/// Sources, later ones winning: built-in defaults, `config/kommunal-crm.toml`
/// when present, then `KCRM_`-prefixed environment variables using `__` to
/// separate sections (`KCRM_SERVER__PORT=9000`). A `.env` file is loaded into
/// the process environment first.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub uploads: UploadConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            cors_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Postgres connection string. Without one the server keeps data in memory.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: None, max_connections: 10 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_hours: 24,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub dir: PathBuf,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from("uploads") }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let settings = Config::builder()
            .add_source(File::with_name("config/kommunal-crm").required(false))
            .add_source(
                Environment::with_prefix("KCRM")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            )
            .build()
            .context("failed to read configuration sources")?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .context("invalid configuration")?;

        if config.auth.jwt_secret.is_empty() {
            tracing::warn!("auth.jwt_secret not set, generating an ephemeral secret; tokens will not survive a restart");
            config.auth.jwt_secret = random_secret();
        }
        if config.auth.token_ttl_hours <= 0 {
            anyhow::bail!("auth.token_ttl_hours must be positive");
        }
        if !(4..=31).contains(&config.auth.bcrypt_cost) {
            anyhow::bail!("auth.bcrypt_cost must be between 4 and 31");
        }
        url::Url::parse(&config.llm.base_url).context("llm.base_url must be a valid URL")?;

        Ok(config)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn random_secret() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(48)
        .map(char::from)
        .collect()
}
