use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::TextGenerator;
use crate::config::LlmConfig;
use crate::error::{AppError, AppResult};

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat completion client for OpenAI-compatible endpoints.
pub struct OpenAiTextGenerator {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl OpenAiTextGenerator {
    /// `None` when no API key is configured.
    pub fn from_config(config: &LlmConfig) -> Option<Self> {
        let api_key = config.api_key.clone().filter(|k| !k.trim().is_empty())?;
        Some(Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            api_key,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    async fn complete(&self, system_message: &str, prompt: &str) -> AppResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: system_message },
                ChatMessage { role: "user", content: prompt },
            ],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("LLM request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(%status, detail = %detail, "LLM returned an error");
            return Err(AppError::Upstream(format!("LLM request failed with status {status}")));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Invalid LLM response: {e}")))?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Upstream("LLM response contained no text".into()))
    }
}
