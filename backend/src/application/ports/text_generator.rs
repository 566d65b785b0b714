// Driven port - large language model completion

use async_trait::async_trait;

use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, system_message: &str, prompt: &str) -> AppResult<String>;
}
