// src/repositories/ragabot_repository.rs
//
// RagaBot chatbot backend.

use async_trait::async_trait;

use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RagaBotRepository: Send + Sync {
    /// Send a screened prompt and return the bot's answer text.
    /// An empty string means the bot answered with nothing.
    async fn ask(&self, message: &str) -> AppResult<String>;
}
