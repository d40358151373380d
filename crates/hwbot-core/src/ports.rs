use async_trait::async_trait;
use serde_json::Value;

use crate::{
    domain::{ChatId, PollTimestamp},
    Result,
};

/// Hexagonal port for the homework review API.
///
/// Returns the decoded body as-is; shape checks belong to `homework::check_response`.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    async fn get_api_answer(&self, from_date: PollTimestamp) -> Result<Value>;
}

/// Hexagonal port for the chat transport.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: &ChatId, text: &str) -> Result<()>;
}
