use std::sync::Arc;

use tracing::{debug, error};

use crate::{domain::ChatId, ports::MessagingPort};

/// Best-effort sender bound to the single destination chat.
///
/// Delivery failures are logged and dropped; callers never see them.
#[derive(Clone)]
pub struct Notifier {
    messenger: Arc<dyn MessagingPort>,
    chat_id: ChatId,
}

impl Notifier {
    pub fn new(messenger: Arc<dyn MessagingPort>, chat_id: ChatId) -> Self {
        Self { messenger, chat_id }
    }

    pub async fn send_message(&self, text: &str) {
        match self.messenger.send_text(&self.chat_id, text).await {
            Ok(()) => debug!(chat_id = %self.chat_id, "message sent to chat"),
            Err(e) => error!(chat_id = %self.chat_id, "{e} - message not sent to chat"),
        }
    }
}
