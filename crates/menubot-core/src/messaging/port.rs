use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::InlineKeyboard,
    Result,
};

/// Outbound side of the chat transport.
///
/// Failures come back as `Err` values; callers decide whether to propagate or
/// log them. The dispatcher always logs and carries on.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    /// Send a plain-text message, optionally with an inline keyboard attached.
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef>;

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}
