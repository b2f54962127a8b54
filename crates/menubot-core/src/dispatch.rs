//! Update dispatch: classify, route, reply.
//!
//! The dispatcher keeps no per-chat state. Which menu a user is "in" lives in
//! the keyboard Telegram currently shows them.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::BotCredentials,
    domain::{ChatId, MessageRef},
    menu::{CallbackAction, MenuCatalog, MenuId},
    messaging::{
        port::MessagingPort,
        types::{CallbackQuery, IncomingUpdate, OutboundMessage, TextMessage, UpdateEnvelope},
    },
};

/// What a transport needs from a bot implementation: who it is and where to
/// hand updates.
#[async_trait]
pub trait BotService: Send + Sync {
    fn username(&self) -> &str;
    fn token(&self) -> &str;

    /// Handle one update. Must absorb every failure; nothing is returned to
    /// the polling loop.
    async fn on_update(&self, update: UpdateEnvelope, messenger: &dyn MessagingPort);
}

/// Split an envelope into the one payload we handle.
///
/// A text message wins over a callback. Non-text messages, callbacks without
/// an originating chat and callbacks without data yield `None`.
pub fn classify(update: UpdateEnvelope) -> Option<IncomingUpdate> {
    if let Some(msg) = update.message {
        return Some(IncomingUpdate::Text(msg));
    }

    let cb = update.callback?;
    let (Some(chat_id), Some(data)) = (cb.chat_id, cb.data) else {
        tracing::debug!(callback_id = %cb.callback_id, "callback without chat or data ignored");
        return None;
    };

    Some(IncomingUpdate::Callback(CallbackQuery {
        chat_id,
        callback_id: cb.callback_id,
        data,
    }))
}

pub struct MenuDispatcher {
    credentials: BotCredentials,
    menus: Arc<MenuCatalog>,
}

impl MenuDispatcher {
    pub fn new(credentials: BotCredentials, menus: Arc<MenuCatalog>) -> Self {
        Self { credentials, menus }
    }

    /// Decide the reply to a classified update, if any.
    pub fn respond(&self, update: &IncomingUpdate) -> Option<OutboundMessage> {
        match update {
            IncomingUpdate::Text(msg) => self.respond_text(msg),
            IncomingUpdate::Callback(q) => self.respond_callback(q),
        }
    }

    fn respond_text(&self, msg: &TextMessage) -> Option<OutboundMessage> {
        tracing::info!(chat_id = msg.chat_id.0, text = %msg.text, "received text message");

        if self.menus.is_start_command(&msg.text) {
            return Some(self.menu_message(msg.chat_id, MenuId::Menu1));
        }
        None
    }

    fn respond_callback(&self, q: &CallbackQuery) -> Option<OutboundMessage> {
        let Some(action) = CallbackAction::parse(&q.data) else {
            tracing::warn!(chat_id = q.chat_id.0, data = %q.data, "unknown callback data");
            return None;
        };

        let reply = match action {
            CallbackAction::Leaf { button, from } => {
                tracing::debug!(chat_id = q.chat_id.0, ?button, %from, "leaf button pressed");
                OutboundMessage::text(q.chat_id, self.menus.leaf_text(button))
            }
            CallbackAction::Navigate(menu) => {
                tracing::debug!(chat_id = q.chat_id.0, %menu, "navigating");
                self.menu_message(q.chat_id, menu)
            }
        };
        Some(reply)
    }

    fn menu_message(&self, chat_id: ChatId, menu: MenuId) -> OutboundMessage {
        OutboundMessage::with_keyboard(chat_id, self.menus.title(menu), self.menus.build(menu))
    }
}

/// Send `msg`, logging any transport failure instead of returning it.
pub async fn send_logged(messenger: &dyn MessagingPort, msg: &OutboundMessage) -> Option<MessageRef> {
    match messenger
        .send_message(msg.chat_id, &msg.text, msg.keyboard.as_ref())
        .await
    {
        Ok(sent) => Some(sent),
        Err(e) => {
            tracing::error!(chat_id = msg.chat_id.0, error = %e, "error sending message");
            None
        }
    }
}

#[async_trait]
impl BotService for MenuDispatcher {
    fn username(&self) -> &str {
        &self.credentials.bot_name
    }

    fn token(&self) -> &str {
        &self.credentials.token
    }

    async fn on_update(&self, update: UpdateEnvelope, messenger: &dyn MessagingPort) {
        let Some(update) = classify(update) else {
            return;
        };
        if let Some(reply) = self.respond(&update) {
            send_logged(messenger, &reply).await;
        }
    }
}
