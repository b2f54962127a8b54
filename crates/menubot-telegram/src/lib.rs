//! Telegram adapter (teloxide).
//!
//! This crate implements the `menubot-core` MessagingPort over the Telegram Bot
//! API and converts teloxide updates into core envelopes.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, UpdateKind},
};

pub mod handlers;
pub mod router;

#[cfg(test)]
mod fixtures;

use menubot_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{
        port::MessagingPort,
        types::{CallbackEnvelope, InlineKeyboard, TextMessage, UpdateEnvelope},
    },
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_message(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<MessageRef> {
        let mut req = self
            .bot
            .send_message(Self::tg_chat(chat_id), text.to_string());
        if let Some(kb) = keyboard {
            req = req.reply_markup(to_markup(kb));
        }
        let msg = req.await.map_err(Self::map_err)?;

        Ok(MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        })
    }

    async fn answer_callback_query(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        let mut req = self.bot.answer_callback_query(callback_id.to_string());
        if let Some(t) = text {
            req = req.text(t.to_string());
        }
        req.await.map_err(Self::map_err)?;
        Ok(())
    }
}

/// Core keyboard -> Telegram inline markup, row layout preserved.
pub fn to_markup(keyboard: &InlineKeyboard) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.callback_data.clone()))
                .collect()
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// Telegram update -> core envelope.
///
/// Only text messages and callback queries are carried over; every other
/// update kind becomes an empty envelope.
pub fn envelope_from_update(update: &Update) -> UpdateEnvelope {
    match &update.kind {
        UpdateKind::Message(msg) => UpdateEnvelope {
            message: msg.text().map(|text| TextMessage {
                chat_id: ChatId(msg.chat.id.0),
                text: text.to_string(),
            }),
            callback: None,
        },
        UpdateKind::CallbackQuery(q) => UpdateEnvelope {
            message: None,
            callback: Some(CallbackEnvelope {
                callback_id: q.id.clone(),
                chat_id: q.message.as_ref().map(|m| ChatId(m.chat.id.0)),
                data: q.data.clone(),
            }),
        },
        _ => UpdateEnvelope::default(),
    }
}
