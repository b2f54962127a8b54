use crate::domain::ChatId;

/// Raw inbound update as handed over by a transport adapter.
///
/// Mirrors the Telegram envelope: at most one payload kind is expected to be
/// set, anything the adapter does not understand arrives with both empty.
#[derive(Clone, Debug, Default)]
pub struct UpdateEnvelope {
    pub message: Option<TextMessage>,
    pub callback: Option<CallbackEnvelope>,
}

/// Callback payload before validation. Telegram may omit both the originating
/// chat (inline-mode messages) and the data (game buttons).
#[derive(Clone, Debug)]
pub struct CallbackEnvelope {
    pub callback_id: String,
    pub chat_id: Option<ChatId>,
    pub data: Option<String>,
}

/// Classified inbound update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncomingUpdate {
    Text(TextMessage),
    Callback(CallbackQuery),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMessage {
    pub chat_id: ChatId,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallbackQuery {
    pub chat_id: ChatId,
    pub callback_id: String,
    pub data: String,
}

/// Inline keyboard: ordered rows of buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineButton {
    pub fn callback(label: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            callback_data: callback_data.into(),
        }
    }
}

impl InlineKeyboard {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self { rows }
    }

    /// Iterate over every button, row by row.
    pub fn buttons(&self) -> impl Iterator<Item = &InlineButton> {
        self.rows.iter().flatten()
    }
}

/// One reply produced by the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub keyboard: Option<InlineKeyboard>,
}

impl OutboundMessage {
    pub fn text(chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(chat_id: ChatId, text: impl Into<String>, keyboard: InlineKeyboard) -> Self {
        Self {
            chat_id,
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}
