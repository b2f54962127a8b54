//! Dispatcher endpoint: hand every update to the bot service.

use std::sync::Arc;

use teloxide::{prelude::*, types::UpdateKind};

use menubot_core::{dispatch::BotService, messaging::port::MessagingPort};

use crate::envelope_from_update;

pub async fn handle_update(
    update: Update,
    service: Arc<dyn BotService>,
    messenger: Arc<dyn MessagingPort>,
) -> ResponseResult<()> {
    let callback_id = match &update.kind {
        UpdateKind::CallbackQuery(q) => Some(q.id.clone()),
        _ => None,
    };

    service
        .on_update(envelope_from_update(&update), messenger.as_ref())
        .await;

    // Always answer callback queries so the client stops its spinner.
    if let Some(id) = callback_id {
        if let Err(e) = messenger.answer_callback_query(&id, None).await {
            tracing::warn!(callback_id = %id, error = %e, "failed to answer callback query");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{callback_update, text_update};
    use async_trait::async_trait;
    use menubot_core::{
        config::BotCredentials,
        dispatch::MenuDispatcher,
        domain::{ChatId, MessageId, MessageRef},
        errors::Error,
        menu::MenuCatalog,
        messaging::types::InlineKeyboard,
        Result,
    };
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeMessenger {
        sends: Mutex<Vec<(ChatId, String)>>,
        answers: Mutex<Vec<String>>,
        fail_answers: bool,
    }

    impl FakeMessenger {
        fn sent(&self) -> Vec<(ChatId, String)> {
            self.sends.lock().unwrap().clone()
        }

        fn answered(&self) -> Vec<String> {
            self.answers.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MessagingPort for FakeMessenger {
        async fn send_message(
            &self,
            chat_id: ChatId,
            text: &str,
            _keyboard: Option<&InlineKeyboard>,
        ) -> Result<MessageRef> {
            self.sends.lock().unwrap().push((chat_id, text.to_string()));
            Ok(MessageRef {
                chat_id,
                message_id: MessageId(1),
            })
        }

        async fn answer_callback_query(&self, callback_id: &str, _text: Option<&str>) -> Result<()> {
            self.answers.lock().unwrap().push(callback_id.to_string());
            if self.fail_answers {
                return Err(Error::External("telegram error: query is too old".to_string()));
            }
            Ok(())
        }
    }

    fn service() -> Arc<dyn BotService> {
        Arc::new(MenuDispatcher::new(
            BotCredentials {
                bot_name: "menu_bot".to_string(),
                token: "123:abc".to_string(),
            },
            Arc::new(MenuCatalog::default()),
        ))
    }

    async fn handle(update: Update, api: &Arc<FakeMessenger>) {
        let messenger: Arc<dyn MessagingPort> = api.clone();
        handle_update(update, service(), messenger).await.unwrap();
    }

    #[tokio::test]
    async fn known_callback_is_routed_then_answered() {
        let api = Arc::new(FakeMessenger::default());
        handle(callback_update(42, "cb-1", "button1_menu1"), &api).await;

        assert_eq!(api.sent(), vec![(ChatId(42), "Кнопка 1".to_string())]);
        assert_eq!(api.answered(), vec!["cb-1".to_string()]);
    }

    #[tokio::test]
    async fn unknown_callback_is_still_answered_once() {
        let api = Arc::new(FakeMessenger::default());
        handle(callback_update(42, "cb-2", "no_such_button"), &api).await;

        assert!(api.sent().is_empty());
        assert_eq!(api.answered(), vec!["cb-2".to_string()]);
    }

    #[tokio::test]
    async fn text_update_is_never_answered() {
        let api = Arc::new(FakeMessenger::default());
        handle(text_update(42, "/start"), &api).await;
        handle(text_update(42, "hello"), &api).await;

        assert_eq!(api.sent(), vec![(ChatId(42), "Меню 1".to_string())]);
        assert!(api.answered().is_empty());
    }

    #[tokio::test]
    async fn failed_answer_does_not_fail_the_endpoint() {
        let api = Arc::new(FakeMessenger {
            fail_answers: true,
            ..Default::default()
        });
        handle(callback_update(42, "cb-3", "menu1_next"), &api).await;

        assert_eq!(api.sent(), vec![(ChatId(42), "Меню 2".to_string())]);
        assert_eq!(api.answered(), vec!["cb-3".to_string()]);
    }
}
