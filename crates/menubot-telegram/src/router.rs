use std::sync::Arc;

use anyhow::Context;
use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use menubot_core::{dispatch::BotService, messaging::port::MessagingPort};

use crate::handlers;
use crate::TelegramMessenger;

/// Register `service` with Telegram and long-poll until shutdown.
///
/// Fails only at registration time (the token is rejected or Telegram is
/// unreachable). Once polling runs, every update is absorbed by the service.
pub async fn run_polling(service: Arc<dyn BotService>) -> anyhow::Result<()> {
    let bot = Bot::new(service.token());

    let me = bot
        .get_me()
        .await
        .context("telegram bot registration failed")?;
    tracing::info!(username = %me.username(), "menubot started");

    let configured = service.username().trim_start_matches('@');
    if !me.username().eq_ignore_ascii_case(configured) {
        tracing::warn!(
            configured = %configured,
            actual = %me.username(),
            "configured bot name differs from the token's bot"
        );
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let handler = dptree::entry().endpoint(handlers::handle_update);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![service, messenger])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("menubot stopped");
    Ok(())
}
