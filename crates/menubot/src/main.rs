use std::sync::Arc;

use menubot_core::{
    config::Config,
    dispatch::{BotService, MenuDispatcher},
    menu::MenuCatalog,
};

#[tokio::main]
async fn main() -> Result<(), menubot_core::Error> {
    menubot_core::logging::init("menubot")?;

    let cfg = Config::load()?;
    if !cfg.enabled {
        tracing::info!("TELEGRAM_BOT_ENABLED is off; not registering the bot");
        return Ok(());
    }
    if let Some(path) = &cfg.menu_labels_path {
        tracing::info!(path = %path.display(), "using custom menu labels");
    }

    let menus = Arc::new(MenuCatalog::new(cfg.menu_labels));
    let service: Arc<dyn BotService> = Arc::new(MenuDispatcher::new(cfg.credentials, menus));

    menubot_telegram::router::run_polling(service)
        .await
        .map_err(|e| menubot_core::Error::External(format!("telegram bot failed: {e:#}")))?;

    Ok(())
}
