use std::{env, fmt, path::PathBuf};

use crate::{errors::Error, menu::MenuLabels, Result};

/// Bot identity handed to the transport at registration time.
#[derive(Clone, PartialEq, Eq)]
pub struct BotCredentials {
    pub bot_name: String,
    pub token: String,
}

impl fmt::Debug for BotCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotCredentials")
            .field("bot_name", &self.bot_name)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Typed configuration for the bot process.
#[derive(Clone, Debug)]
pub struct Config {
    pub credentials: BotCredentials,
    /// When false the process starts, logs and exits without registering.
    pub enabled: bool,
    pub menu_labels: MenuLabels,
    pub menu_labels_path: Option<PathBuf>,
}

impl Config {
    /// Load from the process environment, after merging a `.env` file if one
    /// is present. Existing variables are never overridden.
    pub fn load() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(Error::Config(format!("failed to read .env: {e}"))),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let enabled = parse_bool(lookup("TELEGRAM_BOT_ENABLED")).unwrap_or(true);

        let bot_name = lookup("TELEGRAM_BOT_NAME").and_then(non_empty);
        let token = lookup("TELEGRAM_BOT_TOKEN").and_then(non_empty);

        // Credentials only matter when we are going to register.
        let credentials = if enabled {
            BotCredentials {
                bot_name: bot_name.ok_or_else(|| {
                    Error::Config("TELEGRAM_BOT_NAME environment variable is required".to_string())
                })?,
                token: token.ok_or_else(|| {
                    Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
                })?,
            }
        } else {
            BotCredentials {
                bot_name: bot_name.unwrap_or_default(),
                token: token.unwrap_or_default(),
            }
        };

        let menu_labels_path = lookup("MENU_LABELS_PATH")
            .and_then(non_empty)
            .map(PathBuf::from);
        let menu_labels = match &menu_labels_path {
            Some(path) => MenuLabels::from_json_file(path).map_err(|e| {
                Error::Config(format!("invalid menu labels in {}: {e}", path.display()))
            })?,
            None => MenuLabels::default(),
        };

        Ok(Self {
            credentials,
            enabled,
            menu_labels,
            menu_labels_path,
        })
    }
}

fn parse_bool(v: Option<String>) -> Option<bool> {
    v.map(|s| {
        matches!(
            s.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
