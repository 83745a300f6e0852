//! Application configuration.
//!
//! All settings come from the process environment (optionally seeded from a
//! `.env` file by the binary). The value is built once at startup and shared
//! read-only afterwards.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::{AppError, Result};

/// Environment variable holding the review API token.
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat.
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
/// Optional override of the review API endpoint.
pub const PRACTICUM_ENDPOINT: &str = "PRACTICUM_ENDPOINT";

/// Review API endpoint used when no override is set.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Pause between two polling cycles.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Root application configuration.
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Numeric chat id or `@channel` username
    pub chat_id: String,

    /// Review API endpoint
    pub endpoint: Url,

    /// Sleep between cycles
    pub retry_period: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Every missing or blank required variable is reported in one error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let practicum_token = required(PRACTICUM_TOKEN);
        let telegram_token = required(TELEGRAM_TOKEN);
        let chat_id = required(TELEGRAM_CHAT_ID);

        let missing: Vec<&str> = [
            (PRACTICUM_TOKEN, practicum_token.is_none()),
            (TELEGRAM_TOKEN, telegram_token.is_none()),
            (TELEGRAM_CHAT_ID, chat_id.is_none()),
        ]
        .into_iter()
        .filter_map(|(key, absent)| absent.then_some(key))
        .collect();

        let (Some(practicum_token), Some(telegram_token), Some(chat_id)) =
            (practicum_token, telegram_token, chat_id)
        else {
            return Err(AppError::config(format!(
                "отсутствуют переменные окружения: {}",
                missing.join(", ")
            )));
        };

        let endpoint = required(PRACTICUM_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = Url::parse(&endpoint).map_err(|e| {
            AppError::config(format!("некорректный {PRACTICUM_ENDPOINT} '{endpoint}': {e}"))
        })?;

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
            endpoint,
            retry_period: RETRY_PERIOD,
        })
    }

    /// `Authorization` header value for the review API.
    pub fn authorization(&self) -> String {
        format!("OAuth {}", self.practicum_token)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("chat_id", &self.chat_id)
            .field("endpoint", &self.endpoint.as_str())
            .field("retry_period", &self.retry_period)
            .finish()
    }
}
