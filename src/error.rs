// src/error.rs

//! Unified error handling for the notifier.

use std::fmt;

use thiserror::Error;

/// Result type alias for notifier operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Diagnostic copy of an outbound review-API request.
///
/// The OAuth secret is never stored here, so the value is safe to log and
/// to forward into a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub endpoint: String,
    pub headers: Vec<(String, String)>,
    pub from_date: i64,
}

impl fmt::Display for RequestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "endpoint={}, headers={{", self.endpoint)?;
        for (i, (name, value)) in self.headers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}, params={{from_date: {}}}", self.from_date)
    }
}

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required configuration is missing or malformed
    #[error("Ошибка конфигурации: {0}")]
    Config(String),

    /// The review API could not be reached
    #[error("При подключении к серверу произошла ошибка: {message} ({request})")]
    Transport {
        message: String,
        request: RequestInfo,
    },

    /// The review API answered with a non-success status
    #[error("Получен неожиданный ответ от сервера: {status} ({request})")]
    EndpointStatus { status: u16, request: RequestInfo },

    /// The response body was not JSON
    #[error("Ответ сервера не является JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The decoded response does not have the expected shape
    #[error("{0}")]
    Shape(String),

    /// A homework record lacks a required field
    #[error("{0}")]
    Field(String),

    /// A homework record carries a status outside the catalog
    #[error("Неизвестный статус \"{status}\" у работы \"{name}\".")]
    UnknownStatus { name: String, status: String },

    /// The bot token was rejected by Telegram
    #[error("Токен бота отклонён: {0}")]
    Authorization(String),

    /// A message could not be delivered for any other reason
    #[error("Сообщение не отправлено: {0}")]
    Delivery(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a transport error with the request that failed.
    pub fn transport(message: impl fmt::Display, request: RequestInfo) -> Self {
        Self::Transport {
            message: message.to_string(),
            request,
        }
    }

    /// Create a response shape error.
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }

    /// Create a homework field error.
    pub fn field(message: impl Into<String>) -> Self {
        Self::Field(message.into())
    }

    /// Create an unknown status error.
    pub fn unknown_status(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self::UnknownStatus {
            name: name.into(),
            status: status.into(),
        }
    }

    /// Create a delivery error.
    pub fn delivery(message: impl fmt::Display) -> Self {
        Self::Delivery(message.to_string())
    }

    /// Whether the error must stop the process instead of being retried.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Authorization(_))
    }
}
