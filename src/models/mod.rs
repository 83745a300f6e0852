// src/models/mod.rs

//! Domain models for the notifier.

mod config;
mod homework;

// Re-export all public types
pub use config::{
    Config, DEFAULT_ENDPOINT, PRACTICUM_ENDPOINT, PRACTICUM_TOKEN, RETRY_PERIOD,
    TELEGRAM_CHAT_ID, TELEGRAM_TOKEN,
};
pub use homework::{Homework, HomeworkStatus};
