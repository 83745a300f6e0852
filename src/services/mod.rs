//! Service layer for the notifier.
//!
//! This module contains the outbound integrations:
//! - Review API polling (`PracticumClient`)
//! - Telegram delivery (`TelegramSender`, `Notifier`)

mod api;
mod notifier;
#[cfg(test)]
pub(crate) mod testing;

pub use api::{PracticumClient, StatusSource};
pub use notifier::{MessageSender, Notifier, TelegramSender};
