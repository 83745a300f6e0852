// src/pipeline/poll.rs

//! The polling loop.
//!
//! Each cycle fetches statuses changed since the cursor, checks the
//! response, formats the newest homework and hands the text to the
//! notifier. Every non-fatal failure becomes a chat message instead of
//! stopping the loop, and the loop always sleeps the full retry period
//! before the next cycle.

use std::time::Duration;

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::pipeline::format::parse_status;
use crate::pipeline::validate::{check_response, current_date};
use crate::services::{MessageSender, Notifier, StatusSource};
use crate::utils::log::CRITICAL;

/// Sent when a cycle finds no status changes.
pub const NO_NEW_HOMEWORK: &str = "Нет новых домашних работ.";

/// Prefix of chat messages describing a failed cycle.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Polls a status source and reports changes through a notifier.
pub struct PollLoop<F, S> {
    source: F,
    notifier: Notifier<S>,
    cursor: i64,
    retry_period: Duration,
}

impl<F: StatusSource, S: MessageSender> PollLoop<F, S> {
    /// Create a loop starting at `cursor` (seconds since epoch).
    pub fn new(source: F, notifier: Notifier<S>, cursor: i64, retry_period: Duration) -> Self {
        Self {
            source,
            notifier,
            cursor,
            retry_period,
        }
    }

    /// Timestamp the next request asks for changes since.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Notifier holding the last delivered message.
    pub fn notifier(&self) -> &Notifier<S> {
        &self.notifier
    }

    /// Run cycles forever, sleeping between them.
    ///
    /// Returns only when a fatal error occurs.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.run_cycle().await?;
            log::info!("Next poll in {} s", self.retry_period.as_secs());
            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Run a single cycle without sleeping.
    pub async fn run_cycle(&mut self) -> Result<()> {
        let message = match self.poll().await {
            Ok(message) => message,
            Err(err) if err.is_fatal() => {
                report(&err);
                return Err(err);
            }
            Err(err) => {
                report(&err);
                format!("{FAILURE_PREFIX}: {err}")
            }
        };

        self.notifier.notify(&message).await
    }

    /// Fetch, check and format. The cursor moves once the response shape
    /// is known to be valid, before the homework record is looked at.
    async fn poll(&mut self) -> Result<String> {
        log::debug!("Polling for changes since {}", self.cursor);
        let response = self.source.fetch(self.cursor).await?;
        let homeworks = check_response(&response)?;
        self.advance(&response);

        match homeworks.first() {
            Some(latest) => {
                if homeworks.len() > 1 {
                    log::debug!(
                        "{} homeworks in response, reporting the newest only",
                        homeworks.len()
                    );
                }
                parse_status(latest)
            }
            None => {
                log::debug!("No status changes");
                Ok(NO_NEW_HOMEWORK.to_string())
            }
        }
    }

    fn advance(&mut self, response: &Value) {
        match current_date(response) {
            Some(date) if date >= self.cursor => self.cursor = date,
            Some(date) => log::warn!(
                "Server date {date} is older than cursor {}; cursor kept",
                self.cursor
            ),
            None => log::warn!("current_date is not an integer; cursor kept at {}", self.cursor),
        }
    }
}

/// Log a failed cycle.
fn report(err: &AppError) {
    match err {
        AppError::Transport { .. } => log::error!("Review API unreachable: {err}"),
        AppError::EndpointStatus { status, .. } => {
            log::error!("Review API answered HTTP {status}: {err}")
        }
        AppError::Json(_) => log::error!("Review API returned malformed JSON: {err}"),
        AppError::Shape(_) => log::error!("Unexpected response shape: {err}"),
        AppError::Field(_) | AppError::UnknownStatus { .. } => {
            log::error!("Invalid homework record: {err}")
        }
        AppError::Delivery(_) => log::error!("Message not sent: {err}"),
        AppError::Config(_) | AppError::Authorization(_) => log::error!(target: CRITICAL, "{err}"),
    }
}
