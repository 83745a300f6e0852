//! In-memory doubles for the outbound services.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use super::{MessageSender, StatusSource};
use crate::error::{AppError, Result};

/// Records delivered messages; can be told to fail upcoming sends.
#[derive(Clone, Default)]
pub struct RecordingSender {
    sent: Arc<Mutex<Vec<String>>>,
    attempts: Arc<Mutex<usize>>,
    failures: Arc<Mutex<VecDeque<AppError>>>,
}

impl RecordingSender {
    pub fn fail_next(&self, err: AppError) {
        self.failures.lock().unwrap().push_back(err);
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl MessageSender for RecordingSender {
    async fn send(&self, text: &str) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;
        if let Some(err) = self.failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Replays queued responses and records the cursors it was asked for.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    responses: Arc<Mutex<VecDeque<Result<Value>>>>,
    requests: Arc<Mutex<Vec<i64>>>,
}

impl ScriptedSource {
    pub fn push(&self, response: Result<Value>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<i64> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusSource for ScriptedSource {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        self.requests.lock().unwrap().push(from_date);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::shape("no scripted response")))
    }
}
