// src/services/api.rs

//! Review API client.
//!
//! Performs the single GET per cycle and hands back the decoded body
//! untouched. Shape checks belong to the pipeline.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, RequestInfo, Result};
use crate::models::Config;

/// Placeholder written in place of the OAuth secret in diagnostics.
const REDACTED: &str = "OAuth ***";

/// Source of homework status responses.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch statuses changed since `from_date` (seconds since epoch).
    async fn fetch(&self, from_date: i64) -> Result<Value>;
}

/// Client for the Practicum homework status endpoint.
pub struct PracticumClient {
    client: Client,
    endpoint: Url,
    authorization: String,
}

impl PracticumClient {
    /// Create a client for the configured endpoint and token.
    pub fn new(config: &Config, client: Client) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            authorization: config.authorization(),
        }
    }

    /// Request parameters with the secret stripped, for error reports.
    fn request_info(&self, from_date: i64) -> RequestInfo {
        RequestInfo {
            endpoint: self.endpoint.to_string(),
            headers: vec![(AUTHORIZATION.as_str().to_string(), REDACTED.to_string())],
            from_date,
        }
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value> {
        log::debug!("Requesting statuses from {} since {}", self.endpoint, from_date);

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, &self.authorization)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| AppError::transport(e, self.request_info(from_date)))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AppError::EndpointStatus {
                status: status.as_u16(),
                request: self.request_info(from_date),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::transport(e, self.request_info(from_date)))?;

        Ok(serde_json::from_slice(&body)?)
    }
}
