// src/utils/http.rs

//! HTTP client utilities.

use crate::error::{AppError, Result};

/// User-Agent sent with every review-API request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Create the HTTP client used for the review API.
///
/// No request timeout is set; a hung request blocks the cycle until the
/// connection is dropped by the peer.
pub fn create_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))
}
