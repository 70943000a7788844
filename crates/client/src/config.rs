//! # Client Configuration
//!
//! Connection settings for the scheduling backend, read from the environment:
//!
//! - `INTERVIEWDESK_BASE_URL`: backend origin (default: "http://localhost:8080")
//! - `INTERVIEWDESK_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 30)

use eyre::{Result, WrapErr};
use std::{env, time::Duration};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin without the `/api/v1` prefix
    pub base_url: String,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            request_timeout: 30,
        }
    }

    /// Loads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the timeout is set but is not a positive integer.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("INTERVIEWDESK_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let request_timeout = match env::var("INTERVIEWDESK_REQUEST_TIMEOUT_SECONDS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| eyre::eyre!("{} is not a positive number of seconds", raw))
                .wrap_err("Invalid INTERVIEWDESK_REQUEST_TIMEOUT_SECONDS value")?,
            Err(_) => 30,
        };

        Ok(Self {
            base_url: normalize_base_url(&base_url),
            request_timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
