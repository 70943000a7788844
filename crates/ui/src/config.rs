//! # Desk Configuration
//!
//! Loads everything the desk needs from environment variables. Backend
//! connection settings are delegated to [`ClientConfig`]; on top of those:
//!
//! - `INTERVIEWDESK_FETCH_CONCURRENCY`: parallel per-interviewer slot fetches (default: 4)
//! - `INTERVIEWDESK_REFRESH_SECONDS`: slot detail auto-refresh period (default: 30)
//! - `INTERVIEWDESK_OPEN_BROWSER`: open slot listings in the system browser (default: false)
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{Result, WrapErr};
use interviewdesk_client::config::ClientConfig;
use std::{env, time::Duration};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Backend connection settings
    pub client: ClientConfig,

    /// Width of the per-interviewer fan-out; 1 fetches strictly in sequence
    pub fetch_concurrency: usize,

    /// Auto-refresh period for the slot detail page, in seconds
    pub refresh_interval: u64,

    /// Whether `view_slots` launches the system browser
    pub open_browser: bool,

    /// Log level for the application
    pub log_level: Level,
}

impl DeskConfig {
    /// Creates a new DeskConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The backend client settings are invalid
    /// - `INTERVIEWDESK_FETCH_CONCURRENCY` or `INTERVIEWDESK_REFRESH_SECONDS`
    ///   is set but is not a positive integer
    pub fn from_env() -> Result<Self> {
        let client = ClientConfig::from_env()?;

        let fetch_concurrency = positive_var("INTERVIEWDESK_FETCH_CONCURRENCY", 4)
            .wrap_err("Invalid INTERVIEWDESK_FETCH_CONCURRENCY value")?
            as usize;

        let refresh_interval = positive_var("INTERVIEWDESK_REFRESH_SECONDS", 30)
            .wrap_err("Invalid INTERVIEWDESK_REFRESH_SECONDS value")?;

        let open_browser = env::var("INTERVIEWDESK_OPEN_BROWSER")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        Ok(Self {
            client,
            fetch_concurrency,
            refresh_interval,
            open_browser,
            log_level,
        })
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            fetch_concurrency: 4,
            refresh_interval: 30,
            open_browser: false,
            log_level: Level::INFO,
        }
    }
}

fn positive_var(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|v| *v > 0)
            .ok_or_else(|| eyre::eyre!("expected a positive integer, got {:?}", raw)),
        Err(_) => Ok(default),
    }
}

pub fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

pub fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
