//! # InterviewDesk Client
//!
//! Typed access to the interview-scheduling REST backend.
//!
//! Everything above this crate talks to the backend through the
//! [`SchedulerApi`] trait. [`HttpSchedulerApi`] is the production
//! implementation over `reqwest`; [`mock::MockSchedulerApi`] stands in for it
//! in tests.

pub mod api;
pub mod config;
pub mod http;
pub mod paths;

pub mod mock;

pub use api::SchedulerApi;
pub use http::HttpSchedulerApi;

use std::sync::Arc;

use interviewdesk_core::errors::DeskResult;

/// Builds the shared HTTP client for the configured backend.
pub fn create_client(config: &config::ClientConfig) -> DeskResult<Arc<dyn SchedulerApi>> {
    let api = HttpSchedulerApi::new(config)?;
    Ok(Arc::new(api))
}
