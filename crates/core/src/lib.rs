//! # InterviewDesk Core
//!
//! Shared domain types for the InterviewDesk client: interviewers, their weekly
//! availability templates, bookable interview slots, and the error type every
//! other crate reports through.

pub mod errors;
pub mod models;
