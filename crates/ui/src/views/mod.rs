use interviewdesk_core::errors::DeskError;

pub mod admin_form;
pub mod booked_slots;
pub mod booking;
pub mod notifications;
pub mod slot_detail;

/// How a user-triggered action ended.
///
/// Failures have already been shown to the user when an `Outcome` is returned;
/// the message is carried along for callers that log or test it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The user answered "no" to the confirmation.
    Declined,
    Failed(String),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }
}

/// User-facing text for a failed request.
///
/// Transport failures read "Network error: ..." regardless of the action;
/// anything else is prefixed with what was being attempted.
pub(crate) fn failure_message(action: &str, err: &DeskError) -> String {
    match err {
        DeskError::Network(_) => err.to_string(),
        _ => format!("{}: {}", action, err),
    }
}
