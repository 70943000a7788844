//! Endpoint paths of the scheduling backend, relative to its origin.

use interviewdesk_core::models::{InterviewerId, SlotId};

pub const API_PREFIX: &str = "/api/v1";

pub fn interviewers() -> String {
    format!("{}/interviewers", API_PREFIX)
}

pub fn interviewer(id: InterviewerId) -> String {
    format!("{}/interviewers/{}", API_PREFIX, id)
}

pub fn generate_slots(id: InterviewerId) -> String {
    format!("{}/interviewers/{}/generate-slots", API_PREFIX, id)
}

pub fn interviewer_slots(id: InterviewerId) -> String {
    format!("{}/interview-slots/interviewer/{}", API_PREFIX, id)
}

pub fn slot(id: SlotId) -> String {
    format!("{}/interview-slots/{}", API_PREFIX, id)
}

pub fn cancel_slot(id: SlotId) -> String {
    format!("{}/interview-slots/{}/cancel", API_PREFIX, id)
}

pub fn available_slots() -> String {
    format!("{}/interview-slots/available", API_PREFIX)
}

pub fn book_slot() -> String {
    format!("{}/interview-slots/book", API_PREFIX)
}

pub fn update_slot(id: SlotId) -> String {
    slot(id)
}

/// Prefix of the notification lookups; the email segment is appended by the
/// caller so it can be percent-encoded.
pub fn notifications() -> String {
    format!("{}/notifications", API_PREFIX)
}

pub fn slot_notifications(id: SlotId) -> String {
    format!("{}/notifications/slot/{}", API_PREFIX, id)
}
