use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::availability::AvailabilitySlot;

pub type InterviewerId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interviewer {
    pub id: InterviewerId,
    pub name: String,
    pub email: String,
    pub max_interviews_per_week: i32,
    // The backend does not serialize the templates on every endpoint.
    #[serde(default)]
    pub availability_slots: Vec<AvailabilitySlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Payload for both creating and updating an interviewer.
///
/// `max_interviews_per_week` is `None` when the form value could not be read
/// as an integer; it is sent as `null` and the backend rejects it.
///
/// `availability_slots` replaces every stored template when present, even
/// when empty. `None` leaves the key out, so an update keeps the interviewer's
/// current availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewerRequest {
    pub name: String,
    pub email: String,
    pub max_interviews_per_week: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_slots: Option<Vec<AvailabilitySlot>>,
}
