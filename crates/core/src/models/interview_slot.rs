use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::interviewer::InterviewerId;

pub type SlotId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    Available,
    Booked,
    Cancelled,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlotStatus::Available => "AVAILABLE",
            SlotStatus::Booked => "BOOKED",
            SlotStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

/// A concrete bookable (or booked) instance generated from an availability
/// template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSlot {
    pub id: SlotId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewer_id: Option<InterviewerId>,
    pub interviewer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interviewer_email: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: SlotStatus,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booked_at: Option<NaiveDateTime>,
}

impl InterviewSlot {
    pub fn is_booked(&self) -> bool {
        self.status == SlotStatus::Booked
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSlotRequest {
    pub slot_id: SlotId,
    pub candidate_name: String,
    pub candidate_email: String,
}

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub prev_cursor: Option<String>,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
    #[serde(default)]
    pub size: usize,
}
