use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{interview_slot::SlotId, interviewer::InterviewerId};

pub type NotificationId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    BookingConfirmation,
    InterviewReminder,
    CancellationNotice,
    SlotGenerationAlert,
    BookingUpdate,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationType::BookingConfirmation => "BOOKING_CONFIRMATION",
            NotificationType::InterviewReminder => "INTERVIEW_REMINDER",
            NotificationType::CancellationNotice => "CANCELLATION_NOTICE",
            NotificationType::SlotGenerationAlert => "SLOT_GENERATION_ALERT",
            NotificationType::BookingUpdate => "BOOKING_UPDATE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationStatus {
    Pending,
    Sent,
    Failed,
    Cancelled,
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationStatus::Pending => "PENDING",
            NotificationStatus::Sent => "SENT",
            NotificationStatus::Failed => "FAILED",
            NotificationStatus::Cancelled => "CANCELLED",
        };
        f.write_str(name)
    }
}

/// An email the backend queued for a candidate or an interviewer.
///
/// Read-only on the client: delivery and retries happen on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub recipient_email: String,
    pub subject: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub status: NotificationStatus,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub sent_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub scheduled_for: Option<NaiveDateTime>,
    #[serde(default)]
    pub retry_count: Option<i32>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub interview_slot_id: Option<SlotId>,
    #[serde(default)]
    pub interviewer_id: Option<InterviewerId>,
}
