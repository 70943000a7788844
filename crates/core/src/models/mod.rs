pub mod availability;
pub mod interview_slot;
pub mod interviewer;
pub mod notification;

pub use availability::{AvailabilitySlot, DayOfWeek};
pub use interview_slot::{BookSlotRequest, InterviewSlot, PaginatedResponse, SlotId, SlotStatus};
pub use interviewer::{Interviewer, InterviewerId, InterviewerRequest};
pub use notification::{Notification, NotificationId, NotificationStatus, NotificationType};
