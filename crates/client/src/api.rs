use async_trait::async_trait;
use interviewdesk_core::{
    errors::DeskResult,
    models::{
        BookSlotRequest, InterviewSlot, Interviewer, InterviewerId, InterviewerRequest,
        Notification, PaginatedResponse, SlotId,
    },
};

/// Largest page the backend will serve for the available-slots listing.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Operations the scheduling backend exposes to the desk.
///
/// Every method maps to exactly one request. Non-2xx answers come back as
/// [`DeskError::Api`](interviewdesk_core::errors::DeskError::Api) carrying the
/// server's `message`, transport failures as
/// [`DeskError::Network`](interviewdesk_core::errors::DeskError::Network).
/// Nothing is retried.
#[async_trait]
pub trait SchedulerApi: Send + Sync {
    /// Absolute URL of a backend path, for handing to a browser.
    fn url_for(&self, path: &str) -> String;

    async fn list_interviewers(&self) -> DeskResult<Vec<Interviewer>>;

    async fn get_interviewer(&self, id: InterviewerId) -> DeskResult<Interviewer>;

    async fn create_interviewer(&self, request: &InterviewerRequest) -> DeskResult<Interviewer>;

    async fn update_interviewer(
        &self,
        id: InterviewerId,
        request: &InterviewerRequest,
    ) -> DeskResult<Interviewer>;

    /// Deletes the interviewer; the backend cascades to their slots.
    async fn delete_interviewer(&self, id: InterviewerId) -> DeskResult<()>;

    /// Asks the backend to materialize bookable slots from the interviewer's
    /// availability templates.
    async fn generate_slots(&self, id: InterviewerId) -> DeskResult<()>;

    async fn list_interviewer_slots(&self, id: InterviewerId) -> DeskResult<Vec<InterviewSlot>>;

    async fn get_slot(&self, id: SlotId) -> DeskResult<InterviewSlot>;

    async fn cancel_slot(&self, id: SlotId) -> DeskResult<()>;

    /// One page of available slots. `limit` is clamped to [`MAX_PAGE_LIMIT`].
    async fn list_available_slots(
        &self,
        cursor: Option<String>,
        limit: u32,
    ) -> DeskResult<PaginatedResponse<InterviewSlot>>;

    async fn book_slot(&self, request: &BookSlotRequest) -> DeskResult<InterviewSlot>;

    /// Replaces the candidate on a booked slot. The backend refuses slots
    /// that are not booked.
    async fn update_slot(&self, id: SlotId, request: &BookSlotRequest) -> DeskResult<InterviewSlot>;

    /// Notifications sent to `email`, newest first.
    async fn list_notifications_for_email(&self, email: &str) -> DeskResult<Vec<Notification>>;

    async fn list_notifications_for_slot(&self, id: SlotId) -> DeskResult<Vec<Notification>>;
}
