use async_trait::async_trait;
use interviewdesk_core::{
    errors::DeskResult,
    models::{
        BookSlotRequest, InterviewSlot, Interviewer, InterviewerId, InterviewerRequest,
        Notification, PaginatedResponse, SlotId,
    },
};
use mockall::mock;

use crate::api::SchedulerApi;

// Mock backend for testing the views
mock! {
    pub SchedulerApi {}

    #[async_trait]
    impl SchedulerApi for SchedulerApi {
        fn url_for(&self, path: &str) -> String;

        async fn list_interviewers(&self) -> DeskResult<Vec<Interviewer>>;

        async fn get_interviewer(&self, id: InterviewerId) -> DeskResult<Interviewer>;

        async fn create_interviewer(&self, request: &InterviewerRequest) -> DeskResult<Interviewer>;

        async fn update_interviewer(
            &self,
            id: InterviewerId,
            request: &InterviewerRequest,
        ) -> DeskResult<Interviewer>;

        async fn delete_interviewer(&self, id: InterviewerId) -> DeskResult<()>;

        async fn generate_slots(&self, id: InterviewerId) -> DeskResult<()>;

        async fn list_interviewer_slots(&self, id: InterviewerId) -> DeskResult<Vec<InterviewSlot>>;

        async fn get_slot(&self, id: SlotId) -> DeskResult<InterviewSlot>;

        async fn cancel_slot(&self, id: SlotId) -> DeskResult<()>;

        async fn list_available_slots(
            &self,
            cursor: Option<String>,
            limit: u32,
        ) -> DeskResult<PaginatedResponse<InterviewSlot>>;

        async fn book_slot(&self, request: &BookSlotRequest) -> DeskResult<InterviewSlot>;

        async fn update_slot(&self, id: SlotId, request: &BookSlotRequest) -> DeskResult<InterviewSlot>;

        async fn list_notifications_for_email(&self, email: &str) -> DeskResult<Vec<Notification>>;

        async fn list_notifications_for_slot(&self, id: SlotId) -> DeskResult<Vec<Notification>>;
    }
}
