//! Browsing open slots page by page, booking one for a candidate and changing
//! the candidate on an existing booking.

use std::sync::Arc;

use interviewdesk_client::{SchedulerApi, api::MAX_PAGE_LIMIT};
use interviewdesk_core::{
    errors::DeskError,
    models::{BookSlotRequest, SlotId},
};
use tracing::{error, info};

use super::{
    Outcome,
    booked_slots::{SlotPanel, Surface, render_slots},
    failure_message,
};
use crate::notifier::Notifier;

pub const AVAILABLE_TITLE: &str = "Available Slots";
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

pub struct BookingDesk {
    api: Arc<dyn SchedulerApi>,
    notifier: Arc<dyn Notifier>,
    surface: Arc<dyn Surface>,
}

impl BookingDesk {
    pub fn new(
        api: Arc<dyn SchedulerApi>,
        notifier: Arc<dyn Notifier>,
        surface: Arc<dyn Surface>,
    ) -> Self {
        Self {
            api,
            notifier,
            surface,
        }
    }

    /// Shows one page of available slots and returns the cursor of the next
    /// page, if there is one.
    pub async fn load_available(&self, cursor: Option<String>, limit: u32) -> Option<String> {
        self.surface
            .show(&SlotPanel::Loading("Loading available slots...".to_string()));

        let page = match self
            .api
            .list_available_slots(cursor, limit.clamp(1, MAX_PAGE_LIMIT))
            .await
        {
            Ok(page) => page,
            Err(e) => {
                error!("Error loading available slots: {}", e);
                self.surface.show(&SlotPanel::LoadError {
                    heading: None,
                    message: "Error loading slots. Please try again.".to_string(),
                });
                return None;
            }
        };

        let home_url = self.api.url_for("/");
        let panel = match render_slots(&page.data, AVAILABLE_TITLE, &home_url) {
            SlotPanel::Empty { title, home_url, .. } => SlotPanel::Empty {
                title,
                message: "No available slots right now. Check back later.".to_string(),
                home_url,
            },
            panel => panel,
        };
        self.surface.show(&panel);

        page.next_cursor.filter(|_| page.has_next)
    }

    pub async fn book_slot(&self, slot_id: SlotId, candidate_name: &str, candidate_email: &str) -> Outcome {
        let request = match self.candidate_request(slot_id, candidate_name, candidate_email) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        match self.api.book_slot(&request).await {
            Ok(slot) => {
                info!(slot_id = slot.id, "slot booked");
                self.notifier.alert(&format!(
                    "Slot booked successfully for {}!",
                    request.candidate_name
                ));
                Outcome::Completed
            }
            Err(e) => self.failed(&e),
        }
    }

    /// Puts a different candidate on an already booked slot.
    pub async fn update_booking(
        &self,
        slot_id: SlotId,
        candidate_name: &str,
        candidate_email: &str,
    ) -> Outcome {
        let request = match self.candidate_request(slot_id, candidate_name, candidate_email) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        match self.api.update_slot(slot_id, &request).await {
            Ok(slot) => {
                info!(slot_id = slot.id, "booking updated");
                self.notifier.alert(&format!(
                    "Booking updated successfully for {}!",
                    request.candidate_name
                ));
                Outcome::Completed
            }
            Err(e) => self.failed(&e),
        }
    }

    fn candidate_request(
        &self,
        slot_id: SlotId,
        candidate_name: &str,
        candidate_email: &str,
    ) -> Result<BookSlotRequest, Outcome> {
        let candidate_name = candidate_name.trim();
        let candidate_email = candidate_email.trim();

        let problem = if candidate_name.is_empty() || candidate_email.is_empty() {
            Some("Candidate name and email are required".to_string())
        } else if !candidate_email.contains('@') {
            Some(format!("Invalid email format: {}", candidate_email))
        } else {
            None
        };

        if let Some(message) = problem {
            self.notifier.alert(&message);
            return Err(Outcome::Failed(message));
        }

        Ok(BookSlotRequest {
            slot_id,
            candidate_name: candidate_name.to_string(),
            candidate_email: candidate_email.to_string(),
        })
    }

    fn failed(&self, err: &DeskError) -> Outcome {
        let message = failure_message("Error", err);
        self.notifier.alert(&message);
        Outcome::Failed(message)
    }
}
