#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use interviewdesk_client::mock::MockSchedulerApi;
use interviewdesk_core::models::{
    InterviewSlot, Interviewer, Notification, NotificationStatus, NotificationType, SlotStatus,
};
use interviewdesk_ui::views::{
    booked_slots::{SlotPanel, Surface},
    notifications::{NotificationPanel, NotificationSurface},
};

pub const BASE_URL: &str = "http://desk.test";

pub fn interviewer(id: i64, name: &str) -> Interviewer {
    Interviewer {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        max_interviews_per_week: 5,
        availability_slots: vec![],
        created_at: None,
        updated_at: None,
    }
}

pub fn slot(id: i64, interviewer_name: &str, status: SlotStatus) -> InterviewSlot {
    let day = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    let booked = status == SlotStatus::Booked;

    InterviewSlot {
        id,
        interviewer_id: None,
        interviewer_name: interviewer_name.to_string(),
        interviewer_email: None,
        start_time: day.and_hms_opt(9, 0, 0).unwrap(),
        end_time: day.and_hms_opt(10, 0, 0).unwrap(),
        status,
        candidate_name: booked.then(|| "Charles".to_string()),
        candidate_email: booked.then(|| "charles@example.com".to_string()),
        booked_at: None,
    }
}

pub fn notification(id: i64, kind: NotificationType, status: NotificationStatus) -> Notification {
    let at = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
    let sent = status == NotificationStatus::Sent;

    Notification {
        id,
        recipient_email: "charles@example.com".to_string(),
        subject: "Interview Booking Confirmation".to_string(),
        content: None,
        kind,
        status,
        created_at: at,
        sent_at: sent.then_some(at),
        scheduled_for: Some(at),
        retry_count: Some(0),
        error_message: None,
        interview_slot_id: Some(42),
        interviewer_id: Some(1),
    }
}

/// A backend mock that answers `url_for` like a real client.
pub fn api_mock() -> MockSchedulerApi {
    let mut api = MockSchedulerApi::new();
    api.expect_url_for()
        .returning(|path| format!("{}{}", BASE_URL, path));
    api
}

/// Keeps every panel shown, in order.
#[derive(Default)]
pub struct RecordingSurface {
    panels: Mutex<Vec<SlotPanel>>,
    notifications: Mutex<Vec<NotificationPanel>>,
}

impl RecordingSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn panels(&self) -> Vec<SlotPanel> {
        self.panels.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<SlotPanel> {
        self.panels.lock().unwrap().last().cloned()
    }

    pub fn notification_panels(&self) -> Vec<NotificationPanel> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Surface for RecordingSurface {
    fn show(&self, panel: &SlotPanel) {
        self.panels.lock().unwrap().push(panel.clone());
    }
}

impl NotificationSurface for RecordingSurface {
    fn show_notifications(&self, panel: &NotificationPanel) {
        self.notifications.lock().unwrap().push(panel.clone());
    }
}
