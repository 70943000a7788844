//! Read-only log of the emails the backend queued, looked up by recipient or
//! by interview slot.

use std::{fmt, sync::Arc};

use chrono::NaiveDateTime;
use interviewdesk_client::SchedulerApi;
use interviewdesk_core::{
    errors::DeskResult,
    models::{Notification, SlotId},
};
use tracing::{debug, error};

use super::Outcome;
use crate::format::{format_date, format_time};

/// Where the notification log is drawn.
pub trait NotificationSurface: Send + Sync {
    fn show_notifications(&self, panel: &NotificationPanel);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationPanel {
    Loading(String),
    LoadError(String),
    Empty(String),
    List {
        title: String,
        rows: Vec<NotificationRow>,
    },
}

/// One rendered notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRow {
    pub subject: String,
    pub kind: String,
    pub status: String,
    pub recipient: String,
    pub created: String,
    /// `-` until the backend has delivered it
    pub sent: String,
    pub error: Option<String>,
}

impl From<&Notification> for NotificationRow {
    fn from(notification: &Notification) -> Self {
        let stamp = |at: &NaiveDateTime| format!("{} {}", format_date(at), format_time(at));

        Self {
            subject: notification.subject.clone(),
            kind: notification.kind.to_string(),
            status: notification.status.to_string(),
            recipient: notification.recipient_email.clone(),
            created: stamp(&notification.created_at),
            sent: notification
                .sent_at
                .as_ref()
                .map(stamp)
                .unwrap_or_else(|| "-".to_string()),
            error: notification
                .error_message
                .clone()
                .filter(|message| !message.trim().is_empty()),
        }
    }
}

impl fmt::Display for NotificationPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationPanel::Loading(text) => writeln!(f, "... {}", text),
            NotificationPanel::LoadError(message) | NotificationPanel::Empty(message) => {
                writeln!(f, "{}", message)
            }
            NotificationPanel::List { title, rows } => {
                writeln!(f, "{} ({})", title, rows.len())?;
                for row in rows {
                    writeln!(f)?;
                    writeln!(f, "{}  [{} / {}]", row.subject, row.kind, row.status)?;
                    writeln!(f, "  To:      {}", row.recipient)?;
                    writeln!(f, "  Created: {}", row.created)?;
                    writeln!(f, "  Sent:    {}", row.sent)?;
                    if let Some(error) = &row.error {
                        writeln!(f, "  Error:   {}", error)?;
                    }
                }
                Ok(())
            }
        }
    }
}

pub struct NotificationsView {
    api: Arc<dyn SchedulerApi>,
    surface: Arc<dyn NotificationSurface>,
}

impl NotificationsView {
    pub fn new(api: Arc<dyn SchedulerApi>, surface: Arc<dyn NotificationSurface>) -> Self {
        Self { api, surface }
    }

    /// Shows every notification addressed to `email`, newest first.
    pub async fn load_for_email(&self, email: &str) -> Outcome {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            let message = "Please enter a valid email address.".to_string();
            self.surface
                .show_notifications(&NotificationPanel::LoadError(message.clone()));
            return Outcome::Failed(message);
        }

        self.show_loading();
        let result = self.api.list_notifications_for_email(email).await;
        self.show(
            result,
            format!("Notifications for {}", email),
            format!("No notifications found for {}.", email),
        )
    }

    /// Shows every notification raised for one interview slot.
    pub async fn load_for_slot(&self, slot_id: SlotId) -> Outcome {
        self.show_loading();
        let result = self.api.list_notifications_for_slot(slot_id).await;
        self.show(
            result,
            format!("Notifications for slot #{}", slot_id),
            format!("No notifications found for slot #{}.", slot_id),
        )
    }

    fn show_loading(&self) {
        self.surface
            .show_notifications(&NotificationPanel::Loading("Loading notifications...".to_string()));
    }

    fn show(&self, result: DeskResult<Vec<Notification>>, title: String, empty: String) -> Outcome {
        let notifications = match result {
            Ok(notifications) => notifications,
            Err(e) => {
                error!("Error loading notifications: {}", e);
                let message = "Error loading notifications. Please try again.".to_string();
                self.surface
                    .show_notifications(&NotificationPanel::LoadError(message.clone()));
                return Outcome::Failed(message);
            }
        };

        debug!(count = notifications.len(), "loaded notifications");
        let panel = if notifications.is_empty() {
            NotificationPanel::Empty(empty)
        } else {
            NotificationPanel::List {
                title,
                rows: notifications.iter().map(NotificationRow::from).collect(),
            }
        };
        self.surface.show_notifications(&panel);
        Outcome::Completed
    }
}
