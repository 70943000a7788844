use std::{sync::Arc, time::Duration};

use interviewdesk_client::SchedulerApi;
use interviewdesk_core::models::{InterviewSlot, SlotId};
use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior, interval_at},
};
use tracing::{debug, error};

use super::Outcome;
use crate::{
    format::{format_date, format_time_range},
    notifier::{Navigator, Notifier},
};

pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(30);

pub struct SlotDetailViewer {
    api: Arc<dyn SchedulerApi>,
    notifier: Arc<dyn Notifier>,
}

impl SlotDetailViewer {
    pub fn new(api: Arc<dyn SchedulerApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    pub async fn view_slot_details(&self, slot_id: SlotId) -> Outcome {
        match self.api.get_slot(slot_id).await {
            Ok(slot) => {
                self.notifier.alert(&slot_details_message(&slot));
                Outcome::Completed
            }
            Err(e) => {
                error!(slot_id, "Error loading slot details: {}", e);
                let message = "Error loading slot details".to_string();
                self.notifier.alert(&message);
                Outcome::Failed(message)
            }
        }
    }
}

pub fn slot_details_message(slot: &InterviewSlot) -> String {
    format!(
        "Slot Details:\nInterviewer: {}\nDate: {}\nTime: {}\nStatus: {}",
        slot.interviewer_name,
        format_date(&slot.start_time),
        format_time_range(&slot.start_time, &slot.end_time),
        slot.status,
    )
}

/// Reloads the page every `period` until the returned task is aborted.
///
/// The first reload happens one full period after the call. A period of zero
/// is treated as the default.
pub fn spawn_auto_refresh(navigator: Arc<dyn Navigator>, period: Duration) -> JoinHandle<()> {
    let period = if period.is_zero() {
        DEFAULT_REFRESH_PERIOD
    } else {
        period
    };

    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            debug!("auto-refresh reloading page");
            navigator.reload();
        }
    })
}
