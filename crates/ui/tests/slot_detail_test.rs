mod test_utils;

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use interviewdesk_client::mock::MockSchedulerApi;
use interviewdesk_core::{errors::DeskError, models::SlotStatus};
use interviewdesk_ui::{
    notifier::{MockNotifier, Navigator},
    views::{
        Outcome,
        slot_detail::{SlotDetailViewer, slot_details_message, spawn_auto_refresh},
    },
};
use mockall::predicate::eq;
use pretty_assertions::assert_eq;

use test_utils::slot;

#[test]
fn test_slot_details_message() {
    let message = slot_details_message(&slot(42, "Ada", SlotStatus::Booked));

    assert_eq!(
        message,
        "Slot Details:\nInterviewer: Ada\nDate: Mon 06 May 2024\nTime: 09:00 - 10:00\nStatus: BOOKED"
    );
}

#[tokio::test]
async fn test_view_slot_details_alerts_fields() {
    let mut api = MockSchedulerApi::new();
    api.expect_get_slot()
        .with(eq(42))
        .times(1)
        .returning(|id| Ok(slot(id, "Ada", SlotStatus::Available)));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_alert()
        .withf(|message| message.starts_with("Slot Details:") && message.ends_with("Status: AVAILABLE"))
        .times(1)
        .return_const(());

    let viewer = SlotDetailViewer::new(Arc::new(api), Arc::new(notifier));
    assert_eq!(viewer.view_slot_details(42).await, Outcome::Completed);
}

#[test_log::test(tokio::test)]
async fn test_view_slot_details_failure() {
    let mut api = MockSchedulerApi::new();
    api.expect_get_slot()
        .returning(|_| Err(DeskError::Network("timed out".to_string())));

    let mut notifier = MockNotifier::new();
    notifier
        .expect_alert()
        .withf(|message| message == "Error loading slot details")
        .times(1)
        .return_const(());

    let viewer = SlotDetailViewer::new(Arc::new(api), Arc::new(notifier));
    assert_eq!(
        viewer.view_slot_details(7).await,
        Outcome::Failed("Error loading slot details".to_string())
    );
}

#[derive(Default)]
struct CountingNavigator {
    reloads: AtomicUsize,
}

impl Navigator for CountingNavigator {
    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }

    fn open(&self, _url: &str) {}
}

#[tokio::test(start_paused = true)]
async fn test_auto_refresh_reloads_every_period() {
    let navigator = Arc::new(CountingNavigator::default());
    let handle = spawn_auto_refresh(navigator.clone(), Duration::from_secs(30));

    tokio::time::sleep(Duration::from_secs(29)).await;
    assert_eq!(navigator.reloads.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(navigator.reloads.load(Ordering::SeqCst), 1);

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(navigator.reloads.load(Ordering::SeqCst), 3);

    handle.abort();
    let _ = handle.await;

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(navigator.reloads.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn test_auto_refresh_zero_period_uses_default() {
    let navigator = Arc::new(CountingNavigator::default());
    let handle = spawn_auto_refresh(navigator.clone(), Duration::ZERO);

    tokio::time::sleep(Duration::from_secs(31)).await;
    assert_eq!(navigator.reloads.load(Ordering::SeqCst), 1);

    handle.abort();
}
