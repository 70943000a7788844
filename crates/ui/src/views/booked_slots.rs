//! # Booked Slots Board
//!
//! Collects every interviewer's interview slots into one board, optionally
//! keeping only booked ones, and lets the operator cancel bookings.
//!
//! ## Aggregation
//!
//! The backend only lists slots per interviewer, so a board load is:
//!
//! 1. Fetch the interviewer list (a failure here fails the whole board)
//! 2. Fetch each interviewer's slots, at most `fetch_concurrency` at a time
//! 3. Concatenate the results in interviewer order
//!
//! A failed per-interviewer fetch is logged and that interviewer's slots are
//! left out; the board still renders with everyone else.

use std::{fmt, sync::Arc};

use futures_util::stream::{self, StreamExt};
use interviewdesk_client::SchedulerApi;
use interviewdesk_core::models::{InterviewSlot, Interviewer, SlotId};
use tracing::{debug, error, info, warn};

use super::{Outcome, failure_message};
use crate::{
    format::{format_date, format_time_range, or_dash},
    notifier::Notifier,
};

pub const BOOKED_TITLE: &str = "Booked Slots";
pub const ALL_TITLE: &str = "All Slots";
pub const NO_BOOKED_SLOTS: &str = "No booked slots found. Book some slots first!";

/// Where the board is drawn.
pub trait Surface: Send + Sync {
    /// Replaces whatever the surface currently shows.
    fn show(&self, panel: &SlotPanel);
}

/// Everything the board can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotPanel {
    Loading(String),
    /// There is nobody to aggregate over yet.
    NoInterviewers,
    LoadError {
        heading: Option<String>,
        message: String,
    },
    Empty {
        title: String,
        message: String,
        /// Link back to the availability view.
        home_url: String,
    },
    Cards {
        title: String,
        cards: Vec<SlotCard>,
    },
}

/// One rendered slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCard {
    /// Target of the card's cancel control
    pub slot_id: SlotId,
    pub interviewer_name: String,
    pub status: String,
    pub date: String,
    pub time: String,
    pub candidate_name: String,
    pub candidate_email: String,
}

impl From<&InterviewSlot> for SlotCard {
    fn from(slot: &InterviewSlot) -> Self {
        Self {
            slot_id: slot.id,
            interviewer_name: slot.interviewer_name.clone(),
            status: slot.status.to_string(),
            date: format_date(&slot.start_time),
            time: format_time_range(&slot.start_time, &slot.end_time),
            candidate_name: or_dash(slot.candidate_name.as_deref()).to_string(),
            candidate_email: or_dash(slot.candidate_email.as_deref()).to_string(),
        }
    }
}

impl fmt::Display for SlotPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotPanel::Loading(text) => writeln!(f, "... {}", text),
            SlotPanel::NoInterviewers => {
                writeln!(f, "No Interviewers Found")?;
                writeln!(f, "Please add interviewers first in the admin panel.")
            }
            SlotPanel::LoadError { heading, message } => {
                if let Some(heading) = heading {
                    writeln!(f, "{}", heading)?;
                }
                writeln!(f, "{}", message)
            }
            SlotPanel::Empty {
                title,
                message,
                home_url,
            } => {
                writeln!(f, "{}", title)?;
                writeln!(f, "{}", message)?;
                writeln!(f, "View Available Slots: {}", home_url)
            }
            SlotPanel::Cards { title, cards } => {
                writeln!(f, "{} ({})", title, cards.len())?;
                for card in cards {
                    writeln!(f)?;
                    writeln!(f, "{}  [{}]", card.interviewer_name, card.status)?;
                    writeln!(f, "  Date:      {}", card.date)?;
                    writeln!(f, "  Time:      {}", card.time)?;
                    writeln!(f, "  Candidate: {}", card.candidate_name)?;
                    writeln!(f, "  Email:     {}", card.candidate_email)?;
                    writeln!(f, "  Cancel:    interviewdesk cancel {}", card.slot_id)?;
                }
                Ok(())
            }
        }
    }
}

/// Builds the panel for a list of slots.
///
/// An empty list gives a single empty-state panel and no cards.
pub fn render_slots(slots: &[InterviewSlot], title: &str, home_url: &str) -> SlotPanel {
    if slots.is_empty() {
        return SlotPanel::Empty {
            title: title.to_string(),
            message: NO_BOOKED_SLOTS.to_string(),
            home_url: home_url.to_string(),
        };
    }

    SlotPanel::Cards {
        title: title.to_string(),
        cards: slots.iter().map(SlotCard::from).collect(),
    }
}

/// Fetches the slots of every interviewer and concatenates them in
/// interviewer order.
///
/// Up to `concurrency` requests are in flight at once; results are still
/// joined in input order. Failed fetches are logged and skipped.
pub async fn aggregate_slots(
    api: &dyn SchedulerApi,
    interviewers: &[Interviewer],
    concurrency: usize,
) -> Vec<InterviewSlot> {
    let results: Vec<_> = stream::iter(interviewers)
        .map(|interviewer| async move {
            (interviewer.id, api.list_interviewer_slots(interviewer.id).await)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut all_slots = Vec::new();
    for (interviewer_id, result) in results {
        match result {
            Ok(slots) => {
                debug!(interviewer_id, count = slots.len(), "loaded interviewer slots");
                all_slots.extend(slots);
            }
            Err(e) => warn!(interviewer_id, "Error loading slots for interviewer: {}", e),
        }
    }

    all_slots
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Board {
    Booked,
    All,
}

impl Board {
    fn title(&self) -> &'static str {
        match self {
            Board::Booked => BOOKED_TITLE,
            Board::All => ALL_TITLE,
        }
    }

    fn loading_text(&self) -> &'static str {
        match self {
            Board::Booked => "Loading booked slots...",
            Board::All => "Loading all slots...",
        }
    }

    fn error_panel(&self) -> SlotPanel {
        match self {
            Board::Booked => SlotPanel::LoadError {
                heading: Some("Error Loading Slots".to_string()),
                message: "Please try refreshing the page.".to_string(),
            },
            Board::All => SlotPanel::LoadError {
                heading: None,
                message: "Error loading slots. Please try again.".to_string(),
            },
        }
    }
}

pub struct BookedSlotsView {
    api: Arc<dyn SchedulerApi>,
    notifier: Arc<dyn Notifier>,
    surface: Arc<dyn Surface>,
    fetch_concurrency: usize,
}

impl BookedSlotsView {
    pub fn new(
        api: Arc<dyn SchedulerApi>,
        notifier: Arc<dyn Notifier>,
        surface: Arc<dyn Surface>,
    ) -> Self {
        Self {
            api,
            notifier,
            surface,
            fetch_concurrency: 1,
        }
    }

    /// Sets how many interviewers are fetched in parallel (minimum 1).
    pub fn with_fetch_concurrency(mut self, fetch_concurrency: usize) -> Self {
        self.fetch_concurrency = fetch_concurrency.max(1);
        self
    }

    pub async fn load_booked_slots(&self) {
        self.load(Board::Booked).await;
    }

    pub async fn load_all_slots(&self) {
        self.load(Board::All).await;
    }

    async fn load(&self, board: Board) {
        self.surface.show(&SlotPanel::Loading(board.loading_text().to_string()));

        let interviewers = match self.api.list_interviewers().await {
            Ok(interviewers) => interviewers,
            Err(e) => {
                error!("Error loading {}: {}", board.title().to_lowercase(), e);
                self.surface.show(&board.error_panel());
                return;
            }
        };

        if interviewers.is_empty() && board == Board::Booked {
            self.surface.show(&SlotPanel::NoInterviewers);
            return;
        }

        let mut slots = aggregate_slots(self.api.as_ref(), &interviewers, self.fetch_concurrency).await;
        if board == Board::Booked {
            slots.retain(InterviewSlot::is_booked);
        }

        self.display_slots(&slots, board.title());
    }

    pub fn display_slots(&self, slots: &[InterviewSlot], title: &str) {
        let home_url = self.api.url_for("/");
        self.surface.show(&render_slots(slots, title, &home_url));
    }

    /// Cancels a booking and, on success, reloads the booked board in place.
    pub async fn cancel_booking(&self, slot_id: SlotId) -> Outcome {
        if !self
            .notifier
            .confirm("Are you sure you want to cancel this booking?")
        {
            return Outcome::Declined;
        }

        match self.api.cancel_slot(slot_id).await {
            Ok(()) => {
                info!(slot_id, "booking cancelled");
                self.notifier.alert("Booking cancelled successfully!");
                self.load_booked_slots().await;
                Outcome::Completed
            }
            Err(e) => {
                let message = failure_message("Error cancelling booking", &e);
                self.notifier.alert(&message);
                Outcome::Failed(message)
            }
        }
    }
}
