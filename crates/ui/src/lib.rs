//! # InterviewDesk UI
//!
//! The operator-facing views of the desk and the capabilities they are driven
//! through:
//!
//! - **Views**: [`views::admin_form::AdminForm`], [`views::booked_slots::BookedSlotsView`],
//!   [`views::slot_detail::SlotDetailViewer`], the booking helpers in
//!   [`views::booking`] and the notification log in [`views::notifications`]
//! - **Capabilities**: [`notifier::Notifier`] for blocking alerts and
//!   confirmations, [`notifier::Navigator`] for reloads and new windows, and
//!   [`views::booked_slots::Surface`] and
//!   [`views::notifications::NotificationSurface`] for the boards
//! - **Console**: terminal implementations of those capabilities
//!
//! Views never hold cached backend data; every render re-fetches.

/// Environment configuration for the desk
pub mod config;
/// Terminal implementations of the capabilities
pub mod console;
/// Date and time formatting shared by the views
pub mod format;
/// Alert/confirm and navigation capabilities
pub mod notifier;
/// The desk views
pub mod views;

pub use notifier::{Navigator, Notifier};
pub use views::Outcome;
