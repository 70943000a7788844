//! # Admin Form
//!
//! Create and edit interviewers together with their weekly availability
//! templates, and trigger the per-interviewer backend actions (generate slots,
//! delete, list slots).
//!
//! The form keeps raw input values exactly as typed. They are only
//! interpreted when the form is submitted: incomplete availability rows are
//! dropped and `maxInterviewsPerWeek` is read with `parseInt` rules.
//!
//! Whether a submission creates or updates is an explicit [`FormMode`], set by
//! [`AdminForm::edit_interviewer`] and cleared by [`AdminForm::reset`].
//!
//! The backend does not send an interviewer's templates back, so an update
//! from a form whose rows were never filled or touched leaves
//! `availabilitySlots` out of the payload and the stored availability stays.

use std::{str::FromStr, sync::Arc};

use interviewdesk_client::{SchedulerApi, paths};
use interviewdesk_core::{
    errors::DeskError,
    models::{
        AvailabilitySlot, DayOfWeek, InterviewerId, InterviewerRequest,
        availability::parse_wall_clock,
    },
};
use tracing::{info, warn};

use super::{Outcome, failure_message};
use crate::notifier::{Navigator, Notifier};

pub type RowId = u32;

/// Create a new interviewer, or update an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Update(InterviewerId),
}

impl FormMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Interviewer",
            FormMode::Update(_) => "Update Interviewer",
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            FormMode::Create => "created",
            FormMode::Update(_) => "updated",
        }
    }
}

/// Raw values of the interviewer fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub max_interviews_per_week: String,
}

/// One editable availability row: a day selector and two time inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    pub id: RowId,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

impl SlotRow {
    fn empty(id: RowId) -> Self {
        Self {
            id,
            day_of_week: String::new(),
            start_time: String::new(),
            end_time: String::new(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.day_of_week.trim().is_empty()
            && !self.start_time.trim().is_empty()
            && !self.end_time.trim().is_empty()
    }
}

/// One availability row given as `DAY,START,END`, e.g. `MONDAY,09:00,17:00`.
///
/// Parts are kept as typed; they are read when the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSpec {
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

impl FromStr for SlotSpec {
    type Err = DeskError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [day, start, end] if !day.is_empty() && !start.is_empty() && !end.is_empty() => Ok(Self {
                day_of_week: day.to_string(),
                start_time: start.to_string(),
                end_time: end.to_string(),
            }),
            _ => Err(DeskError::Validation(format!(
                "expected DAY,START,END, got {:?}",
                raw
            ))),
        }
    }
}

/// Field values to overwrite in one go. `None` and an empty `slots` list
/// leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub max_interviews_per_week: Option<String>,
    pub slots: Vec<SlotSpec>,
}

pub struct AdminForm {
    api: Arc<dyn SchedulerApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    fields: FormFields,
    rows: Vec<SlotRow>,
    next_row: RowId,
    // rows added, filled or removed since the last reset
    rows_touched: bool,
    mode: FormMode,
}

impl AdminForm {
    pub fn new(
        api: Arc<dyn SchedulerApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            fields: FormFields::default(),
            rows: Vec::new(),
            next_row: 1,
            rows_touched: false,
            mode: FormMode::Create,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn rows(&self) -> &[SlotRow] {
        &self.rows
    }

    pub fn row_mut(&mut self, id: RowId) -> Option<&mut SlotRow> {
        self.rows_touched = true;
        self.rows.iter_mut().find(|row| row.id == id)
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    /// Appends an empty availability row and returns its id.
    pub fn add_slot(&mut self) -> RowId {
        let id = self.next_row;
        self.next_row += 1;
        self.rows_touched = true;
        self.rows.push(SlotRow::empty(id));
        id
    }

    /// Fills in a row. Returns `false` when the row does not exist.
    pub fn set_slot(&mut self, id: RowId, day_of_week: &str, start_time: &str, end_time: &str) -> bool {
        match self.row_mut(id) {
            Some(row) => {
                row.day_of_week = day_of_week.to_string();
                row.start_time = start_time.to_string();
                row.end_time = end_time.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes a row. Unknown ids are ignored.
    pub fn remove_slot(&mut self, id: RowId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| row.id != id);
        let removed = self.rows.len() != before;
        self.rows_touched |= removed;
        removed
    }

    /// Applies `changes` to the fields. Given slots replace every row.
    pub fn apply_changes(&mut self, changes: &FormChanges) {
        if let Some(name) = &changes.name {
            self.fields.name = name.clone();
        }
        if let Some(email) = &changes.email {
            self.fields.email = email.clone();
        }
        if let Some(max) = &changes.max_interviews_per_week {
            self.fields.max_interviews_per_week = max.clone();
        }

        if changes.slots.is_empty() {
            return;
        }
        self.rows.clear();
        self.rows_touched = true;
        for slot in &changes.slots {
            let id = self.add_slot();
            self.set_slot(id, &slot.day_of_week, &slot.start_time, &slot.end_time);
        }
    }

    /// Back to an empty form in create mode.
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.rows.clear();
        self.rows_touched = false;
        self.mode = FormMode::Create;
    }

    /// The payload a submission would send right now.
    pub fn build_request(&self) -> InterviewerRequest {
        self.request_for(self.mode)
    }

    fn request_for(&self, mode: FormMode) -> InterviewerRequest {
        let keep_stored = matches!(mode, FormMode::Update(_)) && self.rows.is_empty() && !self.rows_touched;

        InterviewerRequest {
            name: self.fields.name.clone(),
            email: self.fields.email.clone(),
            max_interviews_per_week: parse_int(&self.fields.max_interviews_per_week),
            availability_slots: (!keep_stored).then(|| collect_slots(&self.rows)),
        }
    }

    pub async fn generate_slots(&self, interviewer_id: InterviewerId) -> Outcome {
        info!(interviewer_id, "generating interview slots");

        match self.api.generate_slots(interviewer_id).await {
            Ok(()) => {
                self.notifier.alert("Slots generated successfully!");
                Outcome::Completed
            }
            Err(e) => {
                let message = failure_message("Error generating slots", &e);
                self.notifier.alert(&message);
                Outcome::Failed(message)
            }
        }
    }

    /// Loads an interviewer into the form and switches to update mode.
    ///
    /// Availability rows are replaced only when the backend sends the
    /// interviewer's templates along; otherwise the current rows stay.
    pub async fn edit_interviewer(&mut self, interviewer_id: InterviewerId) -> Outcome {
        let interviewer = match self.api.get_interviewer(interviewer_id).await {
            Ok(interviewer) => interviewer,
            Err(e) => {
                let message = format!("Error loading interviewer data: {}", e);
                self.notifier.alert(&message);
                return Outcome::Failed(message);
            }
        };

        self.fields = FormFields {
            name: interviewer.name,
            email: interviewer.email,
            max_interviews_per_week: interviewer.max_interviews_per_week.to_string(),
        };

        if !interviewer.availability_slots.is_empty() {
            self.rows.clear();
            for slot in &interviewer.availability_slots {
                let id = self.add_slot();
                self.set_slot(
                    id,
                    slot.day_of_week.as_str(),
                    &slot.start_time.format("%H:%M").to_string(),
                    &slot.end_time.format("%H:%M").to_string(),
                );
            }
        }

        if self.rows.is_empty() {
            // nothing to show, so nothing to overwrite on submit
            self.rows_touched = false;
        }

        self.mode = FormMode::Update(interviewer_id);
        self.notifier
            .alert("Form loaded with interviewer data. Modify and submit to update.");
        Outcome::Completed
    }

    pub async fn delete_interviewer(&self, interviewer_id: InterviewerId) -> Outcome {
        if !self.notifier.confirm(
            "Are you sure you want to delete this interviewer? This will also delete all their slots.",
        ) {
            return Outcome::Declined;
        }

        match self.api.delete_interviewer(interviewer_id).await {
            Ok(()) => {
                info!(interviewer_id, "interviewer deleted");
                self.notifier.alert("Interviewer deleted successfully!");
                self.navigator.reload();
                Outcome::Completed
            }
            Err(e) => {
                let message = failure_message("Error deleting interviewer", &e);
                self.notifier.alert(&message);
                Outcome::Failed(message)
            }
        }
    }

    /// Submits the form in its current mode.
    pub async fn submit(&self) -> Outcome {
        self.submit_as(self.mode).await
    }

    /// Submits the form, creating or updating according to `mode`.
    pub async fn submit_as(&self, mode: FormMode) -> Outcome {
        let request = self.request_for(mode);

        let result = match mode {
            FormMode::Create => self.api.create_interviewer(&request).await,
            FormMode::Update(id) => self.api.update_interviewer(id, &request).await,
        };

        match result {
            Ok(interviewer) => {
                info!(interviewer_id = interviewer.id, "interviewer {}", mode.past_tense());
                self.notifier
                    .alert(&format!("Interviewer {} successfully!", mode.past_tense()));
                self.navigator.reload();
                Outcome::Completed
            }
            Err(e) => {
                let message = failure_message("Error", &e);
                self.notifier.alert(&message);
                Outcome::Failed(message)
            }
        }
    }

    /// Opens the interviewer's slot listing in a new browsing context.
    pub fn view_slots(&self, interviewer_id: InterviewerId) {
        let url = self.api.url_for(&paths::interviewer_slots(interviewer_id));
        self.navigator.open(&url);
    }
}

/// Turns the availability rows into templates.
///
/// Rows with an empty field are dropped silently. Rows whose values cannot be
/// read as a day and two wall-clock times are dropped with a warning.
pub fn collect_slots(rows: &[SlotRow]) -> Vec<AvailabilitySlot> {
    rows.iter()
        .filter(|row| row.is_complete())
        .filter_map(|row| {
            let day = row.day_of_week.parse::<DayOfWeek>().ok();
            let start = parse_wall_clock(&row.start_time);
            let end = parse_wall_clock(&row.end_time);

            match (day, start, end) {
                (Some(day_of_week), Some(start_time), Some(end_time)) => Some(AvailabilitySlot {
                    day_of_week,
                    start_time,
                    end_time,
                }),
                _ => {
                    warn!(row = row.id, "dropping unreadable availability row");
                    None
                }
            }
        })
        .collect()
}

/// Reads a leading integer the way `parseInt(value, 10)` does: optional
/// leading whitespace and sign, then digits up to the first non-digit.
pub fn parse_int(raw: &str) -> Option<i32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = &rest[..rest.bytes().take_while(u8::is_ascii_digit).count()];
    if digits.is_empty() {
        return None;
    }

    let value: i64 = digits.parse().ok()?;
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}
