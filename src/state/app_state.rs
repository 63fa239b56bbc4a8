//! Application state definitions

use super::{FormFocus, FormState, SubmissionPayload, SubmissionStatus};
use crate::neighborhoods::{self, NEIGHBORHOODS};
use crate::submit::SubmissionOutcome;
use chrono::Utc;

/// Message shown when a submit is attempted while one is in flight
pub const ALREADY_PENDING_MESSAGE: &str = "Submission already in progress";

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Search form values
    pub form: FormState,
    /// Which form element receives key input
    pub focus: FormFocus,
    /// Highlighted row in the neighborhood list
    pub neighborhood_cursor: usize,
    /// Lifecycle of the most recent submission
    pub submission: SubmissionStatus,
    /// Transient status bar message, cleared on the next key press
    pub status_message: Option<String>,
}

impl AppState {
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn cursor_up(&mut self) {
        self.neighborhood_cursor = self.neighborhood_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let last = NEIGHBORHOODS.len().saturating_sub(1);
        self.neighborhood_cursor = (self.neighborhood_cursor + 1).min(last);
    }

    /// Toggle the neighborhood under the list cursor
    pub fn toggle_at_cursor(&mut self) {
        if let Some(neighborhood) = neighborhoods::get(self.neighborhood_cursor) {
            self.form.toggle_neighborhood(neighborhood.value);
        }
    }

    /// Start a submission.
    ///
    /// Returns the payload to send, or `None` when a submission is already
    /// pending. The error slot is cleared before the payload is built.
    pub fn begin_submission(&mut self) -> Option<SubmissionPayload> {
        if self.submission.is_pending() {
            self.status_message = Some(ALREADY_PENDING_MESSAGE.to_string());
            return None;
        }

        self.form.clear_error();
        self.submission = SubmissionStatus::Pending {
            started_at: Utc::now(),
        };
        Some(SubmissionPayload::from(&self.form))
    }

    /// Record the result of the in-flight submission
    pub fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        let at = Utc::now();
        match outcome {
            SubmissionOutcome::Succeeded(response) => {
                self.form.clear_error();
                self.status_message = Some("Data submitted successfully".to_string());
                self.submission = SubmissionStatus::Succeeded { at, response };
            }
            SubmissionOutcome::Failed(message) => {
                self.form.set_error(message);
                self.submission = SubmissionStatus::Failed { at };
            }
        }
    }
}
