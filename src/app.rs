//! Application state and core logic

use crate::state::{AppState, FormFocus};
use crate::submit::{spawn_submission, SubmissionOutcome, SubmitClientTrait};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Endpoint shown in the status bar
    pub endpoint: String,
    /// Client used for submissions
    client: Arc<dyn SubmitClientTrait>,
    /// Sender handed to each submission task
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    /// Outcomes of finished submissions, drained by the event loop
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn SubmitClientTrait>, endpoint: impl Into<String>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            endpoint: endpoint.into(),
            client,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.state.status_message = None;

        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('s') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit();
                return;
            }
            KeyCode::Tab => {
                self.state.next_focus();
                return;
            }
            KeyCode::BackTab => {
                self.state.prev_focus();
                return;
            }
            _ => {}
        }

        match self.state.focus {
            focus if focus.is_text_field() => self.handle_text_key(key),
            FormFocus::Neighborhoods => self.handle_neighborhoods_key(key),
            FormFocus::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit();
                }
            }
            _ => {}
        }
    }

    /// Handle keys while a text field is focused
    fn handle_text_key(&mut self, key: KeyEvent) {
        let focus = self.state.focus;
        match key.code {
            // Ctrl+U clears the whole field
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => match focus {
                FormFocus::Url => self.state.form.set_url(""),
                FormFocus::Title => self.state.form.set_title(""),
                _ => {}
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.push_char(focus, c);
            }
            KeyCode::Backspace => self.state.form.pop_char(focus),
            KeyCode::Enter => self.state.next_focus(),
            _ => {}
        }
    }

    /// Handle keys in the neighborhood checkbox list
    fn handle_neighborhoods_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.cursor_down(),
            KeyCode::Char(' ') | KeyCode::Enter => self.state.toggle_at_cursor(),
            _ => {}
        }
    }

    /// Start a submission in the background unless one is already pending
    pub fn submit(&mut self) {
        let Some(payload) = self.state.begin_submission() else {
            tracing::debug!("Submit ignored, a submission is already pending");
            return;
        };

        spawn_submission(self.client.clone(), payload, self.outcome_tx.clone());
    }

    /// Apply outcomes of finished submissions.
    /// Returns true if anything changed.
    pub fn poll_outcomes(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.state.apply_outcome(outcome);
            changed = true;
        }
        changed
    }
}
