//! Application state management for the terminal application form.
//!
//! This module contains the main application state: which control has focus,
//! the text cursor, the help screen and the toast currently on screen. Field
//! values, errors and submission live in the [`FormController`].

use std::time::{Duration, Instant};

use super::controller::{FormController, SubmitOutcome};
use super::notification::Toast;
use crate::domain::{Field, FieldKind};
use crate::infrastructure::{Settings, SimulatedGateway, SubmissionGateway};

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Filling in the form
    Normal,
    /// Help screen is displayed
    Help,
}

/// The control that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
}

impl Focus {
    const ORDER: [Focus; 8] = [
        Focus::Field(Field::FirstName),
        Focus::Field(Field::LastName),
        Focus::Field(Field::Email),
        Focus::Field(Field::Phone),
        Focus::Field(Field::Position),
        Focus::Field(Field::Experience),
        Focus::Field(Field::Message),
        Focus::Submit,
    ];

    fn position(self) -> usize {
        match self {
            Focus::Field(field) => field.index(),
            Focus::Submit => Self::ORDER.len() - 1,
        }
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Focus {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use applyform::application::{App, Focus};
/// use applyform::domain::Field;
///
/// let app = App::default();
/// assert_eq!(app.focus, Focus::Field(Field::FirstName));
/// assert!(!app.form.submitting());
/// ```
#[derive(Debug)]
pub struct App {
    /// Field values, errors and submission state
    pub form: FormController,
    /// Current application mode
    pub mode: AppMode,
    /// Control that receives typed input
    pub focus: Focus,
    /// Cursor position within the focused text field, in characters
    pub cursor_position: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Notification currently shown on screen
    pub toast: Option<Toast>,
    /// How long a notification stays on screen
    pub toast_duration: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self::with_gateway(
            Box::new(SimulatedGateway::new(settings.submit_delay)),
            settings.toast_duration,
        )
    }

    pub fn with_gateway(gateway: Box<dyn SubmissionGateway>, toast_duration: Duration) -> Self {
        Self {
            form: FormController::new(gateway),
            mode: AppMode::Normal,
            focus: Focus::Field(Field::FirstName),
            cursor_position: 0,
            help_scroll: 0,
            status_message: None,
            toast: None,
            toast_duration,
        }
    }

    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }

    fn focused_text_field(&self) -> Option<Field> {
        self.focused_field()
            .filter(|field| !matches!(field.kind(), FieldKind::Select(_)))
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.cursor_position = match focus {
            Focus::Field(field) => self.form.value(field).chars().count(),
            Focus::Submit => 0,
        };
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus.previous());
    }

    fn byte_offset(value: &str, chars: usize) -> usize {
        value
            .char_indices()
            .nth(chars)
            .map(|(idx, _)| idx)
            .unwrap_or(value.len())
    }

    /// Inserts a character at the cursor of the focused text field.
    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        let mut value = self.form.value(field).to_string();
        let at = Self::byte_offset(&value, self.cursor_position);
        value.insert(at, c);
        self.form.update_field(field, value);
        self.cursor_position += 1;
    }

    pub fn delete_backward(&mut self) {
        match self.focused_field().map(|field| (field, field.kind())) {
            Some((field, FieldKind::Select(_))) => self.clear_selection(field),
            Some((field, _)) if self.cursor_position > 0 => {
                let mut value = self.form.value(field).to_string();
                let at = Self::byte_offset(&value, self.cursor_position - 1);
                value.remove(at);
                self.form.update_field(field, value);
                self.cursor_position -= 1;
            }
            _ => {}
        }
    }

    pub fn delete_forward(&mut self) {
        match self.focused_field().map(|field| (field, field.kind())) {
            Some((field, FieldKind::Select(_))) => self.clear_selection(field),
            Some((field, _)) => {
                let mut value = self.form.value(field).to_string();
                if self.cursor_position < value.chars().count() {
                    let at = Self::byte_offset(&value, self.cursor_position);
                    value.remove(at);
                    self.form.update_field(field, value);
                }
            }
            None => {}
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(field) = self.focused_text_field() {
            let len = self.form.value(field).chars().count();
            if self.cursor_position < len {
                self.cursor_position += 1;
            }
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        if let Some(field) = self.focused_text_field() {
            self.cursor_position = self.form.value(field).chars().count();
        }
    }

    /// Selects the next (or previous) option of the focused drop-down.
    ///
    /// From the empty placeholder, forward picks the first option and backward
    /// the last; cycling past either end returns to the placeholder.
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let FieldKind::Select(options) = field.kind() else {
            return;
        };
        let current = options.iter().position(|opt| opt.value == self.form.value(field));
        // Slot 0 is the placeholder; options occupy 1..=len.
        let slots = options.len() + 1;
        let slot = current.map(|idx| idx + 1).unwrap_or(0);
        let next = if forward {
            (slot + 1) % slots
        } else {
            (slot + slots - 1) % slots
        };
        let value = if next == 0 { "" } else { options[next - 1].value };
        self.form.update_field(field, value);
    }

    fn clear_selection(&mut self, field: Field) {
        if !self.form.value(field).is_empty() {
            self.form.update_field(field, "");
        }
    }

    /// Validates and, if the form is valid, starts submitting it.
    pub fn submit(&mut self, now: Instant) {
        match self.form.submit(now) {
            SubmitOutcome::Rejected(count) => {
                let noun = if count == 1 { "field needs" } else { "fields need" };
                self.status_message = Some(format!("{count} {noun} attention"));
                let first = self.form.errors().iter().next().map(|(field, _)| field);
                if let Some(first) = first {
                    self.set_focus(Focus::Field(first));
                }
            }
            SubmitOutcome::Started { .. } => {
                self.status_message = Some("Submitting...".to_string());
            }
            SubmitOutcome::InFlight => {}
        }
    }

    /// Advances time: completes a due submission and expires the toast.
    pub fn tick(&mut self, now: Instant) {
        if let Some(notification) = self.form.poll(now) {
            self.status_message = None;
            self.toast = Some(Toast::new(notification, now, self.toast_duration));
            self.set_focus(self.focus);
        }
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }
}
