//! Application state for the terminal site.
//!
//! Holds the current page and scroll position, the contact form editor,
//! the submission state machine and the toast queue.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::dispatcher::{SubmissionDispatcher, SubmissionOutcome};
use super::toast::Toasts;
use crate::domain::{CONTACT_EMAIL, ContactForm, ContactValidator, FormField, Page, page_actions};
use crate::infrastructure::{ContactStore, SystemClipboard};

/// Scroll offset (in lines) past which the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: usize = 2;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll be in touch soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// Determines how key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Reading pages: keys navigate and scroll
    Browse,
    /// Typing into the contact form
    Form,
    /// Key binding overlay is open
    Help,
}

/// Lifecycle of the contact form.
///
/// `Idle -> Submitting -> Submitted` on success,
/// `Idle -> Submitting -> Idle` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Submitted,
}

/// Which control of the contact form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FormField),
    SubmitButton,
}

impl FormFocus {
    const ORDER: [FormFocus; 7] = [
        FormFocus::Field(FormField::FirstName),
        FormFocus::Field(FormField::LastName),
        FormFocus::Field(FormField::Email),
        FormFocus::Field(FormField::Company),
        FormFocus::Field(FormField::Subject),
        FormFocus::Field(FormField::Message),
        FormFocus::SubmitButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> FormFocus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> FormFocus {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Main application state.
pub struct App {
    /// Page currently shown
    pub page: Page,
    /// Scroll offset in lines, one per page
    scroll: [usize; Page::ALL.len()],
    /// Current application mode
    pub mode: AppMode,
    mode_before_help: AppMode,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Largest help scroll offset at the current popup size, measured when drawn
    help_max_scroll: usize,
    /// Raw contact form input
    pub form: ContactForm,
    /// Focused form control
    pub focus: FormFocus,
    /// Cursor position (in characters) within the focused field
    pub cursor_position: usize,
    /// Contact form lifecycle
    pub status: FormStatus,
    /// Live notifications
    pub toasts: Toasts,
    /// Body height in rows, refreshed after every draw
    pub viewport_rows: usize,
    /// Rendered height of the current page in rows
    pub content_rows: usize,
    dispatcher: SubmissionDispatcher,
    clipboard: SystemClipboard,
}

impl App {
    pub fn new(store: Arc<dyn ContactStore>, toast_lifetime: Duration) -> Self {
        Self {
            page: Page::Home,
            scroll: [0; Page::ALL.len()],
            mode: AppMode::Browse,
            mode_before_help: AppMode::Browse,
            help_scroll: 0,
            help_max_scroll: usize::MAX,
            form: ContactForm::default(),
            focus: FormFocus::Field(FormField::FirstName),
            cursor_position: 0,
            status: FormStatus::Idle,
            toasts: Toasts::new(toast_lifetime),
            viewport_rows: 20,
            content_rows: 0,
            dispatcher: SubmissionDispatcher::new(store),
            clipboard: SystemClipboard::default(),
        }
    }

    pub fn store_description(&self) -> String {
        self.dispatcher.store_description()
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Shows `page` from the top. Leaves the form and help overlay.
    pub fn navigate(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!(from = self.page.path(), to = page.path(), "navigate");
        }
        self.page = page;
        self.scroll[page.index()] = 0;
        self.mode = AppMode::Browse;
    }

    pub fn next_page(&mut self) {
        self.navigate(self.page.next());
    }

    pub fn previous_page(&mut self) {
        self.navigate(self.page.previous());
    }

    /// Follows the first call-to-action of the current page.
    ///
    /// On the contact page this focuses the form instead.
    pub fn activate_primary_action(&mut self) {
        if self.page == Page::Contact {
            self.focus_form();
            return;
        }
        if let Some(action) = page_actions(self.page).first() {
            self.navigate(action.target);
        }
    }

    pub fn scroll(&self) -> usize {
        self.scroll[self.page.index()]
    }

    pub fn max_scroll(&self) -> usize {
        self.content_rows.saturating_sub(self.viewport_rows)
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.max_scroll();
        let slot = &mut self.scroll[self.page.index()];
        *slot = slot.saturating_add_signed(delta).min(max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll[self.page.index()] = 0;
    }

    pub fn page_size(&self) -> isize {
        self.viewport_rows.saturating_sub(2).max(1) as isize
    }

    /// The header uses its compact style once the page has scrolled.
    pub fn is_scrolled(&self) -> bool {
        self.scroll() > HEADER_SCROLL_THRESHOLD
    }

    /// Records the body size from the last draw and clamps the scroll offset.
    pub fn update_viewport_size(&mut self, viewport_rows: usize, content_rows: usize) {
        self.viewport_rows = viewport_rows;
        self.content_rows = content_rows;
        let max = self.max_scroll();
        let slot = &mut self.scroll[self.page.index()];
        *slot = (*slot).min(max);
    }

    /// Scrolls just enough for `line` to be inside the viewport.
    pub fn ensure_line_visible(&mut self, line: usize) {
        let rows = self.viewport_rows.max(1);
        let slot = &mut self.scroll[self.page.index()];
        if line < *slot {
            *slot = line;
        } else if line >= *slot + rows {
            *slot = line + 1 - rows;
        }
    }

    pub fn open_help(&mut self) {
        if self.mode != AppMode::Help {
            self.mode_before_help = self.mode;
        }
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn scroll_help(&mut self, delta: isize) {
        self.help_scroll = self.help_scroll.saturating_add_signed(delta).min(self.help_max_scroll);
    }

    /// Records how far the help text can scroll at the current popup size.
    pub fn set_help_max_scroll(&mut self, max: usize) {
        self.help_max_scroll = max;
        self.help_scroll = self.help_scroll.min(max);
    }

    /// Returns to whatever mode was active when help was opened.
    pub fn close_help(&mut self) {
        self.mode = self.mode_before_help;
    }

    pub fn copy_contact_email(&mut self) {
        match self.clipboard.copy(CONTACT_EMAIL) {
            Ok(()) => self.toasts.success(format!("Copied {CONTACT_EMAIL} to the clipboard")),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                self.toasts.error(format!("Could not copy {CONTACT_EMAIL}"));
            }
        }
    }

    // ------------------------------------------------------------------
    // Contact form editing
    // ------------------------------------------------------------------

    /// Opens the contact page with keyboard focus in the form.
    pub fn focus_form(&mut self) {
        if self.page != Page::Contact {
            self.navigate(Page::Contact);
        }
        self.mode = AppMode::Form;
        self.cursor_position = self.focused_value().map_or(0, |v| v.chars().count());
    }

    pub fn leave_form(&mut self) {
        self.mode = AppMode::Browse;
    }

    pub fn focused_field(&self) -> Option<FormField> {
        match self.focus {
            FormFocus::Field(field) => Some(field),
            FormFocus::SubmitButton => None,
        }
    }

    fn focused_value(&self) -> Option<&str> {
        self.focused_field().map(|field| self.form.value(field))
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
        self.cursor_position = self.focused_value().map_or(0, |v| v.chars().count());
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus.previous());
    }

    /// Whether typing should currently edit the form.
    pub fn form_editable(&self) -> bool {
        self.status == FormStatus::Idle
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.form_editable() {
            return;
        }
        let Some(field) = self.focused_field() else {
            return;
        };
        if c == '\n' && !field.is_multiline() {
            return;
        }
        let cursor = self.cursor_position;
        let value = self.form.value_mut(field);
        let at = byte_offset(value, cursor);
        value.insert(at, c);
        self.cursor_position += 1;
    }

    pub fn backspace(&mut self) {
        if !self.form_editable() || self.cursor_position == 0 {
            return;
        }
        let Some(field) = self.focused_field() else {
            return;
        };
        let cursor = self.cursor_position;
        let value = self.form.value_mut(field);
        let at = byte_offset(value, cursor - 1);
        value.remove(at);
        self.cursor_position -= 1;
    }

    pub fn delete(&mut self) {
        if !self.form_editable() {
            return;
        }
        let Some(field) = self.focused_field() else {
            return;
        };
        let cursor = self.cursor_position;
        let value = self.form.value_mut(field);
        if cursor < value.chars().count() {
            let at = byte_offset(value, cursor);
            value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let len = self.focused_value().map_or(0, |v| v.chars().count());
        if self.cursor_position < len {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.focused_value().map_or(0, |v| v.chars().count());
    }

    /// Enter inside the form: advance, add a newline, or submit.
    pub fn activate_focused(&mut self) {
        match self.status {
            FormStatus::Submitted => {
                self.send_another();
                return;
            }
            FormStatus::Submitting => return,
            FormStatus::Idle => {}
        }
        match self.focus {
            FormFocus::SubmitButton => self.submit(),
            FormFocus::Field(field) if field.is_multiline() => self.insert_char('\n'),
            FormFocus::Field(_) => self.focus_next(),
        }
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Validates the form and, if valid, dispatches exactly one insert.
    ///
    /// Ignored unless the form is idle, which is what keeps a double
    /// submit from issuing a second request.
    pub fn submit(&mut self) {
        if self.status != FormStatus::Idle || self.dispatcher.is_in_flight() {
            tracing::debug!(status = ?self.status, "submit ignored");
            return;
        }

        let record = match ContactValidator::validate(&self.form) {
            Ok(record) => record,
            Err(e) => {
                tracing::debug!(field = e.field.label(), "contact form rejected locally");
                self.toasts.error(e.to_string());
                self.set_focus(FormFocus::Field(e.field));
                return;
            }
        };

        if self.dispatcher.dispatch(record).is_ok() {
            self.status = FormStatus::Submitting;
        }
    }

    /// Resets a submitted form so another message can be written.
    pub fn send_another(&mut self) {
        if self.status != FormStatus::Submitted {
            return;
        }
        self.status = FormStatus::Idle;
        self.form.clear();
        self.set_focus(FormFocus::Field(FormField::FirstName));
    }

    /// Advances timers and collects a finished submission, if any.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.prune(now);
        if let Some(outcome) = self.dispatcher.poll() {
            self.apply_outcome(outcome);
        }
    }

    /// Blocks until the pending submission finishes, then applies it.
    pub fn wait_for_submission(&mut self) {
        if let Some(outcome) = self.dispatcher.wait() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Success => {
                self.status = FormStatus::Submitted;
                self.form.clear();
                self.focus = FormFocus::Field(FormField::FirstName);
                self.cursor_position = 0;
                self.toasts.success(SUCCESS_MESSAGE);
            }
            SubmissionOutcome::Rejected(reason) => {
                tracing::error!(%reason, "contact submission rejected by store");
                self.status = FormStatus::Idle;
                self.toasts.error(FAILURE_MESSAGE);
            }
            SubmissionOutcome::Transport(reason) => {
                tracing::error!(%reason, "contact submission failed");
                self.status = FormStatus::Idle;
                self.toasts.error(FAILURE_MESSAGE);
            }
        }
    }
}

/// Byte index of the `char_index`-th character, or the end of `s`.
fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices().nth(char_index).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{FakeStore, john_doe};
    use crate::application::toast::ToastKind;

    fn app_with(store: Arc<FakeStore>) -> App {
        App::new(store, Duration::from_secs(4))
    }

    fn fill_valid(app: &mut App) {
        app.form = ContactForm {
            first_name: " John ".to_string(),
            last_name: "Doe".to_string(),
            email: "john@example.com ".to_string(),
            company: String::new(),
            subject: "Demo request".to_string(),
            message: "Please contact me".to_string(),
        };
    }

    #[test]
    fn test_new_app_starts_on_home() {
        let app = app_with(Arc::new(FakeStore::accepting()));
        assert_eq!(app.page, Page::Home);
        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.status, FormStatus::Idle);
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_valid_submission_goes_idle_submitting_submitted() {
        let store = Arc::new(FakeStore::accepting());
        let mut app = app_with(store.clone());
        app.focus_form();
        fill_valid(&mut app);

        app.submit();
        assert_eq!(app.status, FormStatus::Submitting);

        app.wait_for_submission();
        assert_eq!(app.status, FormStatus::Submitted);
        assert_eq!(store.inserted(), vec![john_doe()]);
        assert_eq!(app.toasts.len(), 1);
        let toast = app.toasts.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, SUCCESS_MESSAGE);
        assert_eq!(app.form, ContactForm::default());
    }

    #[test]
    fn test_invalid_form_never_reaches_the_store() {
        let store = Arc::new(FakeStore::accepting());
        let mut app = app_with(store.clone());
        fill_valid(&mut app);
        app.form.email = "john@".to_string();

        app.submit();

        assert_eq!(app.status, FormStatus::Idle);
        assert_eq!(store.call_count(), 0);
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts.latest().unwrap().message, "Please enter a valid email address");
        assert_eq!(app.focus, FormFocus::Field(FormField::Email));
    }

    #[test]
    fn test_empty_required_field_names_the_field() {
        let store = Arc::new(FakeStore::accepting());
        let mut app = app_with(store.clone());
        fill_valid(&mut app);
        app.form.subject.clear();

        app.submit();

        assert_eq!(store.call_count(), 0);
        assert_eq!(app.toasts.latest().unwrap().message, "Subject is required");
    }

    #[test]
    fn test_rejected_insert_returns_to_idle_with_one_error_toast() {
        let store = Arc::new(FakeStore::rejecting());
        let mut app = app_with(store.clone());
        fill_valid(&mut app);

        app.submit();
        app.wait_for_submission();

        assert_eq!(app.status, FormStatus::Idle);
        assert_eq!(store.call_count(), 1);
        assert_eq!(app.toasts.len(), 1);
        let toast = app.toasts.latest().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, FAILURE_MESSAGE);
        // Input is kept so the user can retry.
        assert_eq!(app.form.last_name, "Doe");
    }

    #[test]
    fn test_transport_failure_allows_retry() {
        let store = Arc::new(FakeStore::unreachable());
        let mut app = app_with(store.clone());
        fill_valid(&mut app);

        app.submit();
        app.wait_for_submission();
        assert_eq!(app.status, FormStatus::Idle);

        app.submit();
        assert_eq!(app.status, FormStatus::Submitting);
        app.wait_for_submission();
        assert_eq!(store.call_count(), 2);
    }

    #[test]
    fn test_double_submit_while_pending_issues_one_call() {
        let (store, release) = FakeStore::gated();
        let store = Arc::new(store);
        let mut app = app_with(store.clone());
        fill_valid(&mut app);

        app.submit();
        app.submit();
        app.tick(Instant::now());
        app.submit();
        assert_eq!(app.status, FormStatus::Submitting);

        release.send(()).unwrap();
        app.wait_for_submission();

        assert_eq!(store.call_count(), 1);
        assert_eq!(app.status, FormStatus::Submitted);
    }

    #[test]
    fn test_submitted_form_ignores_submit_until_reset() {
        let store = Arc::new(FakeStore::accepting());
        let mut app = app_with(store.clone());
        fill_valid(&mut app);
        app.submit();
        app.wait_for_submission();

        fill_valid(&mut app);
        app.submit();
        assert_eq!(app.status, FormStatus::Submitted);
        assert_eq!(store.call_count(), 1);

        app.send_another();
        assert_eq!(app.status, FormStatus::Idle);
        assert_eq!(app.form, ContactForm::default());
    }

    #[test]
    fn test_editing_respects_cursor_and_multibyte_chars() {
        let mut app = app_with(Arc::new(FakeStore::accepting()));
        app.focus_form();
        for c in "Jöhn".chars() {
            app.insert_char(c);
        }
        app.move_cursor_left();
        app.move_cursor_left();
        app.backspace();
        assert_eq!(app.form.first_name, "Jhn");
        app.insert_char('o');
        assert_eq!(app.form.first_name, "John");
        app.move_cursor_end();
        app.delete();
        assert_eq!(app.form.first_name, "John");
        app.move_cursor_home();
        app.delete();
        assert_eq!(app.form.first_name, "ohn");
    }

    #[test]
    fn test_newlines_only_go_into_the_message() {
        let mut app = app_with(Arc::new(FakeStore::accepting()));
        app.focus_form();
        app.insert_char('A');
        app.activate_focused();
        assert_eq!(app.focus, FormFocus::Field(FormField::LastName));
        assert_eq!(app.form.first_name, "A");

        app.set_focus(FormFocus::Field(FormField::Message));
        app.insert_char('x');
        app.activate_focused();
        app.insert_char('y');
        assert_eq!(app.form.message, "x\ny");
    }

    #[test]
    fn test_focus_cycles_through_fields_and_button() {
        let mut app = app_with(Arc::new(FakeStore::accepting()));
        app.set_focus(FormFocus::Field(FormField::Message));
        app.focus_next();
        assert_eq!(app.focus, FormFocus::SubmitButton);
        app.focus_next();
        assert_eq!(app.focus, FormFocus::Field(FormField::FirstName));
        app.focus_previous();
        assert_eq!(app.focus, FormFocus::SubmitButton);
    }

    #[test]
    fn test_inputs_are_locked_while_submitting() {
        let (store, release) = FakeStore::gated();
        let mut app = app_with(Arc::new(store));
        fill_valid(&mut app);
        app.submit();

        app.set_focus(FormFocus::Field(FormField::LastName));
        app.insert_char('!');
        assert_eq!(app.form.last_name, "Doe");

        release.send(()).unwrap();
        app.wait_for_submission();
    }

    #[test]
    fn test_scroll_is_clamped_and_drives_header_style() {
        let mut app = app_with(Arc::new(FakeStore::accepting()));
        app.update_viewport_size(10, 40);
        assert!(!app.is_scrolled());

        app.scroll_by(5);
        assert_eq!(app.scroll(), 5);
        assert!(app.is_scrolled());

        app.scroll_by(100);
        assert_eq!(app.scroll(), 30);

        app.scroll_by(-100);
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn test_ensure_line_visible_scrolls_minimally() {
        let mut app = app_with(Arc::new(FakeStore::accepting()));
        app.update_viewport_size(10, 60);

        app.ensure_line_visible(5);
        assert_eq!(app.scroll(), 0);

        app.ensure_line_visible(25);
        assert_eq!(app.scroll(), 16);

        app.ensure_line_visible(3);
        assert_eq!(app.scroll(), 3);
    }

    #[test]
    fn test_navigation_resets_scroll_and_mode() {
        let mut app = app_with(Arc::new(FakeStore::accepting()));
        app.update_viewport_size(10, 40);
        app.scroll_by(8);
        app.focus_form();
        assert_eq!(app.page, Page::Contact);
        assert_eq!(app.mode, AppMode::Form);

        app.next_page();
        assert_eq!(app.page, Page::Home);
        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn test_primary_action_follows_first_cta() {
        let mut app = app_with(Arc::new(FakeStore::accepting()));
        app.navigate(Page::Technology);
        app.activate_primary_action();
        assert_eq!(app.page, Page::Contact);
        assert_eq!(app.mode, AppMode::Browse);

        app.activate_primary_action();
        assert_eq!(app.mode, AppMode::Form);

        app.navigate(Page::About);
        app.activate_primary_action();
        assert_eq!(app.page, Page::About);
    }

    #[test]
    fn test_help_returns_to_previous_mode() {
        let mut app = app_with(Arc::new(FakeStore::accepting()));
        app.focus_form();
        app.open_help();
        assert_eq!(app.mode, AppMode::Help);
        app.close_help();
        assert_eq!(app.mode, AppMode::Form);
    }

    #[test]
    fn test_help_scroll_is_clamped_to_measured_end() {
        let mut app = app_with(Arc::new(FakeStore::accepting()));
        app.open_help();
        app.scroll_help(40);
        app.set_help_max_scroll(12);
        assert_eq!(app.help_scroll, 12);

        app.scroll_help(5);
        assert_eq!(app.help_scroll, 12);
        app.scroll_help(-1);
        assert_eq!(app.help_scroll, 11);
        app.scroll_help(-100);
        assert_eq!(app.help_scroll, 0);
    }

    #[test]
    fn test_tick_prunes_expired_toasts() {
        let mut app = app_with(Arc::new(FakeStore::accepting()));
        app.submit();
        assert_eq!(app.toasts.len(), 1);
        app.tick(Instant::now() + Duration::from_secs(10));
        assert!(app.toasts.is_empty());
    }
}
