use crate::application::{App, AppMode};
use crate::domain::Page;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Browse => Self::handle_browse_mode(app, key, modifiers),
            AppMode::Form => Self::handle_form_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_browse_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        // Only plain or shifted keys navigate; Ctrl/Alt chords are not bound here.
        if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return;
        }

        match key {
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_page(),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.previous_page(),
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                app.navigate(Page::ALL[index]);
            }
            KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_by(app.page_size()),
            KeyCode::PageUp => app.scroll_by(-app.page_size()),
            KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => app.scroll_by(isize::MAX),
            KeyCode::Enter => app.activate_primary_action(),
            KeyCode::Char('c') => app.navigate(Page::Contact),
            KeyCode::Char('d') => app.focus_form(),
            KeyCode::Char('y') => app.copy_contact_email(),
            KeyCode::F(1) | KeyCode::Char('?') => app.open_help(),
            _ => {}
        }
    }

    fn handle_form_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        // AltGr arrives as Ctrl+Alt on Windows and must still type characters like '@'.
        if modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT) {
            if let KeyCode::Char('s') = key {
                app.submit();
            }
            return;
        }

        match key {
            KeyCode::Esc => app.leave_form(),
            KeyCode::F(1) => app.open_help(),
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
            KeyCode::Enter => app.activate_focused(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Delete => app.delete(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => app.scroll_help(-1),
            KeyCode::Down | KeyCode::Char('j') => app.scroll_help(1),
            KeyCode::PageUp => app.scroll_help(-5),
            KeyCode::PageDown => app.scroll_help(5),
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
