use std::time::Instant;

use crate::application::{App, AppMode, Focus};
use crate::domain::{Field, FieldKind};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers, now: Instant) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers, now),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers, now: Instant) {
        // AltGr arrives as Ctrl+Alt on Windows and produces ordinary characters.
        let shortcut = modifiers.contains(KeyModifiers::CONTROL)
            && !modifiers.contains(KeyModifiers::ALT);
        if shortcut {
            if let KeyCode::Char('s') = key {
                app.submit(now);
            }
            return;
        }

        let select_focused = app
            .focused_field()
            .is_some_and(|field| matches!(field.kind(), FieldKind::Select(_)));

        match key {
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
            KeyCode::Enter => match app.focus {
                Focus::Submit => app.submit(now),
                Focus::Field(Field::Message) => app.insert_char('\n'),
                Focus::Field(_) => app.focus_next(),
            },
            KeyCode::Char(' ') if app.focus == Focus::Submit => app.submit(now),
            KeyCode::Char(' ') if select_focused => app.cycle_option(true),
            KeyCode::Left if select_focused => app.cycle_option(false),
            KeyCode::Right if select_focused => app.cycle_option(true),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Backspace => app.delete_backward(),
            KeyCode::Delete => app.delete_forward(),
            KeyCode::F(1) => app.show_help(),
            KeyCode::Esc => {
                if app.toast.is_some() {
                    app.dismiss_toast();
                } else {
                    app.status_message = None;
                }
            }
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.help_scroll = app.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
