use crossterm::event::{KeyCode, KeyEvent};

use crate::model::task::Priority;
use crate::ops::filter::Filter;

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor movement over the visible list
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible_len().saturating_sub(1);
        }

        // New task prompt
        KeyCode::Char('a') => {
            app.input.clear();
            app.input_cursor = 0;
            app.input_priority = Priority::Medium;
            app.mode = Mode::Insert;
        }

        // Selection
        KeyCode::Char(' ') => {
            if let Some(id) = app.cursor_task_id() {
                app.session.toggle(id);
            }
        }
        KeyCode::Char('c') => {
            // Disabled while the selection is empty
            if !app.session.selection().is_empty() {
                app.session.complete_selection();
                app.clamp_cursor();
            }
        }

        // Delete under cursor
        KeyCode::Char('d') => {
            if let Some(id) = app.cursor_task_id() {
                app.session.delete(id);
                app.clamp_cursor();
            }
        }

        // Filter tabs
        KeyCode::Char('1') => set_filter(app, Filter::All),
        KeyCode::Char('2') => set_filter(app, Filter::Only(Priority::Urgent)),
        KeyCode::Char('3') => set_filter(app, Filter::Only(Priority::Medium)),
        KeyCode::Char('4') => set_filter(app, Filter::Only(Priority::Low)),

        _ => {}
    }
}

fn set_filter(app: &mut App, filter: Filter) {
    app.session.set_filter(filter);
    app.cursor = 0;
    app.scroll_offset = 0;
}

fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input.clear();
            app.input_cursor = 0;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            // Whitespace-only input is silently rejected: no task, no error
            app.session.add(&app.input, app.input_priority);
            app.input.clear();
            app.input_cursor = 0;
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        KeyCode::Tab => {
            app.input_priority = app.input_priority.next();
        }
        KeyCode::Backspace => {
            if app.input_cursor > 0 {
                let prev = prev_char_boundary(&app.input, app.input_cursor);
                app.input.remove(prev);
                app.input_cursor = prev;
            }
        }
        KeyCode::Left => {
            if app.input_cursor > 0 {
                app.input_cursor = prev_char_boundary(&app.input, app.input_cursor);
            }
        }
        KeyCode::Right => {
            if app.input_cursor < app.input.len() {
                app.input_cursor = next_char_boundary(&app.input, app.input_cursor);
            }
        }
        KeyCode::Char(c) => {
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }
        _ => {}
    }
}

fn prev_char_boundary(s: &str, from: usize) -> usize {
    let mut i = from - 1;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::session::Session;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use tempfile::TempDir;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(
            app,
            KeyEvent {
                code,
                modifiers: KeyModifiers::NONE,
                kind: crossterm::event::KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
        );
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with_tasks(dir: &TempDir, texts: &[&str]) -> App {
        let mut session = Session::open(dir.path()).unwrap();
        for text in texts {
            session.add(text, Priority::Medium).unwrap();
        }
        App::new(session)
    }

    #[test]
    fn add_flow_creates_task_and_returns_to_navigate() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_tasks(&dir, &[]);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::Insert);
        type_text(&mut app, "new task");
        press(&mut app, KeyCode::Tab); // medium → low
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.session.tasks().len(), 1);
        assert_eq!(app.session.tasks()[0].text, "new task");
        assert_eq!(app.session.tasks()[0].priority, Priority::Low);
    }

    #[test]
    fn empty_submit_is_silently_rejected() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_tasks(&dir, &[]);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.session.tasks().is_empty());
    }

    #[test]
    fn space_toggles_selection_under_cursor() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_tasks(&dir, &["one", "two"]);
        let top_id = app.session.tasks()[0].id;

        press(&mut app, KeyCode::Char(' '));
        assert!(app.session.selection().contains(top_id));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.session.selection().is_empty());
    }

    #[test]
    fn complete_is_disabled_while_selection_empty() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_tasks(&dir, &["one", "two"]);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session.tasks().len(), 2);

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.session.tasks().len(), 1);
        assert!(app.session.selection().is_empty());
    }

    #[test]
    fn delete_clamps_cursor_to_shrunken_list() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_tasks(&dir, &["one", "two"]);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.cursor, 1);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.session.tasks().len(), 1);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn filter_keys_reset_cursor_and_narrow_the_view() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_tasks(&dir, &["one", "two", "three"]);
        press(&mut app, KeyCode::Char('j'));

        press(&mut app, KeyCode::Char('2')); // urgent only
        assert_eq!(app.session.filter(), Filter::Only(Priority::Urgent));
        assert_eq!(app.cursor, 0);
        assert_eq!(app.visible_len(), 0); // all sample tasks are medium

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.session.filter(), Filter::All);
        assert_eq!(app.visible_len(), 3);
    }

    #[test]
    fn insert_cursor_handles_multibyte_text() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_tasks(&dir, &[]);

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "café");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "fé");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.tasks()[0].text, "café");
    }
}
