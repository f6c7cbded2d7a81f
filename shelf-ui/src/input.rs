//! Key handling
//!
//! Global keys (work everywhere):
//!   F1-F5 / Tab / Shift-Tab  - switch screen
//!   Ctrl-S                   - save library
//!   Ctrl-L                   - reload library from disk
//!   Ctrl-C / Ctrl-Q          - quit
//!
//! On screens without a text field, `1`-`5` switch screen and `q` quits.

use crate::stores::{AppState, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if handle_global_key(state, key) {
        return;
    }

    match state.screen {
        Screen::Dashboard => {}
        Screen::List => handle_list_key(state, key.code),
        Screen::Add => handle_add_key(state, key.code),
        Screen::Search => handle_search_key(state, key.code),
        Screen::Remove => handle_remove_key(state, key.code),
    }
}

/// Returns true when the key was consumed.
fn handle_global_key(state: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => state.should_quit = true,
            KeyCode::Char('s') => state.save_library(),
            KeyCode::Char('l') => state.load_library(),
            _ => return false,
        }
        return true;
    }

    match key.code {
        KeyCode::F(n @ 1..=5) => {
            if let Some(screen) = Screen::from_index(n as usize - 1) {
                state.navigate(screen);
            }
        }
        KeyCode::Tab => state.navigate(state.screen.next()),
        KeyCode::BackTab => state.navigate(state.screen.previous()),
        KeyCode::Char(c) if !state.screen.takes_text() && !state.remove.confirming => {
            match c {
                '1'..='5' => {
                    let index = c as usize - '1' as usize;
                    if let Some(screen) = Screen::from_index(index) {
                        state.navigate(screen);
                    }
                }
                'q' => state.should_quit = true,
                _ => return false,
            }
        }
        _ => return false,
    }
    true
}

fn handle_list_key(state: &mut AppState, code: KeyCode) {
    let books = state.library.all();
    match code {
        KeyCode::Down | KeyCode::Char('j') => state.list.select_next(books),
        KeyCode::Up | KeyCode::Char('k') => state.list.select_previous(),
        KeyCode::Char('g') => state.list.cycle_genre(books),
        KeyCode::Char('s') => state.list.cycle_status(),
        KeyCode::Delete | KeyCode::Char('d') => state.remove_list_selection(),
        _ => {}
    }
}

fn handle_add_key(state: &mut AppState, code: KeyCode) {
    let form = &mut state.add;
    match code {
        KeyCode::Enter => state.submit_add_form(),
        KeyCode::Down => form.focus_next(),
        KeyCode::Up => form.focus_previous(),
        KeyCode::Left => form.adjust(-1),
        KeyCode::Right => form.adjust(1),
        KeyCode::PageDown => form.adjust(-10),
        KeyCode::PageUp => form.adjust(10),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) => form.insert_char(c),
        _ => {}
    }
}

fn handle_search_key(state: &mut AppState, code: KeyCode) {
    match code {
        KeyCode::Enter => state.toggle_search_selection(),
        KeyCode::Down => state.search.select_next(state.library.all()),
        KeyCode::Up => state.search.select_previous(),
        KeyCode::Backspace => state.search.backspace(),
        KeyCode::Esc => state.search.clear(),
        KeyCode::Char(c) => state.search.insert_char(c),
        _ => {}
    }
}

fn handle_remove_key(state: &mut AppState, code: KeyCode) {
    if state.remove.confirming {
        match code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => state.confirm_removal(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.remove.cancel(),
            _ => {}
        }
        return;
    }

    match code {
        KeyCode::Down | KeyCode::Char('j') => state.remove.select_next(state.library.all()),
        KeyCode::Up | KeyCode::Char('k') => state.remove.select_previous(),
        KeyCode::Enter | KeyCode::Delete => state.remove.request_confirmation(state.library.all()),
        _ => {}
    }
}
