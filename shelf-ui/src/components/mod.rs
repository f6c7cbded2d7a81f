//! Render functions, one module per screen
//!
//! Everything here is a pure function of `AppState`; the frame is rebuilt
//! from scratch after every key press.

mod add;
mod dashboard;
mod list;
mod remove;
mod search;
mod widgets;

use crate::stores::{AppState, FlashLevel, Screen};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Tabs};
use ratatui::Frame;

pub fn render(frame: &mut Frame, state: &AppState) {
    let [nav, body, status, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_nav(frame, nav, state);
    match state.screen {
        Screen::Dashboard => dashboard::render(frame, body, state),
        Screen::List => list::render(frame, body, state),
        Screen::Add => add::render(frame, body, state),
        Screen::Search => search::render(frame, body, state),
        Screen::Remove => remove::render(frame, body, state),
    }
    render_status(frame, status, state);
    render_footer(frame, footer, state);
}

fn render_nav(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| Line::from(format!("F{} {}", i + 1, s.nav_label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.screen.index())
        .highlight_style(
            Style::new()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::bordered().title(" shelf "));
    frame.render_widget(tabs, area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(flash) = &state.flash else {
        return;
    };
    let color = match flash.level {
        FlashLevel::Success => Color::Green,
        FlashLevel::Info => Color::Blue,
        FlashLevel::Error => Color::Red,
    };
    let line = Line::from(Span::styled(
        format!(" {}", flash.message),
        Style::new().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let saved = match state.last_saved_label() {
        Some(ts) => format!(" Last saved: {ts}"),
        None => " Not saved yet".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(saved, Style::new().fg(Color::DarkGray)),
        Span::styled(
            "  |  Tab/F1-F5 navigate  Ctrl-S save  Ctrl-L load  Ctrl-Q quit",
            Style::new().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}


#[cfg(test)]
mod tests {
    use super::test_support::render_to_string;
    use crate::stores::{AppState, Flash, Screen};
    use shelf_core::config::Config;
    use shelf_core::library_dir::LibraryDir;
    use tempfile::TempDir;

    fn setup() -> (AppState, TempDir) {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_library_dir(LibraryDir::new(temp.path())).unwrap();
        (AppState::new(config), temp)
    }

    #[test]
    fn nav_lists_every_screen() {
        let (state, _temp) = setup();
        let screen = render_to_string(&state, 120, 30);
        for s in Screen::ALL {
            assert!(screen.contains(s.nav_label()), "missing {}", s.nav_label());
        }
        assert!(screen.contains("Not saved yet"));
    }

    #[test]
    fn flash_and_last_saved_are_shown() {
        let (mut state, _temp) = setup();
        state.save_library();
        let screen = render_to_string(&state, 120, 30);
        assert!(screen.contains("Library saved successfully!"));
        assert!(screen.contains("Last saved: "));

        state.flash = Some(Flash::error("Error loading library: boom"));
        assert!(render_to_string(&state, 120, 30).contains("Error loading library: boom"));
    }
}
