//! Library list with genre/status filters and a details pane

use super::widgets::{highlight_style, render_details, render_message, status_span};
use crate::stores::{AppState, Screen};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState as WidgetListState, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let books = state.library.all();
    if books.is_empty() {
        render_message(
            frame,
            area,
            Screen::List.title(),
            "Your library is empty. Add some books to get started!",
        );
        return;
    }

    let [filters, count, content] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let key = Style::new().fg(Color::Yellow);
    let filter_line = Line::from(vec![
        Span::styled("[g] ", key),
        Span::raw(format!("Genre: {}", state.list.genre_label())),
        Span::raw("    "),
        Span::styled("[s] ", key),
        Span::raw(format!("Status: {}", state.list.filter.status.label())),
        Span::raw("    "),
        Span::styled("[d] ", key),
        Span::raw("Remove selected"),
    ]);
    frame.render_widget(
        Paragraph::new(filter_line).block(Block::bordered().title(format!(
            " {} ",
            Screen::List.title()
        ))),
        filters,
    );

    let visible = state.list.visible(books);
    frame.render_widget(
        Paragraph::new(format!(
            " Showing {} of {} books",
            visible.len(),
            books.len()
        ))
        .style(Style::new().fg(Color::DarkGray)),
        count,
    );

    if visible.is_empty() {
        render_message(frame, content, "Books", "No books match your filters.");
        return;
    }

    let [rows, details] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(content);

    let items: Vec<ListItem> = visible
        .iter()
        .map(|book| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    book.title.clone(),
                    Style::new().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" by {}  ", book.author)),
                status_span(book),
            ]))
        })
        .collect();
    let selected = state.list.selected.min(visible.len() - 1);
    let list = List::new(items)
        .block(Block::bordered().title(" Books "))
        .highlight_style(highlight_style())
        .highlight_symbol("> ");
    let mut list_state = WidgetListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, rows, &mut list_state);

    render_details(frame, details, "Details", state.list.selected_book(books));
}

#[cfg(test)]
mod tests {
    use crate::components::test_support::render_to_string;
    use crate::stores::{AppState, Screen};
    use shelf_core::config::Config;
    use shelf_core::library_dir::LibraryDir;
    use tempfile::TempDir;

    fn setup() -> (AppState, TempDir) {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_library_dir(LibraryDir::new(temp.path())).unwrap();
        let mut state = AppState::new(config);
        state.navigate(Screen::List);
        (state, temp)
    }

    fn add(state: &mut AppState, title: &str, author: &str, read: bool) {
        state.add.title = title.to_string();
        state.add.author = author.to_string();
        state.add.read = read;
        state.submit_add_form();
    }

    #[test]
    fn empty_library_message() {
        let (state, _temp) = setup();
        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Your library is empty. Add some books to get started!"));
    }

    #[test]
    fn filters_change_the_count() {
        let (mut state, _temp) = setup();
        add(&mut state, "Dune", "Frank Herbert", true);
        add(&mut state, "Emma", "Jane Austen", false);

        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Showing 2 of 2 books"));
        assert!(screen.contains("Genre: All"));
        assert!(screen.contains("Author: Frank Herbert"));

        state.list.cycle_status();
        state.flash = None;
        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Status: Read"));
        assert!(screen.contains("Showing 1 of 2 books"));
        assert!(!screen.contains("Emma"));
    }

    #[test]
    fn no_matches_message() {
        let (mut state, _temp) = setup();
        add(&mut state, "Emma", "Jane Austen", false);
        state.list.cycle_status();

        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Showing 0 of 1 books"));
        assert!(screen.contains("No books match your filters."));
    }
}
