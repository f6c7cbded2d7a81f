//! Search by title or author; Enter flips the highlighted book's read status

use super::widgets::{highlight_style, render_details, render_message, status_span};
use crate::stores::{AppState, Screen};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState as WidgetListState, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let [input, summary, content] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    let query = Paragraph::new(Line::from(vec![
        Span::raw(state.search.query.clone()),
        Span::styled("_", Style::new().fg(Color::Yellow)),
    ]))
    .block(Block::bordered().title(format!(
        " {} - by title or author ",
        Screen::Search.title()
    )));
    frame.render_widget(query, input);

    let books = state.library.all();
    if books.is_empty() {
        render_message(
            frame,
            content,
            "Results",
            "Your library is empty. Add some books before searching.",
        );
        return;
    }
    let Some(summary_text) = state.search.summary(books) else {
        frame.render_widget(
            Paragraph::new(" Type to search. Esc clears.")
                .style(Style::new().fg(Color::DarkGray)),
            summary,
        );
        return;
    };
    frame.render_widget(
        Paragraph::new(format!(" {summary_text}")).style(Style::new().fg(Color::Blue)),
        summary,
    );

    let results = state.search.results(books);
    if results.is_empty() {
        return;
    }

    let [rows, details] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .areas(content);

    let items: Vec<ListItem> = results
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
    let selected = state.search.selected.min(results.len() - 1);
    let list = List::new(items)
        .block(Block::bordered().title(" Results (Enter: mark as read/unread) "))
        .highlight_style(highlight_style())
        .highlight_symbol("> ");
    let mut list_state = WidgetListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, rows, &mut list_state);

    render_details(frame, details, "Details", state.search.selected_book(books));
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
        for (title, author) in [("Dune", "Frank Herbert"), ("It", "Stephen King")] {
            state.add.title = title.to_string();
            state.add.author = author.to_string();
            state.submit_add_form();
        }
        state.navigate(Screen::Search);
        (state, temp)
    }

    #[test]
    fn blank_query_shows_prompt_only() {
        let (state, _temp) = setup();
        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Type to search."));
        assert!(!screen.contains("Found"));
    }

    #[test]
    fn results_and_summary() {
        let (mut state, _temp) = setup();
        state.search.query = "king".to_string();

        let screen = render_to_string(&state, 100, 30);

        assert!(screen.contains("Found 1 books matching 'king'"));
        assert!(screen.contains("Author: Stephen King"));
        assert!(!screen.contains("Dune"));
    }

    #[test]
    fn empty_library_message() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_library_dir(LibraryDir::new(temp.path())).unwrap();
        let mut state = AppState::new(config);
        state.navigate(Screen::Search);
        state.search.query = "king".to_string();

        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Your library is empty."));
        assert!(!screen.contains("No books found"));
    }

    #[test]
    fn no_results_summary() {
        let (mut state, _temp) = setup();
        state.search.query = "zzz".to_string();
        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("No books found matching 'zzz'"));
    }
}
