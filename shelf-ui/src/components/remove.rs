//! Remove screen: pick a record, review it, confirm with y/n

use super::widgets::{book_details, highlight_style, render_message};
use crate::stores::{AppState, Screen};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState as WidgetListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let books = state.library.all();
    if books.is_empty() {
        render_message(
            frame,
            area,
            Screen::Remove.title(),
            "Your library is empty. There are no books to remove.",
        );
        return;
    }

    let [rows, details] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    // Author is shown so records with the same title can be told apart
    let items: Vec<ListItem> = books
        .iter()
        .map(|book| ListItem::new(format!("{} - {}", book.title, book.author)))
        .collect();
    let list = List::new(items)
        .block(Block::bordered().title(" Select a book to remove "))
        .highlight_style(highlight_style())
        .highlight_symbol("> ");
    let mut list_state =
        WidgetListState::default().with_selected(Some(state.remove.selected.min(books.len() - 1)));
    frame.render_stateful_widget(list, rows, &mut list_state);

    let Some(book) = state.remove.selected_book(books) else {
        return;
    };
    let mut lines = book_details(book);
    lines.push(Line::default());
    if state.remove.confirming {
        lines.push(Line::from(Span::styled(
            format!("Remove '{}'? (y/n)", book.title),
            Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Enter: Confirm Removal",
            Style::new().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(format!(" {} ", Screen::Remove.title()))),
        details,
    );
}
