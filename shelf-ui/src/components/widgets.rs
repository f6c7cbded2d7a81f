//! Small pieces shared between screens

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use shelf_core::book::Book;

pub fn highlight_style() -> Style {
    Style::new()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn status_span(book: &Book) -> Span<'static> {
    let color = if book.read { Color::Green } else { Color::Magenta };
    Span::styled(book.status_label(), Style::new().fg(color))
}

/// Labelled fields for one book.
pub fn book_details(book: &Book) -> Vec<Line<'static>> {
    let label = Style::new().add_modifier(Modifier::BOLD);
    vec![
        Line::from(Span::styled(
            book.title.clone(),
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![Span::styled("Author: ", label), Span::raw(book.author.clone())]),
        Line::from(vec![Span::styled("Year: ", label), Span::raw(book.year.to_string())]),
        Line::from(vec![Span::styled("Genre: ", label), Span::raw(book.genre.clone())]),
        Line::from(vec![Span::styled("Status: ", label), status_span(book)]),
    ]
}

pub fn render_details(frame: &mut Frame, area: Rect, title: &str, book: Option<&Book>) {
    let lines = match book {
        Some(book) => book_details(book),
        None => vec![Line::from("Nothing selected.")],
    };
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(format!(" {title} ")));
    frame.render_widget(paragraph, area);
}

/// A bordered box holding one informational message.
pub fn render_message(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::new().fg(Color::Blue),
    )))
    .wrap(Wrap { trim: true })
    .block(Block::bordered().title(format!(" {title} ")));
    frame.render_widget(paragraph, area);
}
