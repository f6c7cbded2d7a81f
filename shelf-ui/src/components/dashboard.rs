//! Dashboard: headline numbers, read progress, genre breakdown, recent additions

use super::widgets::{render_message, status_span};
use crate::stores::{AppState, Screen};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Gauge, Paragraph};
use ratatui::Frame;
use shelf_core::stats::LibraryStats;

const NO_INSIGHTS: &str = "Add some books to your library to see insights and visualizations.";
const NO_BOOKS: &str = "Your library is empty. Start adding books!";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let stats = state.stats();
    let recent_rows = state.config.recent_limit.clamp(1, 10) as u16 * 2 + 2;
    let [header, cards, insights, recent] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(recent_rows),
    ])
    .areas(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            Screen::Dashboard.title(),
            Style::new().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Track your reading journey",
            Style::new().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(heading, header);

    render_cards(frame, cards, &stats);

    if stats.total == 0 {
        render_message(frame, insights, "Library Insights", NO_INSIGHTS);
    } else {
        let [progress, genres] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(insights);
        render_progress(frame, progress, &stats);
        render_genres(frame, genres, &stats, state.config.top_genre_limit);
    }

    render_recent(frame, recent, state);
}

fn render_cards(frame: &mut Frame, area: Rect, stats: &LibraryStats) {
    let [total, read, rate] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);
    let cards = [
        (total, "Total Books", stats.total.to_string()),
        (read, "Books Read", stats.read.to_string()),
        (rate, "Completion Rate", format!("{:.1}%", stats.read_percentage)),
    ];
    for (area, label, value) in cards {
        let card = Paragraph::new(Line::from(Span::styled(
            value,
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .centered()
        .block(Block::bordered().title(format!(" {label} ")));
        frame.render_widget(card, area);
    }
}

fn render_progress(frame: &mut Frame, area: Rect, stats: &LibraryStats) {
    let ratio = if stats.total == 0 {
        0.0
    } else {
        stats.read as f64 / stats.total as f64
    };
    let gauge = Gauge::default()
        .block(Block::bordered().title(" Read vs. Unread Books "))
        .gauge_style(Style::new().fg(Color::Green).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("{} read / {} unread", stats.read, stats.unread));
    frame.render_widget(gauge, area);
}

fn render_genres(frame: &mut Frame, area: Rect, stats: &LibraryStats, limit: usize) {
    let bars: Vec<Bar> = stats
        .top_genres(limit)
        .into_iter()
        .map(|g| {
            Bar::default()
                .value(g.count as u64)
                .label(Line::from(g.genre))
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::bordered().title(format!(" Books by Genre (Top {limit}) ")))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::new().fg(Color::Cyan))
        .value_style(Style::new().fg(Color::Black).bg(Color::Cyan))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn render_recent(frame: &mut Frame, area: Rect, state: &AppState) {
    let recent = state.library.recent(state.config.recent_limit);
    if recent.is_empty() {
        render_message(frame, area, "Recent Additions", NO_BOOKS);
        return;
    }

    let mut lines = Vec::with_capacity(recent.len() * 2);
    for book in recent {
        lines.push(Line::from(vec![
            Span::styled(
                book.title.clone(),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            status_span(book),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", book.byline()),
            Style::new().fg(Color::DarkGray),
        )));
    }
    let paragraph = Paragraph::new(lines).block(Block::bordered().title(" Recent Additions "));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use crate::components::test_support::render_to_string;
    use crate::stores::AppState;
    use shelf_core::config::Config;
    use shelf_core::library_dir::LibraryDir;
    use tempfile::TempDir;

    fn setup() -> (AppState, TempDir) {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from_library_dir(LibraryDir::new(temp.path())).unwrap();
        (AppState::new(config), temp)
    }

    fn add(state: &mut AppState, title: &str, author: &str, read: bool) {
        state.add.title = title.to_string();
        state.add.author = author.to_string();
        state.add.read = read;
        state.submit_add_form();
    }

    #[test]
    fn empty_dashboard_shows_placeholders() {
        let (state, _temp) = setup();
        let screen = render_to_string(&state, 120, 40);

        assert!(screen.contains("Total Books"));
        assert!(screen.contains("0.0%"));
        assert!(screen.contains("Add some books to your library"));
        assert!(screen.contains("Your library is empty. Start adding books!"));
    }

    #[test]
    fn dashboard_shows_stats_and_recent_books() {
        let (mut state, _temp) = setup();
        add(&mut state, "Dune", "Frank Herbert", true);
        add(&mut state, "Emma", "Jane Austen", false);
        add(&mut state, "Ubik", "Philip K. Dick", false);
        add(&mut state, "Solaris", "Stanislaw Lem", false);

        let screen = render_to_string(&state, 120, 40);

        assert!(screen.contains("25.0%"));
        assert!(screen.contains("1 read / 3 unread"));
        assert!(screen.contains("Books by Genre"));
        // Only the three newest are listed
        assert!(screen.contains("Solaris"));
        assert!(screen.contains("Emma"));
        assert!(!screen.contains("Dune"));
    }
}
