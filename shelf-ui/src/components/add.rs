//! Add-book form

use crate::stores::{AddField, AddForm, AppState, Screen};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

const FIELDS: [AddField; 5] = [
    AddField::Title,
    AddField::Author,
    AddField::Year,
    AddField::Genre,
    AddField::Read,
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let [form_area, hints] =
        Layout::vertical([Constraint::Length(FIELDS.len() as u16 * 2 + 2), Constraint::Min(0)])
            .areas(area);

    let form = &state.add;
    let mut lines = Vec::with_capacity(FIELDS.len() * 2);
    for field in FIELDS {
        lines.push(field_line(form, field));
        lines.push(Line::default());
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(format!(
            " {} ",
            Screen::Add.title()
        ))),
        form_area,
    );

    let hint = Style::new().fg(Color::DarkGray);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(" Up/Down: move between fields", hint)),
            Line::from(Span::styled(
                " Left/Right: change year, genre or read status (PgUp/PgDn: year by 10)",
                hint,
            )),
            Line::from(Span::styled(" Enter: Add Book", hint)),
        ]),
        hints,
    );
}

fn field_line(form: &AddForm, field: AddField) -> Line<'static> {
    let focused = form.focus == field;
    let value = match field {
        AddField::Title => text_value(&form.title, focused),
        AddField::Author => text_value(&form.author, focused),
        AddField::Year => format!("< {} >", form.year),
        AddField::Genre => format!("< {} >", form.genre()),
        AddField::Read => if form.read { "[x]" } else { "[ ]" }.to_string(),
    };

    let (marker, label_style) = if focused {
        (
            "> ",
            Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::new().add_modifier(Modifier::BOLD))
    };
    Line::from(vec![
        Span::styled(format!("{marker}{}: ", field.label()), label_style),
        Span::raw(value),
    ])
}

fn text_value(text: &str, focused: bool) -> String {
    if focused {
        format!("{text}_")
    } else {
        text.to_string()
    }
}
