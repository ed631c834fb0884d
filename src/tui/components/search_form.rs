use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppState, FormField, InputMode};

use super::theme::{THEME_ACCENT, THEME_BORDER, THEME_FG, THEME_HIGHLIGHT};

pub fn render_search_form(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    render_text_field(
        f,
        app,
        chunks[0],
        " Keyword ",
        &app.keyword,
        app.keyword_cursor,
        FormField::Keyword,
    );
    render_text_field(
        f,
        app,
        chunks[1],
        " Channel ID ",
        &app.channel_id,
        app.channel_cursor,
        FormField::ChannelId,
    );
    render_category_field(f, app, chunks[2]);
}

fn is_editing(app: &App, field: FormField) -> bool {
    app.state != AppState::Settings
        && app.input_mode == InputMode::Editing
        && app.focused_field == field
}

fn field_style(app: &App, field: FormField) -> (Style, Style) {
    if is_editing(app, field) {
        (
            Style::default().fg(THEME_ACCENT).add_modifier(Modifier::BOLD),
            Style::default().fg(THEME_ACCENT),
        )
    } else if app.focused_field == field {
        (
            Style::default().fg(THEME_HIGHLIGHT),
            Style::default().fg(THEME_HIGHLIGHT),
        )
    } else {
        (
            Style::default().fg(THEME_FG),
            Style::default().fg(THEME_BORDER),
        )
    }
}

fn render_text_field(
    f: &mut ratatui::Frame,
    app: &App,
    area: Rect,
    title: &str,
    value: &str,
    cursor: usize,
    field: FormField,
) {
    let width = (area.width as usize).saturating_sub(2);
    let scroll = cursor.saturating_sub(width.saturating_sub(1));
    let display_value: String = value.chars().skip(scroll).take(width).collect();

    let (text_style, border_style) = field_style(app, field);
    let input = Paragraph::new(display_value).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title.to_string()),
    );
    f.render_widget(input, area);

    if is_editing(app, field) {
        f.set_cursor_position((
            area.x + (cursor.saturating_sub(scroll)) as u16 + 1,
            area.y + 1,
        ));
    }
}

fn render_category_field(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let label = app
        .categories
        .get(app.selected_category_index)
        .map(|c| c.label.as_str())
        .unwrap_or("All Categories");
    let width = (area.width as usize).saturating_sub(6);
    let display: String = label.chars().take(width).collect();

    let (text_style, border_style) = field_style(app, FormField::Category);
    let selector = Paragraph::new(format!("< {display} >"))
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style)
                .title(" Category "),
        );
    f.render_widget(selector, area);
}
