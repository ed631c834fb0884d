use ratatui::{
    prelude::*,
    widgets::*,
};

use crate::app::App;

use super::theme::{THEME_ACCENT, THEME_BG, THEME_FG, THEME_HIGHLIGHT};
use super::widgets::centered_rect_fixed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    BaseUrl,
    Token,
    EnableLogging,
}

impl SettingItem {
    pub fn all() -> &'static [Self] {
        &[Self::BaseUrl, Self::Token, Self::EnableLogging]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BaseUrl => "API Base URL",
            Self::Token => "API Token",
            Self::EnableLogging => "Enable Logging",
        }
    }
}

pub fn render_settings_menu(f: &mut Frame, app: &mut App, area: Rect) {
    let items = SettingItem::all();

    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(THEME_BG).fg(THEME_FG))
        .border_style(Style::default().fg(THEME_HIGHLIGHT));

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let value = match item {
                SettingItem::BaseUrl => app.config.api_base_url.clone(),
                SettingItem::Token => {
                    if app.config.api_token.is_empty() {
                        "(not set)".to_string()
                    } else {
                        // Never draw the credential itself.
                        "•".repeat(app.config.api_token.chars().count().min(24))
                    }
                }
                SettingItem::EnableLogging => {
                    (if app.config.enable_logging { "On" } else { "Off" }).to_string()
                }
            };

            let content = Line::from(vec![
                Span::styled(
                    format!("{:<16}: ", item.name()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(value, Style::default().fg(THEME_ACCENT)),
            ]);
            ListItem::new(content)
        })
        .collect();

    let list = List::new(list_items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(THEME_HIGHLIGHT)
                .fg(THEME_BG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("┃ ");

    let area = centered_rect_fixed(64, (items.len() + 2) as u16, area);
    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut app.settings_state);

    if let Some(item) = app.settings_editing_item {
        render_input_popup(f, app, item);
    }
}

fn render_input_popup(f: &mut Frame, app: &App, item: SettingItem) {
    let area = centered_rect_fixed(56, 3, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Edit {} ", item.name()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME_ACCENT));

    let width = (area.width as usize).saturating_sub(2);
    let scroll = app
        .settings_cursor_position
        .saturating_sub(width.saturating_sub(1));
    let display_text: String = app.settings_input.chars().skip(scroll).take(width).collect();

    let input = Paragraph::new(display_text)
        .style(Style::default().fg(THEME_ACCENT).add_modifier(Modifier::BOLD))
        .block(block);

    f.render_widget(input, area);
    f.set_cursor_position((
        area.x + (app.settings_cursor_position.saturating_sub(scroll)) as u16 + 1,
        area.y + 1,
    ));
}
