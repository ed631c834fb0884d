use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::{selected_card, App};

use super::theme::{
    THEME_ACCENT, THEME_BORDER, THEME_ERROR, THEME_FG, THEME_HIGHLIGHT,
};
use super::widgets::{centered_rect, truncate_str};

pub fn render_main_area(f: &mut ratatui::Frame, app: &App, area: Rect) {
    if let Some(error) = &app.last_error {
        render_error_panel(f, error, area);
        return;
    }

    if !app.has_searched {
        render_greeting_section(f, area);
        return;
    }

    if app.is_searching && app.search_results.is_empty() {
        let loading = Paragraph::new("Searching...")
            .style(Style::default().fg(THEME_HIGHLIGHT))
            .centered();
        f.render_widget(loading, centered_rect(50, 20, area));
        return;
    }

    if app.search_results.is_empty() {
        let empty = Paragraph::new("No videos found matching your criteria.")
            .style(Style::default().fg(THEME_FG))
            .centered();
        f.render_widget(empty, centered_rect(60, 20, area));
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_result_list(f, app, chunks[0]);
    render_card_detail(f, app, chunks[1]);
}

fn render_result_list(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let count = app.search_results.len();
    let plural = if count == 1 { "" } else { "s" };
    let title = format!(" Results — Found {count} video{plural} ");

    let inner_width = (area.width as usize).saturating_sub(4);
    let items: Vec<ListItem> = app
        .search_results
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let card = item.to_card();
            let prefix = format!(" {}. ", i + 1);
            let badge = format!(" [{}]", card.category);
            let avail = inner_width.saturating_sub(prefix.chars().count() + badge.chars().count());
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(THEME_FG)),
                Span::styled(
                    truncate_str(&card.title, avail),
                    Style::default().fg(THEME_FG).add_modifier(Modifier::BOLD),
                ),
                Span::styled(badge, Style::default().fg(THEME_ACCENT)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME_BORDER)),
        )
        .highlight_style(
            Style::default()
                .bg(THEME_HIGHLIGHT)
                .fg(THEME_FG)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("┃ ");

    let mut state = ListState::default();
    state.select(app.selected_result_index);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_card_detail(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Video ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME_BORDER));

    let Some(card) = selected_card(app) else {
        f.render_widget(block, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            card.title,
            Style::default().fg(THEME_FG).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(THEME_BORDER)),
            Span::styled(card.category, Style::default().fg(THEME_ACCENT)),
        ]),
    ];

    // No thumbnail, no line. The card never shows a broken placeholder.
    if let Some(thumbnail) = card.thumbnail {
        lines.push(Line::from(vec![
            Span::styled("Thumbnail: ", Style::default().fg(THEME_BORDER)),
            Span::styled(thumbnail, Style::default().fg(THEME_FG)),
        ]));
    }

    lines.push(Line::from(""));
    match card.watch_url {
        Some(url) => lines.push(Line::from(vec![
            Span::styled("Watch: ", Style::default().fg(THEME_BORDER)),
            Span::styled(
                url,
                Style::default()
                    .fg(THEME_ACCENT)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ])),
        None => lines.push(Line::from(Span::styled(
            "Watch: (no link available)",
            Style::default().fg(THEME_BORDER),
        ))),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "o: open in browser   y: copy link",
        Style::default().fg(THEME_BORDER),
    )));

    let detail = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(detail, area);
}

fn render_error_panel(f: &mut ratatui::Frame, error: &str, area: Rect) {
    let panel = Paragraph::new(format!("Error: {error}"))
        .style(Style::default().fg(THEME_ERROR))
        .wrap(Wrap { trim: false })
        .centered()
        .block(
            Block::default()
                .title(" Search failed ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME_ERROR)),
        );
    f.render_widget(panel, centered_rect(70, 40, area));
}

fn render_greeting_section(f: &mut ratatui::Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "vidscout",
            Style::default()
                .fg(THEME_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter a keyword, channel id or category and press Enter to search.",
            Style::default().fg(THEME_FG),
        )),
        Line::from(Span::styled(
            "Press s to configure the API base URL and token.",
            Style::default().fg(THEME_BORDER),
        )),
    ];
    let greeting = Paragraph::new(lines).centered();
    f.render_widget(greeting, centered_rect(70, 30, area));
}
