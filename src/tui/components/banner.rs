use ratatui::{
    prelude::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, MessageKind};

use super::theme::{THEME_ERROR, THEME_SUCCESS};

/// The transient message strip. Only drawn while a banner is active; the
/// tick loop dismisses it after five seconds.
pub fn render_banner(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let Some(banner) = &app.banner else {
        return;
    };

    let color = match banner.kind {
        MessageKind::Success => THEME_SUCCESS,
        MessageKind::Error => THEME_ERROR,
    };

    let p = Paragraph::new(banner.text.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(p, area);
}
