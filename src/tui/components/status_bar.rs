use ratatui::{
    prelude::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, AppState, InputMode};

use super::theme::{THEME_ACCENT, THEME_BORDER};

pub fn render_status_bar(f: &mut ratatui::Frame, app: &App, area: Rect) {
    let mode_str = if app.is_searching {
        "LOADING"
    } else {
        match app.input_mode {
            InputMode::Normal => "NORMAL",
            InputMode::Editing => "EDITING",
        }
    };

    let key_hints = match app.state {
        AppState::Settings => "Esc: Back | j/k: Nav | Enter: Edit/Toggle".to_string(),
        _ => match app.input_mode {
            InputMode::Editing => {
                "Esc: Normal Mode | Tab: Next Field | ←/→: Category | Enter: Search".to_string()
            }
            InputMode::Normal => match app.state {
                AppState::Results => {
                    "q: Quit | /: Search | j/k: Nav | o: Open | y: Copy Link | s: Settings"
                        .to_string()
                }
                _ => "q: Quit | /: Edit | Tab: Results | s: Settings | Enter: Search".to_string(),
            },
        },
    };

    let text = if app.is_searching {
        format!(" [{mode_str}] {key_hints} | Searching... ")
    } else {
        format!(" [{mode_str}] {key_hints} ")
    };

    let p = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME_BORDER)),
        )
        .style(Style::default().fg(THEME_ACCENT));
    f.render_widget(p, area);
}
