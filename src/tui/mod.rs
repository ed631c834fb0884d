pub mod components;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, AppState};

use components::banner::render_banner;
use components::results::render_main_area;
use components::search_form::render_search_form;
use components::settings::render_settings_menu;
use components::status_bar::render_status_bar;
use components::theme::THEME_BG;

pub fn ui(f: &mut Frame, app: &mut App) {
    let mut constraints = vec![
        Constraint::Length(3), // Search form
        Constraint::Min(1),    // Main content
    ];
    if app.banner.is_some() {
        constraints.push(Constraint::Length(3)); // Message banner
    }
    constraints.push(Constraint::Length(3)); // Status bar

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(f.area());

    f.render_widget(
        Block::default().style(Style::default().bg(THEME_BG)),
        f.area(),
    );

    render_search_form(f, app, main_layout[0]);
    render_main_area(f, app, main_layout[1]);

    let mut next = 2;
    if app.banner.is_some() {
        render_banner(f, app, main_layout[next]);
        next += 1;
    }
    render_status_bar(f, app, main_layout[next]);

    if app.state == AppState::Settings {
        render_settings_menu(f, app, f.area());
    }
}
