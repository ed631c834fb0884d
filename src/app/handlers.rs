use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::components::settings::SettingItem;

use super::{actions, App, AppState, FormField, InputMode, MessageKind};

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.state {
        AppState::Settings => handle_settings_keys(app, key),
        _ => match app.input_mode {
            InputMode::Editing => handle_form_keys(app, key),
            InputMode::Normal => handle_normal_keys(app, key),
        },
    }
}

pub fn handle_paste(app: &mut App, text: String) {
    if app.state == AppState::Settings {
        if app.settings_editing_item.is_some() {
            for c in text.chars() {
                insert_char(&mut app.settings_input, &mut app.settings_cursor_position, c);
            }
        }
        return;
    }
    if app.input_mode == InputMode::Editing {
        match app.focused_field {
            FormField::Keyword => {
                for c in text.chars() {
                    insert_char(&mut app.keyword, &mut app.keyword_cursor, c);
                }
            }
            FormField::ChannelId => {
                for c in text.chars() {
                    insert_char(&mut app.channel_id, &mut app.channel_cursor, c);
                }
            }
            FormField::Category => {}
        }
    }
}

fn handle_form_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Enter => actions::submit_search(app),
        KeyCode::Tab | KeyCode::Down => app.focused_field = app.focused_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.focused_field = app.focused_field.prev(),
        code => match app.focused_field {
            FormField::Keyword => edit_text(&mut app.keyword, &mut app.keyword_cursor, code),
            FormField::ChannelId => edit_text(&mut app.channel_id, &mut app.channel_cursor, code),
            FormField::Category => match code {
                KeyCode::Left => cycle_category(app, -1),
                KeyCode::Right | KeyCode::Char(' ') => cycle_category(app, 1),
                _ => {}
            },
        },
    }
}

fn handle_normal_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('/') | KeyCode::Char('i') => {
            app.state = AppState::Search;
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('s') => {
            app.previous_app_state = app.state;
            app.state = AppState::Settings;
            app.settings_state.select(Some(0));
        }
        KeyCode::Tab => {
            app.state = match app.state {
                AppState::Results => AppState::Search,
                _ => AppState::Results,
            };
        }
        _ => match app.state {
            AppState::Results => match key.code {
                KeyCode::Down | KeyCode::Char('j') => actions::move_selection(app, 1),
                KeyCode::Up | KeyCode::Char('k') => actions::move_selection(app, -1),
                KeyCode::Enter | KeyCode::Char('o') => actions::open_selected(app),
                KeyCode::Char('y') => actions::copy_selected_link(app),
                KeyCode::Esc => app.state = AppState::Search,
                _ => {}
            },
            AppState::Search => {
                if key.code == KeyCode::Enter {
                    actions::submit_search(app);
                }
            }
            AppState::Settings => {}
        },
    }
}

fn handle_settings_keys(app: &mut App, key: KeyEvent) {
    if let Some(item) = app.settings_editing_item {
        match key.code {
            KeyCode::Esc => app.settings_editing_item = None,
            KeyCode::Enter => commit_setting(app, item),
            code => edit_text(
                &mut app.settings_input,
                &mut app.settings_cursor_position,
                code,
            ),
        }
        return;
    }

    let items = SettingItem::all();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.state = app.previous_app_state,
        KeyCode::Down | KeyCode::Char('j') => {
            let next = app
                .settings_state
                .selected()
                .map_or(0, |i| (i + 1).min(items.len() - 1));
            app.settings_state.select(Some(next));
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let prev = app.settings_state.selected().map_or(0, |i| i.saturating_sub(1));
            app.settings_state.select(Some(prev));
        }
        KeyCode::Enter => {
            if let Some(item) = app.settings_state.selected().and_then(|i| items.get(i)) {
                begin_setting_edit(app, *item);
            }
        }
        _ => {}
    }
}

fn begin_setting_edit(app: &mut App, item: SettingItem) {
    match item {
        SettingItem::BaseUrl => {
            app.settings_input = app.config.api_base_url.clone();
            app.settings_cursor_position = app.settings_input.chars().count();
            app.settings_editing_item = Some(item);
        }
        SettingItem::Token => {
            app.settings_input = app.config.api_token.clone();
            app.settings_cursor_position = app.settings_input.chars().count();
            app.settings_editing_item = Some(item);
        }
        SettingItem::EnableLogging => {
            app.config.enable_logging = !app.config.enable_logging;
            log::set_max_level(if app.config.enable_logging {
                log::LevelFilter::Info
            } else {
                log::LevelFilter::Off
            });
            persist_config(app);
        }
    }
}

fn commit_setting(app: &mut App, item: SettingItem) {
    match item {
        SettingItem::BaseUrl => {
            app.config.api_base_url = app.settings_input.trim().to_string();
        }
        SettingItem::Token => {
            app.config.api_token = app.settings_input.trim().to_string();
        }
        SettingItem::EnableLogging => {}
    }
    app.settings_editing_item = None;
    persist_config(app);
    // The category filter depends on the endpoint we just repointed.
    actions::reload_categories(app);
}

fn persist_config(app: &mut App) {
    match app.config.save() {
        Ok(()) => app.set_banner("Settings saved.", MessageKind::Success),
        Err(e) => app.set_banner(format!("Failed to save settings: {e}"), MessageKind::Error),
    }
}

fn cycle_category(app: &mut App, delta: i32) {
    if app.categories.is_empty() {
        return;
    }
    let len = app.categories.len() as i32;
    let current = app.selected_category_index as i32;
    app.selected_category_index = ((current + delta).rem_euclid(len)) as usize;
}

// Cursor positions are char offsets; convert before touching the string so
// multi-byte input cannot split a codepoint.
fn byte_index(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn insert_char(text: &mut String, cursor: &mut usize, c: char) {
    let idx = byte_index(text, *cursor);
    text.insert(idx, c);
    *cursor += 1;
}

fn edit_text(text: &mut String, cursor: &mut usize, code: KeyCode) {
    match code {
        KeyCode::Char(c) => insert_char(text, cursor, c),
        KeyCode::Backspace => {
            if *cursor > 0 {
                let idx = byte_index(text, *cursor - 1);
                text.remove(idx);
                *cursor -= 1;
            }
        }
        KeyCode::Left => *cursor = cursor.saturating_sub(1),
        KeyCode::Right => *cursor = (*cursor + 1).min(text.chars().count()),
        _ => {}
    }
}
