use crate::api;
use crate::model::VideoCard;

use super::{App, MessageKind};

/// Validates the form and hands the criteria to the search worker.
/// Overlapping submissions are allowed; the freshest id wins when the
/// responses come back.
pub fn submit_search(app: &mut App) {
    let criteria = app.criteria();
    if let Err(e) = api::validate(&criteria) {
        app.set_banner(e.to_string(), MessageKind::Error);
        return;
    }
    if app.config.api_base_url.trim().is_empty() {
        app.set_banner("Please configure the API base URL", MessageKind::Error);
        return;
    }

    app.current_search_id += 1;
    app.is_searching = true;
    app.last_error = None;
    app.has_searched = true;
    app.search_results.clear();
    app.selected_result_index = None;
    app.set_banner("Searching...", MessageKind::Success);

    let _ = app
        .search_tx
        .send((app.config.clone(), criteria, app.current_search_id));
}

/// Kicks off a categories fetch with the current config. Failures never
/// reach the user; the tick loop logs them and keeps the defaults.
pub fn reload_categories(app: &App) {
    let _ = app.categories_tx.send(app.config.clone());
}

pub fn selected_card(app: &App) -> Option<VideoCard> {
    app.selected_result_index
        .and_then(|idx| app.search_results.get(idx))
        .map(|item| item.to_card())
}

pub fn open_selected(app: &mut App) {
    let Some(card) = selected_card(app) else {
        return;
    };
    match card.watch_url {
        Some(url) => {
            if webbrowser::open(&url).is_ok() {
                app.set_banner("Opening in browser...", MessageKind::Success);
            } else {
                app.set_banner("Failed to open browser.", MessageKind::Error);
            }
        }
        None => app.set_banner("This video has no watch link.", MessageKind::Error),
    }
}

pub fn copy_selected_link(app: &mut App) {
    let Some(card) = selected_card(app) else {
        return;
    };
    match card.watch_url {
        Some(url) => {
            if let Ok(mut clipboard) = arboard::Clipboard::new() {
                if clipboard.set_text(url).is_ok() {
                    app.set_banner("Watch link copied to clipboard.", MessageKind::Success);
                } else {
                    app.set_banner("Failed to copy watch link.", MessageKind::Error);
                }
            } else {
                app.set_banner("Clipboard not available.", MessageKind::Error);
            }
        }
        None => app.set_banner("This video has no watch link.", MessageKind::Error),
    }
}

pub fn move_selection(app: &mut App, delta: i32) {
    if app.search_results.is_empty() {
        app.selected_result_index = None;
        return;
    }

    let len = app.search_results.len();
    let current = app.selected_result_index.unwrap_or(0);

    let new_index = if delta > 0 {
        (current + (delta as usize)).min(len - 1)
    } else {
        current.saturating_sub(delta.unsigned_abs() as usize)
    };

    app.selected_result_index = Some(new_index);
}
