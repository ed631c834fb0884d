use crate::model::CategoryOption;

use super::{App, AppState, Banner, InputMode, MessageKind};

pub fn on_tick(app: &mut App) {
    // Search responses. Anything tagged with a superseded id is dropped:
    // the latest submission wins, whatever order the responses arrive in.
    while let Ok((result, id)) = app.result_rx.try_recv() {
        if id != app.current_search_id {
            continue;
        }
        app.is_searching = false;
        match result {
            Ok(items) => {
                let count = items.len();
                log::info!("search returned {count} videos");
                app.search_results = items;
                app.selected_result_index = if count > 0 { Some(0) } else { None };
                app.last_error = None;
                app.state = AppState::Results;
                app.input_mode = InputMode::Normal;
                if count > 0 {
                    app.set_banner(
                        format!("Successfully loaded {count} videos"),
                        MessageKind::Success,
                    );
                }
            }
            Err(e) => {
                log::error!("search failed: {e}");
                app.last_error = Some(e.clone());
                app.set_banner(format!("Search failed: {e}"), MessageKind::Error);
            }
        }
    }

    // Categories responses. Every failure path keeps the defaults; the
    // user never sees a categories error.
    while let Ok(result) = app.categories_rx.try_recv() {
        match result {
            Ok(options) if !options.is_empty() => {
                log::info!("loaded {} categories", options.len());
                let mut categories = vec![CategoryOption::new("", "All Categories")];
                categories.extend(options);
                app.categories = categories;
                if app.selected_category_index >= app.categories.len() {
                    app.selected_category_index = 0;
                }
            }
            Ok(_) => {
                log::warn!("categories endpoint returned nothing usable, keeping defaults");
            }
            Err(e) => {
                log::warn!("failed to load categories: {e}");
            }
        }
    }

    if app.banner.as_ref().is_some_and(Banner::expired) {
        app.banner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VideoItem;
    use crate::sys::config::Config;
    use tokio::sync::mpsc;

    fn item(title: &str) -> VideoItem {
        VideoItem {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn stale_search_results_are_dropped_on_tick() {
        let mut app = App::new(Config::default());
        // Feed the tick loop directly instead of going through the worker.
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        app.result_rx = result_rx;

        // Two submissions happened; only id 2 is current.
        app.current_search_id = 2;
        app.is_searching = true;

        result_tx.send((Ok(vec![item("stale")]), 1)).unwrap();
        result_tx.send((Ok(vec![item("fresh")]), 2)).unwrap();
        on_tick(&mut app);

        assert_eq!(app.search_results.len(), 1);
        assert_eq!(app.search_results[0].title.as_deref(), Some("fresh"));
        assert_eq!(app.state, AppState::Results);
        assert!(!app.is_searching);

        // A stale straggler arriving later changes nothing.
        result_tx.send((Ok(vec![item("late stale")]), 1)).unwrap();
        on_tick(&mut app);
        assert_eq!(app.search_results[0].title.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn stale_errors_are_dropped_too() {
        let mut app = App::new(Config::default());
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        app.result_rx = result_rx;

        app.current_search_id = 2;
        app.is_searching = true;

        result_tx
            .send((Err("connection refused".to_string()), 1))
            .unwrap();
        result_tx.send((Ok(vec![item("fresh")]), 2)).unwrap();
        on_tick(&mut app);

        assert!(app.last_error.is_none());
        assert_eq!(app.search_results.len(), 1);
    }
}
