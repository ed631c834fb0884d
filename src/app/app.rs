use ratatui::widgets::ListState;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::SearchClient;
use crate::model::{default_categories, CategoryOption, SearchCriteria, VideoItem};
use crate::sys::config::Config;
use crate::tui::components::settings::SettingItem;

use super::{handlers, updates, AppState, Banner, FormField, InputMode, MessageKind};

pub struct App {
    pub running: bool,
    pub input_mode: InputMode,
    pub state: AppState,
    pub previous_app_state: AppState,

    pub config: Config,

    // Search form
    pub keyword: String,
    pub keyword_cursor: usize,
    pub channel_id: String,
    pub channel_cursor: usize,
    pub focused_field: FormField,
    pub categories: Vec<CategoryOption>,
    pub selected_category_index: usize,

    // Results
    pub search_results: Vec<VideoItem>,
    pub selected_result_index: Option<usize>,
    pub has_searched: bool,
    pub last_error: Option<String>,

    // Async communication. Each submission carries a snapshot of the
    // config plus a search id; stale ids are dropped on the tick.
    pub search_tx: UnboundedSender<(Config, SearchCriteria, usize)>,
    pub result_rx: UnboundedReceiver<(Result<Vec<VideoItem>, String>, usize)>,
    pub categories_tx: UnboundedSender<Config>,
    pub categories_rx: UnboundedReceiver<Result<Vec<CategoryOption>, String>>,
    pub current_search_id: usize,
    pub is_searching: bool,

    // Messages/status
    pub banner: Option<Banner>,

    // Settings panel
    pub settings_state: ListState,
    pub settings_editing_item: Option<SettingItem>,
    pub settings_input: String,
    pub settings_cursor_position: usize,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (search_tx, mut search_rx) =
            mpsc::unbounded_channel::<(Config, SearchCriteria, usize)>();
        let (result_tx, result_rx) = mpsc::unbounded_channel();

        let client = SearchClient::new();

        // Search worker. Every submission runs on its own task so a slow
        // request cannot delay a newer one; the id decides who wins.
        let search_client = client.clone();
        tokio::spawn(async move {
            while let Some((config, criteria, id)) = search_rx.recv().await {
                let tx = result_tx.clone();
                let client = search_client.clone();
                tokio::spawn(async move {
                    let result = client
                        .search(&config.api_base_url, &config.api_token, &criteria)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = tx.send((result, id));
                });
            }
        });

        let (categories_tx, mut categories_req_rx) = mpsc::unbounded_channel::<Config>();
        let (categories_res_tx, categories_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Some(config) = categories_req_rx.recv().await {
                let result = client
                    .fetch_categories(&config.api_base_url, &config.api_token)
                    .await
                    .map_err(|e| e.to_string());
                let _ = categories_res_tx.send(result);
            }
        });

        Self {
            running: true,
            input_mode: InputMode::Editing,
            state: AppState::Search,
            previous_app_state: AppState::Search,
            config,
            keyword: String::new(),
            keyword_cursor: 0,
            channel_id: String::new(),
            channel_cursor: 0,
            focused_field: FormField::Keyword,
            categories: default_categories(),
            selected_category_index: 0,
            search_results: Vec::new(),
            selected_result_index: None,
            has_searched: false,
            last_error: None,
            search_tx,
            result_rx,
            categories_tx,
            categories_rx,
            current_search_id: 0,
            is_searching: false,
            banner: None,
            settings_state: ListState::default(),
            settings_editing_item: None,
            settings_input: String::new(),
            settings_cursor_position: 0,
        }
    }

    pub fn handle_key_event(&mut self, key: crossterm::event::KeyEvent) {
        handlers::handle_key_event(self, key);
    }

    pub fn handle_paste(&mut self, text: String) {
        handlers::handle_paste(self, text);
    }

    pub fn on_tick(&mut self) {
        updates::on_tick(self);
    }

    /// The form contents as one criteria value.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            keyword: self.keyword.clone(),
            channel_id: self.channel_id.clone(),
            category: self
                .categories
                .get(self.selected_category_index)
                .map(|c| c.value.clone())
                .unwrap_or_default(),
        }
    }

    pub fn set_banner(&mut self, text: impl Into<String>, kind: MessageKind) {
        self.banner = Some(Banner::new(text.into(), kind));
    }
}
