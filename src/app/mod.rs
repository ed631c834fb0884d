mod actions;
mod app;
mod handlers;
mod state;
mod updates;

pub use app::App;
pub use state::{AppState, Banner, FormField, InputMode, MessageKind, MESSAGE_TTL};

pub use actions::{reload_categories, selected_card, submit_search};
