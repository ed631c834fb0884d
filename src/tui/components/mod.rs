pub mod banner;
pub mod results;
pub mod search_form;
pub mod settings;
pub mod status_bar;
pub mod theme;
pub mod widgets;
