use ratatui::style::Color;

pub const THEME_BG: Color = Color::Rgb(18, 20, 24); // Near-black slate
pub const THEME_FG: Color = Color::Rgb(220, 224, 232); // Soft white
pub const THEME_ACCENT: Color = Color::Rgb(120, 200, 255); // Cyan-ish
pub const THEME_HIGHLIGHT: Color = Color::Rgb(255, 170, 60); // Amber
pub const THEME_BORDER: Color = Color::Rgb(70, 80, 100); // Muted blue-grey
pub const THEME_SUCCESS: Color = Color::Rgb(120, 220, 140); // Green
pub const THEME_ERROR: Color = Color::Rgb(240, 90, 90); // Red
