use thiserror::Error;

/// Everything that can go wrong between the form and the rendered cards.
/// Search surfaces all of these to the user; the categories load only ever
/// logs them and keeps the default filter entries.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please enter at least one search criteria")]
    EmptyCriteria,
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP {status}: {status_text}")]
    Http { status: u16, status_text: String },
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("{0}")]
    MalformedResponse(String),
}
