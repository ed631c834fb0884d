mod client;
mod error;
mod normalize;

pub use client::{build_request_url, validate, SearchClient};
pub use error::ApiError;
pub use normalize::{normalize_categories, normalize_search_results};
