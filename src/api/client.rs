use reqwest::Url;
use serde_json::Value;

use super::error::ApiError;
use super::normalize::{normalize_categories, normalize_search_results};
use crate::model::{CategoryOption, SearchCriteria, VideoItem};

const SEARCH_PATH: &str = "/api/search-unlisted/";
const CATEGORIES_PATH: &str = "/api/categories/";

/// Thin client over the two backend endpoints. Holds nothing but the
/// reqwest connection pool; base URL and token are threaded in per call so
/// the caller stays the single owner of that configuration.
#[derive(Clone, Default)]
pub struct SearchClient {
    client: reqwest::Client,
}

impl SearchClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one search. Validation happens before any network traffic.
    pub async fn search(
        &self,
        base_url: &str,
        token: &str,
        criteria: &SearchCriteria,
    ) -> Result<Vec<VideoItem>, ApiError> {
        validate(criteria)?;
        let criteria = criteria.trimmed();
        let url = build_request_url(
            base_url,
            SEARCH_PATH,
            &[
                ("keyword", criteria.keyword.as_str()),
                ("channel_id", criteria.channel_id.as_str()),
                ("category", criteria.category.as_str()),
            ],
        )?;
        log::info!("searching {url}");
        let envelope = self.fetch_json(url, token).await?;
        normalize_search_results(&envelope)
    }

    /// Fetches the category filter entries. Only request-level failures
    /// surface here; an unrecognized envelope comes back as an empty list.
    pub async fn fetch_categories(
        &self,
        base_url: &str,
        token: &str,
    ) -> Result<Vec<CategoryOption>, ApiError> {
        let url = build_request_url(base_url, CATEGORIES_PATH, &[])?;
        let envelope = self.fetch_json(url, token).await?;
        Ok(normalize_categories(&envelope))
    }

    /// One best-effort GET: no retries, no timeout of our own.
    async fn fetch_json(&self, url: Url, token: &str) -> Result<Value, ApiError> {
        let mut request = self.client.get(url);
        if !token.is_empty() {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

/// Fails when every criteria field is empty after trimming. Checked before
/// the request is built.
pub fn validate(criteria: &SearchCriteria) -> Result<(), ApiError> {
    if criteria.is_empty() {
        Err(ApiError::EmptyCriteria)
    } else {
        Ok(())
    }
}

/// Resolves `path` against `base_url` and appends every parameter with a
/// non-empty value. Empty values are omitted entirely, not sent as blank
/// parameters.
pub fn build_request_url(
    base_url: &str,
    path: &str,
    params: &[(&str, &str)],
) -> Result<Url, ApiError> {
    if base_url.trim().is_empty() {
        return Err(ApiError::InvalidUrl(
            "base URL is not configured".to_string(),
        ));
    }
    let base =
        Url::parse(base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
    let mut url = base
        .join(path)
        .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))?;

    if params.iter().any(|(_, value)| !value.is_empty()) {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in params {
            if !value.is_empty() {
                pairs.append_pair(name, value);
            }
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_omitted_from_the_query() {
        let url = build_request_url(
            "http://x/",
            "/api/search-unlisted/",
            &[("keyword", "cats"), ("category", "")],
        )
        .unwrap();
        assert_eq!(url.as_str(), "http://x/api/search-unlisted/?keyword=cats");
    }

    #[test]
    fn all_empty_values_leave_no_query_string() {
        let url = build_request_url(
            "http://x/",
            "/api/search-unlisted/",
            &[("keyword", ""), ("channel_id", ""), ("category", "")],
        )
        .unwrap();
        assert_eq!(url.as_str(), "http://x/api/search-unlisted/");
        assert!(url.query().is_none());
    }

    #[test]
    fn missing_or_bad_base_url_is_rejected() {
        assert!(matches!(
            build_request_url("", "/api/categories/", &[]),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            build_request_url("not a url", "/api/categories/", &[]),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn validation_requires_one_non_empty_field() {
        let empty = SearchCriteria::default();
        assert!(matches!(validate(&empty), Err(ApiError::EmptyCriteria)));

        let ok = SearchCriteria {
            keyword: " a ".to_string(),
            ..Default::default()
        };
        assert!(validate(&ok).is_ok());
    }
}
