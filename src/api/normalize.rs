//! Envelope normalization. The backend wraps its lists in whichever shape
//! it feels like, so each endpoint gets an ordered table of
//! (name, extractor) pairs and the first structural match is authoritative.

use serde_json::Value;

use super::error::ApiError;
use crate::model::{CategoryOption, VideoItem};

type Extractor = fn(&Value) -> Option<Vec<Value>>;

/// Shapes accepted from the search endpoint, in priority order. The order
/// is part of the contract: a `{status:"success", data}` wrapper wins over
/// a `results` field, which wins over a bare array, which wins over a
/// `videos` field.
pub const SEARCH_SHAPES: &[(&str, Extractor)] = &[
    ("success/data", |v| {
        if v["status"] == "success" {
            promoted_field(v, "data")
        } else {
            None
        }
    }),
    ("results", |v| promoted_field(v, "results")),
    ("bare array", bare_array),
    ("videos", |v| promoted_field(v, "videos")),
];

/// Shapes accepted from the categories endpoint, in priority order. Unlike
/// search, a field only matches when it holds an actual array; anything
/// else falls through to the empty-list fallback.
pub const CATEGORY_SHAPES: &[(&str, Extractor)] = &[
    ("bare array", bare_array),
    ("results", |v| array_field(v, "results")),
    ("data", |v| array_field(v, "data")),
    ("categories", |v| array_field(v, "categories")),
];

fn bare_array(v: &Value) -> Option<Vec<Value>> {
    v.as_array().cloned()
}

/// A field holding an array is authoritative; a single object is promoted
/// to a one-element list. Scalars and null carry nothing renderable and
/// fall through to the next shape.
fn promoted_field(v: &Value, key: &str) -> Option<Vec<Value>> {
    match v.get(key) {
        Some(Value::Array(items)) => Some(items.clone()),
        Some(obj @ Value::Object(_)) => Some(vec![obj.clone()]),
        _ => None,
    }
}

fn array_field(v: &Value, key: &str) -> Option<Vec<Value>> {
    v.get(key).and_then(Value::as_array).cloned()
}

fn extract_first(shapes: &[(&str, Extractor)], envelope: &Value) -> Option<Vec<Value>> {
    shapes
        .iter()
        .find_map(|(_, extract)| extract(envelope))
}

/// Normalizes a search response into canonical items. An envelope matching
/// none of the supported shapes is a hard error: a search with nothing
/// renderable has no safe fallback.
pub fn normalize_search_results(envelope: &Value) -> Result<Vec<VideoItem>, ApiError> {
    let raw = extract_first(SEARCH_SHAPES, envelope)
        .ok_or_else(|| ApiError::MalformedResponse("Invalid response format".to_string()))?;
    Ok(raw.iter().map(map_video_item).collect())
}

/// Normalizes a categories response. An unrecognized envelope yields an
/// empty list; the caller keeps its default filter entries instead.
pub fn normalize_categories(envelope: &Value) -> Vec<CategoryOption> {
    extract_first(CATEGORY_SHAPES, envelope)
        .map(|raw| raw.iter().map(map_category).collect())
        .unwrap_or_default()
}

fn map_video_item(v: &Value) -> VideoItem {
    VideoItem {
        title: v["title"].as_str().map(str::to_string),
        thumbnail: v["thumbnail"].as_str().map(str::to_string),
        category: v["category"].as_str().map(str::to_string),
        // The backend uses `url` and `video_url` interchangeably; `url` wins.
        url: v["url"]
            .as_str()
            .or_else(|| v["video_url"].as_str())
            .map(str::to_string),
    }
}

fn map_category(v: &Value) -> CategoryOption {
    if let Some(s) = v.as_str() {
        return CategoryOption::new(s, s);
    }
    let value = scalar_field(v, "id")
        .or_else(|| scalar_field(v, "value"))
        .or_else(|| scalar_field(v, "name"))
        .unwrap_or_default();
    let label = scalar_field(v, "name")
        .or_else(|| scalar_field(v, "label"))
        .or_else(|| scalar_field(v, "title"))
        .unwrap_or_else(|| value.clone());
    CategoryOption::new(value, label)
}

// Category ids show up as strings or numbers depending on the backend.
fn scalar_field(v: &Value, key: &str) -> Option<String> {
    match v.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn items() -> Value {
        json!([
            {"title": "A", "url": "http://w/a"},
            {"title": "B", "video_url": "http://w/b"},
            {"title": "C"}
        ])
    }

    #[test]
    fn bare_array_passes_through_in_order() {
        let out = normalize_search_results(&items()).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].title.as_deref(), Some("A"));
        assert_eq!(out[1].title.as_deref(), Some("B"));
        assert_eq!(out[2].title.as_deref(), Some("C"));
    }

    #[test]
    fn all_search_shapes_normalize_identically() {
        let envelopes = [
            json!({"status": "success", "data": items()}),
            json!({"results": items()}),
            items(),
            json!({"videos": items()}),
        ];
        let expected = normalize_search_results(&items()).unwrap();
        for envelope in &envelopes {
            assert_eq!(normalize_search_results(envelope).unwrap(), expected);
        }
    }

    #[test]
    fn search_priority_order_is_fixed() {
        let names: Vec<&str> = SEARCH_SHAPES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["success/data", "results", "bare array", "videos"]);

        // When several shapes match, the earlier one wins.
        let both = json!({
            "results": [{"title": "from results"}],
            "videos": [{"title": "from videos"}]
        });
        let out = normalize_search_results(&both).unwrap();
        assert_eq!(out[0].title.as_deref(), Some("from results"));

        let wrapped = json!({
            "status": "success",
            "data": [{"title": "from data"}],
            "results": [{"title": "from results"}]
        });
        let out = normalize_search_results(&wrapped).unwrap();
        assert_eq!(out[0].title.as_deref(), Some("from data"));
    }

    #[test]
    fn status_must_be_success_for_the_data_shape() {
        let envelope = json!({"status": "error", "data": [{"title": "X"}]});
        assert!(normalize_search_results(&envelope).is_err());
    }

    #[test]
    fn single_object_is_promoted_to_one_element_list() {
        let envelope = json!({"status": "success", "data": {"title": "X"}});
        let out = normalize_search_results(&envelope).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title.as_deref(), Some("X"));
    }

    #[test]
    fn unrecognized_envelope_is_fatal_for_search_only() {
        let envelope = json!({"message": "hi"});
        match normalize_search_results(&envelope) {
            Err(ApiError::MalformedResponse(msg)) => {
                assert_eq!(msg, "Invalid response format");
            }
            other => panic!("expected malformed-response error, got {other:?}"),
        }
        assert!(normalize_categories(&envelope).is_empty());
    }

    #[test]
    fn scalar_fields_fall_through_instead_of_promoting() {
        let junk = [
            json!({"results": ""}),
            json!({"results": 0}),
            json!({"results": false}),
            json!({"results": null}),
        ];
        for envelope in &junk {
            assert!(
                normalize_search_results(envelope).is_err(),
                "expected {envelope} to be rejected"
            );
        }

        // A scalar in an earlier shape does not shadow a later real one.
        let mixed = json!({"results": 0, "videos": [{"title": "X"}]});
        let out = normalize_search_results(&mixed).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title.as_deref(), Some("X"));
    }

    #[test]
    fn url_takes_precedence_over_video_url() {
        let envelope = json!([{"url": "http://w/a", "video_url": "http://w/b"}]);
        let out = normalize_search_results(&envelope).unwrap();
        assert_eq!(out[0].url.as_deref(), Some("http://w/a"));
    }

    #[test]
    fn category_priority_order_is_fixed() {
        let names: Vec<&str> = CATEGORY_SHAPES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["bare array", "results", "data", "categories"]);
    }

    #[test]
    fn categories_accept_strings_and_objects() {
        let envelope = json!({"categories": [
            "Music",
            {"id": 12, "name": "Autos & Vehicles"},
            {"value": "9", "label": "Gaming"},
            {"name": "Shorts"},
            "Music"
        ]});
        let out = normalize_categories(&envelope);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], CategoryOption::new("Music", "Music"));
        assert_eq!(out[1], CategoryOption::new("12", "Autos & Vehicles"));
        assert_eq!(out[2], CategoryOption::new("9", "Gaming"));
        assert_eq!(out[3], CategoryOption::new("Shorts", "Shorts"));
        // Duplicates are preserved; no dedup.
        assert_eq!(out[4], out[0]);
    }

    #[test]
    fn categories_require_an_array_field() {
        // A single object under `results` is not promoted for categories.
        let envelope = json!({"results": {"name": "Music"}});
        assert!(normalize_categories(&envelope).is_empty());
    }
}
