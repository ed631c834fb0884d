use serde::{Deserialize, Serialize};

/// What the user typed into the search form. All fields are free-form;
/// a search is valid as long as at least one of them is non-empty after
/// trimming.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub keyword: String,
    pub channel_id: String,
    pub category: String,
}

impl SearchCriteria {
    pub fn trimmed(&self) -> Self {
        Self {
            keyword: self.keyword.trim().to_string(),
            channel_id: self.channel_id.trim().to_string(),
            category: self.category.trim().to_string(),
        }
    }

    /// True when every field is empty after trimming.
    pub fn is_empty(&self) -> bool {
        self.keyword.trim().is_empty()
            && self.channel_id.trim().is_empty()
            && self.category.trim().is_empty()
    }
}

/// Canonical video record after envelope normalization. Every field is
/// optional because the backend omits whatever it feels like omitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoItem {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub category: Option<String>,
    pub url: Option<String>,
}

impl VideoItem {
    /// Pure mapping to the renderable card. Defaults are applied here so
    /// the UI never has to deal with absent fields.
    pub fn to_card(&self) -> VideoCard {
        VideoCard {
            title: self
                .title
                .clone()
                .unwrap_or_else(|| "Untitled Video".to_string()),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| "Uncategorized".to_string()),
            thumbnail: self.thumbnail.clone(),
            watch_url: self.url.clone(),
        }
    }
}

/// Renderable record for one result card. `thumbnail` stays optional (an
/// absent thumbnail is simply not shown); `watch_url` stays optional (the
/// card shows a non-navigating placeholder instead).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub title: String,
    pub category: String,
    pub thumbnail: Option<String>,
    pub watch_url: Option<String>,
}

/// One entry of the category filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl CategoryOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// The static filter entries shown before the categories endpoint has
/// answered, and kept whenever it fails. Mirrors the category table the
/// backend serves.
pub fn default_categories() -> Vec<CategoryOption> {
    let mut options = vec![CategoryOption::new("", "All Categories")];
    options.extend(
        [
            "Autos & Vehicles",
            "Comedy",
            "Education",
            "Entertainment",
            "Film & Animation",
            "Gaming",
            "Howto & Style",
            "Movies",
            "Music",
            "News & Politics",
            "Nonprofits & Activism",
            "People & Blogs",
            "Pets & Animals",
            "Science & Technology",
            "Shorts",
            "Shows",
            "Sports",
            "Trailers",
            "Travel & Events",
        ]
        .into_iter()
        .map(|name| CategoryOption::new(name, name)),
    );
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_item_maps_to_placeholder_card() {
        let card = VideoItem::default().to_card();
        assert_eq!(card.title, "Untitled Video");
        assert_eq!(card.category, "Uncategorized");
        assert!(card.thumbnail.is_none());
        assert!(card.watch_url.is_none());
    }

    #[test]
    fn populated_item_keeps_its_fields() {
        let item = VideoItem {
            title: Some("X".to_string()),
            thumbnail: Some("http://cdn/x.jpg".to_string()),
            category: Some("Music".to_string()),
            url: Some("http://watch/x".to_string()),
        };
        let card = item.to_card();
        assert_eq!(card.title, "X");
        assert_eq!(card.category, "Music");
        assert_eq!(card.thumbnail.as_deref(), Some("http://cdn/x.jpg"));
        assert_eq!(card.watch_url.as_deref(), Some("http://watch/x"));
    }

    #[test]
    fn criteria_emptiness_ignores_whitespace() {
        let empty = SearchCriteria {
            keyword: "   ".to_string(),
            channel_id: String::new(),
            category: "\t".to_string(),
        };
        assert!(empty.is_empty());

        let ok = SearchCriteria {
            keyword: " a ".to_string(),
            ..Default::default()
        };
        assert!(!ok.is_empty());
        assert_eq!(ok.trimmed().keyword, "a");
    }

    #[test]
    fn default_categories_start_with_all() {
        let cats = default_categories();
        assert_eq!(cats[0].value, "");
        assert_eq!(cats[0].label, "All Categories");
        assert!(cats.len() > 1);
    }
}
