use serde::{Deserialize, Serialize};

use super::category::Category;

/// Entry identifier: creation time in milliseconds, bumped when needed so it
/// stays unique and strictly increasing within a collection.
pub type EntryId = i64;

/// Tile color given to new entries.
pub const DEFAULT_COLOR: &str = "#9333EA";

/// One bookmarked site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub category: Category,
    pub id: EntryId,
}

impl Entry {
    /// Builds an entry from a draft and an already-assigned id.
    pub fn from_draft(draft: &Draft, id: EntryId) -> Self {
        Self {
            title: draft.title.clone(),
            url: draft.url.clone(),
            description: draft.description.clone(),
            color: draft.color.clone(),
            category: draft.category,
            id,
        }
    }

    /// Shadow tint for the tile glow: the color with a `40` alpha suffix.
    pub fn glow_color(&self) -> String {
        format!("{}40", self.color)
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Unsaved state of the "add site" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub url: String,
    pub description: String,
    pub color: String,
    pub category: Category,
}

impl Draft {
    /// Empty draft using the given default color.
    pub fn with_color(color: &str) -> Self {
        Self {
            title: String::new(),
            url: String::new(),
            description: String::new(),
            color: color.to_string(),
            category: Category::default(),
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::with_color(DEFAULT_COLOR)
    }
}

/// A single field edit on the draft, as captured from one form input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum DraftField {
    Title(String),
    Url(String),
    Description(String),
    Color(String),
    Category(Category),
}

impl DraftField {
    /// Applies this edit to `draft`.
    pub fn apply(self, draft: &mut Draft) {
        match self {
            DraftField::Title(v) => draft.title = v,
            DraftField::Url(v) => draft.url = v,
            DraftField::Description(v) => draft.description = v,
            DraftField::Color(v) => draft.color = v,
            DraftField::Category(c) => draft.category = c,
        }
    }
}
