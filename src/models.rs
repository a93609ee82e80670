//! Frontend Models
//!
//! Data structures matching the portfolio JSON payload.

use serde::Serialize;

/// Category data structure (drives the filter bar)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: i64,
    pub label: String,
}

#[cfg(test)]
impl Category {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self { id, label: label.into() }
    }
}

/// Portfolio item data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: i64,
    pub title: String,
    /// Not validated on load; items pointing at an unknown category never display
    pub category_id: i64,
    pub image_url: String,
    pub link_url: String,
    pub description: String,
    /// CSS color used to tint the thumbnail on hover
    pub overlay_color: String,
}

#[cfg(test)]
impl Item {
    pub fn new(id: i64, title: impl Into<String>, category_id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            category_id,
            image_url: String::new(),
            link_url: String::new(),
            description: String::new(),
            overlay_color: String::new(),
        }
    }
}

/// Categories and items, always replaced as a whole
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Portfolio {
    pub categories: Vec<Category>,
    pub items: Vec<Item>,
}

#[cfg(test)]
impl Portfolio {
    pub fn new(categories: Vec<Category>, items: Vec<Item>) -> Self {
        Self { categories, items }
    }
}

impl Portfolio {
    /// Items belonging to `category_id`, in list order
    pub fn items_in_category(&self, category_id: i64) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.category_id == category_id)
    }
}
