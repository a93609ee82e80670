//! Page View Model
//!
//! Pure mapping from `AppState` to the tree the components draw. Anything
//! clickable carries the `Msg` it emits; components only forward it.

use crate::selection::{effective_selected_category, effective_selected_item};
use crate::store::AppState;
use crate::update::Msg;

pub const PAGE_TITLE: &str = "Portfolio";
pub const PAGE_SUBTITLE: &str = "Selected work, grouped by category";

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub categories: Vec<CategoryButton>,
    pub detail: Option<DetailView>,
    pub content: ContentView,
}

/// One entry of the category bar
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryButton {
    pub id: i64,
    pub label: String,
    pub selected: bool,
    /// None for the selected category: clicking it does nothing
    pub on_click: Option<Msg>,
}

/// Detail panel for the effective selected item
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub item_id: i64,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentView {
    ErrorBanner(String),
    Grid(Vec<Thumbnail>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub item_id: i64,
    pub title: String,
    pub image_url: String,
    pub overlay_color: String,
    pub selected: bool,
    pub on_click: Msg,
}

pub fn render(state: &AppState) -> PageView {
    let category_id = effective_selected_category(state);
    let selected_item = effective_selected_item(state, category_id);

    let categories = state
        .portfolio
        .categories
        .iter()
        .map(|category| {
            let selected = category.id == category_id;
            CategoryButton {
                id: category.id,
                label: category.label.clone(),
                selected,
                on_click: (!selected).then(|| Msg::CategorySelected(category.id)),
            }
        })
        .collect();

    let detail = selected_item.map(|item| DetailView {
        item_id: item.id,
        title: item.title.clone(),
        description: item.description.clone(),
        image_url: item.image_url.clone(),
        link_url: item.link_url.clone(),
    });

    let content = if state.has_error() {
        ContentView::ErrorBanner(state.error_message.clone())
    } else {
        let selected_id = selected_item.map(|item| item.id);
        ContentView::Grid(
            state
                .portfolio
                .items_in_category(category_id)
                .map(|item| Thumbnail {
                    item_id: item.id,
                    title: item.title.clone(),
                    image_url: item.image_url.clone(),
                    overlay_color: item.overlay_color.clone(),
                    selected: selected_id == Some(item.id),
                    on_click: Msg::ItemSelected(item.id),
                })
                .collect(),
        )
    };

    PageView {
        title: PAGE_TITLE,
        subtitle: PAGE_SUBTITLE,
        categories,
        detail,
        content,
    }
}
