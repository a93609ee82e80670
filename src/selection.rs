//! Selection Logic
//!
//! Resolves the optional user selections against the loaded portfolio.

use crate::models::Item;
use crate::store::AppState;

/// Category id used when nothing is selected and no categories are loaded.
/// It does not have to match any real category.
pub const FALLBACK_CATEGORY_ID: i64 = 1;

/// Explicit selection, else the first category, else `FALLBACK_CATEGORY_ID`
pub fn effective_selected_category(state: &AppState) -> i64 {
    state
        .selected_category_id
        .or_else(|| state.portfolio.categories.first().map(|c| c.id))
        .unwrap_or(FALLBACK_CATEGORY_ID)
}

/// The selected item, if it exists and belongs to `category_id`
pub fn effective_selected_item(state: &AppState, category_id: i64) -> Option<&Item> {
    let item_id = state.selected_item_id?;
    state
        .portfolio
        .items
        .iter()
        .find(|item| item.id == item_id && item.category_id == category_id)
}
