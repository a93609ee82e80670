//! Global Application State Store
//!
//! The single root state, held in a Leptos `reactive_stores` store and
//! replaced as a whole on every message.

use reactive_stores::Store;

use crate::models::Portfolio;

/// Global application state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Empty means no error; anything else replaces the grid with a banner
    pub error_message: String,
    /// Last successfully fetched portfolio
    pub portfolio: Portfolio,
    /// Explicit category choice (None = default to the first category)
    pub selected_category_id: Option<i64>,
    /// Explicit item choice, only shown when it belongs to the effective category
    pub selected_item_id: Option<i64>,
    /// Endpoint the portfolio is fetched from
    pub api_url: String,
}

impl AppState {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
