//! UI Components
//!
//! Leptos components drawing the page view model.

mod header;
mod category_bar;
mod detail_panel;
mod main_content;

pub use header::Header;
pub use category_bar::CategoryBar;
pub use detail_panel::DetailPanel;
pub use main_content::MainContent;
