//! Portfolio API
//!
//! The single GET against the configured endpoint.

use crate::decode::decode_portfolio_str;
use crate::error::FetchError;
use crate::models::Portfolio;
use crate::update::Msg;

pub async fn fetch_portfolio(url: &str) -> Result<Portfolio, FetchError> {
    web_sys::console::log_1(&format!("[API] GET {}", url).into());
    let response = reqwest::get(url).await?.error_for_status()?;
    let body = response.text().await?;
    let portfolio = decode_portfolio_str(&body)?;
    web_sys::console::log_1(
        &format!(
            "[API] Loaded {} categories, {} items",
            portfolio.categories.len(),
            portfolio.items.len()
        )
        .into(),
    );
    Ok(portfolio)
}

/// Run the fetch and turn its outcome into the message fed back to `update`
pub async fn load_portfolio(url: String) -> Msg {
    match fetch_portfolio(&url).await {
        Ok(portfolio) => Msg::FetchSucceeded(portfolio),
        Err(err) => {
            web_sys::console::error_1(&format!("[API] Fetch failed: {}", err).into());
            Msg::FetchFailed(err.to_string())
        }
    }
}
